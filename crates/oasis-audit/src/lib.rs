//! oasis-audit
//!
//! Application-level audit trail, emitted through `tracing`.

pub mod events;

pub use events::{Action, AuditEvent};
