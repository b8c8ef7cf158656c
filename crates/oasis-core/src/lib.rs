//! oasis-core
//!
//! Pure domain types for the physical-functional assessment system.
//! No I/O, no rendering: the shared vocabulary of every other crate.

pub mod derive;
pub mod error;
pub mod intake;
pub mod models;

pub use models::assessment::AssessmentRecord;
pub use models::id::AssessmentId;
