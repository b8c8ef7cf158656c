//! oasis-storage
//!
//! Persistence for assessment records. The core never touches storage;
//! hosts inject an [`AssessmentRepository`] where they need one.

pub mod error;
pub mod file;
pub mod memory;
pub mod repository;

pub use file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use repository::AssessmentRepository;
