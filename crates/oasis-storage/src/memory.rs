use std::sync::RwLock;

use oasis_core::{AssessmentId, AssessmentRecord};

use crate::error::StorageError;
use crate::repository::{self, AssessmentRepository};

/// Process-local repository, for tests and one-shot hosts.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<AssessmentRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AssessmentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl AssessmentRepository for InMemoryRepository {
    fn append(&self, record: AssessmentRecord) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(|_| StorageError::Poisoned)?;
        repository::append_unique(&mut records, record)
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        let records = self.records.read().map_err(|_| StorageError::Poisoned)?;
        Ok(records.clone())
    }

    fn remove(&self, id: AssessmentId) -> Result<AssessmentRecord, StorageError> {
        let mut records = self.records.write().map_err(|_| StorageError::Poisoned)?;
        repository::take(&mut records, id)
    }
}
