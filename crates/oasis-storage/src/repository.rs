use oasis_core::{AssessmentId, AssessmentRecord};

use crate::error::StorageError;

/// The saved-assessment collection.
///
/// Records are immutable once appended; a correction is a new record.
/// `list` returns records in insertion order.
pub trait AssessmentRepository: Send + Sync {
    /// Store a new record. Fails with [`StorageError::Duplicate`] if its
    /// id is already present.
    fn append(&self, record: AssessmentRecord) -> Result<(), StorageError>;

    fn list(&self) -> Result<Vec<AssessmentRecord>, StorageError>;

    /// Delete a record. Fails with [`StorageError::NotFound`] for an
    /// unknown id.
    fn remove(&self, id: AssessmentId) -> Result<AssessmentRecord, StorageError>;

    fn get(&self, id: AssessmentId) -> Result<AssessmentRecord, StorageError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(StorageError::NotFound { id })
    }
}

pub(crate) fn append_unique(
    records: &mut Vec<AssessmentRecord>,
    record: AssessmentRecord,
) -> Result<(), StorageError> {
    if records.iter().any(|r| r.id == record.id) {
        return Err(StorageError::Duplicate { id: record.id });
    }
    records.push(record);
    Ok(())
}

pub(crate) fn take(
    records: &mut Vec<AssessmentRecord>,
    id: AssessmentId,
) -> Result<AssessmentRecord, StorageError> {
    let index = records
        .iter()
        .position(|r| r.id == id)
        .ok_or(StorageError::NotFound { id })?;
    Ok(records.remove(index))
}
