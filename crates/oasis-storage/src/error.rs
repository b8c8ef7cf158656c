use std::path::PathBuf;

use oasis_core::AssessmentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("assessment not found: {id}")]
    NotFound { id: AssessmentId },

    #[error("assessment already stored: {id}")]
    Duplicate { id: AssessmentId },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("repository lock poisoned")]
    Poisoned,
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}
