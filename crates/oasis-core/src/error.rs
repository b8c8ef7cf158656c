use thiserror::Error;

use crate::intake::ValidationErrors;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid assessment id: {0}")]
    InvalidId(#[from] uuid::Error),

    #[error("assessment input failed validation: {0}")]
    Validation(ValidationErrors),
}
