use std::fmt;

use oasis_core::AssessmentId;
use thiserror::Error;

/// Where in the rendering pipeline a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// Template parsing or evaluation.
    Template,
    /// Fonts, pages and drawing.
    Layout,
    /// Serializing the finished document to bytes.
    Encode,
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderStage::Template => "template",
            RenderStage::Layout => "layout",
            RenderStage::Encode => "encode",
        })
    }
}

/// The document backend could not produce the artifact.
///
/// Nothing is persisted when this is returned: no partial document and no
/// change to the assessment.
#[derive(Debug, Error)]
#[error("failed to render assessment {assessment_id} ({stage} stage): {message}")]
pub struct RenderFailure {
    pub assessment_id: AssessmentId,
    pub stage: RenderStage,
    pub message: String,
}

impl RenderFailure {
    pub fn new(assessment_id: AssessmentId, stage: RenderStage, message: impl Into<String>) -> Self {
        Self {
            assessment_id,
            stage,
            message: message.into(),
        }
    }
}
