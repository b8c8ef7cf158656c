//! oasis-export
//!
//! Report assembly and rendering. [`assemble`](assemble::assemble) turns an
//! assessment and its classifications into an ordered block list; the
//! renderers turn that list into PDF, DOCX or Markdown bytes.

pub mod assemble;
pub mod blocks;
pub mod docx;
pub mod error;
pub mod format;
pub mod pdf;
pub mod render;
pub mod styles;
pub mod summary;

use std::fmt;
use std::str::FromStr;

use jiff::civil::DateTime;
use oasis_core::AssessmentRecord;
use oasis_instruments::ClassificationSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::blocks::ReportDocument;
use crate::error::RenderFailure;
use crate::styles::DocumentStyles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Document renderer backend.
///
/// Receives a fully assembled document and produces the binary artifact.
/// Rendering never sees the record itself, so it cannot modify it.
pub trait DocumentRenderer: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderFailure>;
}

/// Build the renderer for `format`.
pub fn renderer_for(format: ExportFormat, styles: DocumentStyles) -> Box<dyn DocumentRenderer> {
    match format {
        ExportFormat::Pdf => Box::new(pdf::PdfRenderer::new(styles)),
        ExportFormat::Docx => Box::new(docx::DocxRenderer::new(styles)),
        ExportFormat::Markdown => Box::new(render::MarkdownRenderer::new(styles)),
    }
}

/// A rendered report ready to be saved or offered for download.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Classify, assemble and render one assessment.
///
/// The renderer is invoked exactly once; a failure is returned to the
/// caller as-is and nothing is retried.
pub fn export(
    record: &AssessmentRecord,
    renderer: &dyn DocumentRenderer,
    generated_at: DateTime,
) -> Result<RenderedReport, RenderFailure> {
    let classifications = ClassificationSet::for_record(record);
    let document = assemble::assemble(record, &classifications, generated_at);
    let format = renderer.format();

    debug!(
        assessment_id = %record.id,
        format = %format,
        blocks = document.blocks.len(),
        "rendering report"
    );

    let bytes = renderer.render(&document).inspect_err(|e| {
        warn!(assessment_id = %record.id, format = %format, error = %e, "report rendering failed");
    })?;

    Ok(RenderedReport {
        filename: document.filename_for(format),
        content_type: format.content_type(),
        bytes,
    })
}
