use std::path::{Path, PathBuf};

use jiff::civil::DateTime;
use oasis_audit::{Action, AuditEvent};
use oasis_core::intake::AssessmentInput;
use oasis_core::{AssessmentId, AssessmentRecord};
use oasis_export::assemble::assemble;
use oasis_export::render::MarkdownRenderer;
use oasis_export::summary::AssessmentSummary;
use oasis_export::{DocumentRenderer, ExportFormat, export, renderer_for};
use oasis_instruments::ClassificationSet;
use oasis_storage::AssessmentRepository;
use tracing::info;

use crate::config::OasisConfig;

/// Configuration plus the injected repository.
pub struct App {
    pub config: OasisConfig,
    repo: Box<dyn AssessmentRepository>,
}

/// A newly created assessment and where its document went.
#[derive(Debug)]
pub struct Created {
    pub record: AssessmentRecord,
    pub report: Result<PathBuf, eyre::Report>,
}

impl App {
    pub fn new(config: OasisConfig, repo: Box<dyn AssessmentRepository>) -> Self {
        Self { config, repo }
    }

    /// Validate and store a new assessment, then render it.
    ///
    /// The record is stored before rendering; a failed render is reported
    /// in [`Created::report`] and can be retried with [`App::export`].
    /// [`App::create_with`] takes the backend directly.
    pub fn create(&self, input: AssessmentInput, format: ExportFormat) -> eyre::Result<Created> {
        let renderer = renderer_for(format, self.config.document_styles());
        self.create_with(input, renderer.as_ref())
    }

    pub fn create_with(
        &self,
        input: AssessmentInput,
        renderer: &dyn DocumentRenderer,
    ) -> eyre::Result<Created> {
        let now = self.config.now()?;
        let record = input.into_record(AssessmentId::new(), now.date())?;

        self.repo.append(record.clone())?;
        AuditEvent::assessment(Action::Create, record.id, self.config.operator()).emit();

        let report = self.write_report(&record, renderer, &self.config.output_dir, now.datetime());
        Ok(Created { record, report })
    }

    pub fn list(&self) -> eyre::Result<Vec<AssessmentSummary>> {
        Ok(self
            .repo
            .list()?
            .iter()
            .map(AssessmentSummary::from_record)
            .collect())
    }

    /// Markdown rendition of a stored assessment.
    pub fn preview(&self, id: AssessmentId) -> eyre::Result<String> {
        let record = self.repo.get(id)?;
        let classes = ClassificationSet::for_record(&record);
        let document = assemble(&record, &classes, self.config.now()?.datetime());
        let renderer = MarkdownRenderer::new(self.config.document_styles());
        Ok(renderer.render_to_string(&document)?)
    }

    /// Re-render a stored assessment into `out` (default: the configured
    /// output directory).
    pub fn export(
        &self,
        id: AssessmentId,
        format: ExportFormat,
        out: Option<&Path>,
    ) -> eyre::Result<PathBuf> {
        let renderer = renderer_for(format, self.config.document_styles());
        self.export_with(id, renderer.as_ref(), out)
    }

    /// Re-render with a given backend. Storage is only read.
    pub fn export_with(
        &self,
        id: AssessmentId,
        renderer: &dyn DocumentRenderer,
        out: Option<&Path>,
    ) -> eyre::Result<PathBuf> {
        let record = self.repo.get(id)?;
        let dir = out.unwrap_or(self.config.output_dir.as_path());
        self.write_report(&record, renderer, dir, self.config.now()?.datetime())
    }

    pub fn remove(&self, id: AssessmentId) -> eyre::Result<AssessmentRecord> {
        let removed = self.repo.remove(id)?;
        AuditEvent::assessment(Action::Remove, id, self.config.operator()).emit();
        Ok(removed)
    }

    fn write_report(
        &self,
        record: &AssessmentRecord,
        renderer: &dyn DocumentRenderer,
        dir: &Path,
        generated_at: DateTime,
    ) -> eyre::Result<PathBuf> {
        let format = renderer.format();
        let report = export(record, renderer, generated_at)?;

        std::fs::create_dir_all(dir)
            .map_err(|e| eyre::eyre!("failed to create {}: {e}", dir.display()))?;
        let path = dir.join(&report.filename);
        std::fs::write(&path, &report.bytes)
            .map_err(|e| eyre::eyre!("failed to write {}: {e}", path.display()))?;

        info!(
            assessment_id = %record.id,
            path = %path.display(),
            bytes = report.bytes.len(),
            "report written"
        );
        AuditEvent::assessment(Action::Export, record.id, self.config.operator())
            .with_details(serde_json::json!({
                "format": format,
                "file": report.filename,
            }))
            .emit();

        Ok(path)
    }
}
