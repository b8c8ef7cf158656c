use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, Style, StyleType};

use crate::blocks::{ReportBlock, ReportDocument};
use crate::error::{RenderFailure, RenderStage};
use crate::format;
use crate::styles::DocumentStyles;
use crate::{DocumentRenderer, ExportFormat};

/// Word document: headings for sections and groups, one paragraph per
/// field, colored classification runs.
pub struct DocxRenderer {
    styles: DocumentStyles,
}

impl DocxRenderer {
    pub fn new(styles: DocumentStyles) -> Self {
        Self { styles }
    }
}

impl DocumentRenderer for DocxRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderFailure> {
        let styles = &self.styles;
        let mut docx = Docx::new()
            .add_style(heading_style("Heading1", "heading 1", styles.title_size))
            .add_style(heading_style("Heading2", "heading 2", styles.section_size))
            .add_style(heading_style("Heading3", "heading 3", styles.body_size));

        for title in [&styles.brand_title, &styles.report_title] {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .style("Heading1")
                    .align(AlignmentType::Center)
                    .add_run(Run::new().add_text(title.as_str()).highlight("yellow")),
            );
        }

        for block in &document.blocks {
            docx = match block {
                ReportBlock::SectionHeader { title } => {
                    docx.add_paragraph(heading_paragraph(title, "Heading2"))
                }
                ReportBlock::GroupHeader { title } => {
                    docx.add_paragraph(heading_paragraph(title, "Heading3"))
                }
                ReportBlock::LabeledPair { label, .. } => {
                    let value = block.display_value().unwrap_or_default();
                    docx.add_paragraph(field_paragraph(label, &value, styles))
                }
                ReportBlock::ClassifiedPair {
                    label,
                    classification,
                    ..
                } => {
                    let value = block.display_value().unwrap_or_default();
                    let color = styles.badge_color(classification.severity).hex();
                    let badge = Run::new()
                        .add_text(format!(" ({})", classification.tier.label()))
                        .bold()
                        .color(color)
                        .size(styles.body_size * 2);
                    docx.add_paragraph(field_paragraph(label, &value, styles).add_run(badge))
                }
                ReportBlock::FreeText { text } => {
                    let mut docx = docx;
                    for line in text.lines() {
                        docx = docx.add_paragraph(
                            Paragraph::new()
                                .add_run(Run::new().add_text(line).size(styles.body_size * 2)),
                        );
                    }
                    docx
                }
                ReportBlock::Footer { generated_at } => docx.add_paragraph(
                    Paragraph::new().align(AlignmentType::Center).add_run(
                        Run::new()
                            .add_text(format!("Gerado em: {}", format::timestamp(*generated_at)))
                            .size(styles.footer_size * 2)
                            .color(styles.footer_text.hex()),
                    ),
                ),
            };
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).map_err(|e| {
            RenderFailure::new(
                document.assessment_id,
                RenderStage::Encode,
                format!("DOCX generation failed: {e}"),
            )
        })?;

        Ok(buf.into_inner())
    }
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn field_paragraph(label: &str, value: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(
            Run::new()
                .add_text(format!("{label}: "))
                .bold()
                .size(styles.body_size * 2),
        )
        .add_run(Run::new().add_text(value).size(styles.body_size * 2))
}
