use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect,
};

use oasis_instruments::scoring::ClassificationResult;

use crate::blocks::{ReportBlock, ReportDocument};
use crate::error::{RenderFailure, RenderStage};
use crate::format;
use crate::styles::{DocumentStyles, Rgb};
use crate::{DocumentRenderer, ExportFormat};

// A4 portrait, millimetres, origin bottom-left.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const HEADER_BAND_HEIGHT: f32 = 30.0;
const BAND_LEFT: f32 = 10.0;
const BAND_RIGHT: f32 = PAGE_WIDTH - 10.0;
const LEFT_X: f32 = 15.0;
const RIGHT_X: f32 = 110.0;
const COLUMN_WIDTH: f32 = RIGHT_X - LEFT_X - 5.0;
const BOTTOM_LIMIT: f32 = 22.0;
const FOOTER_Y: f32 = 10.0;
const ROW_STEP: f32 = 6.0;
const LINE_STEP: f32 = 5.0;
const WRAP_CHARS: usize = 95;

// Average Helvetica glyph width is about half the em size.
const PT_TO_MM: f32 = 0.3528;
const AVG_GLYPH_EM: f32 = 0.5;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// A4 PDF with a branded header band, gray section bands, two-column
/// fields and colored classification badges.
pub struct PdfRenderer {
    styles: DocumentStyles,
}

impl PdfRenderer {
    pub fn new(styles: DocumentStyles) -> Self {
        Self { styles }
    }
}

impl DocumentRenderer for PdfRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderFailure> {
        let id = document.assessment_id;
        let (doc, page, layer) = PdfDocument::new(
            &self.styles.report_title,
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderFailure::new(id, RenderStage::Layout, format!("PDF font error: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderFailure::new(id, RenderStage::Layout, format!("PDF font error: {e}")))?;

        {
            let mut writer = PageWriter {
                doc: &doc,
                layer: doc.get_page(page).get_layer(layer),
                y: PAGE_HEIGHT,
                column: 0,
                regular: &regular,
                bold: &bold,
                styles: &self.styles,
            };
            writer.header_band();
            for block in &document.blocks {
                writer.block(block);
            }
        }

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf)
            .map_err(|e| RenderFailure::new(id, RenderStage::Encode, format!("PDF save error: {e}")))?;
        buf.into_inner()
            .map_err(|e| RenderFailure::new(id, RenderStage::Encode, format!("PDF buffer error: {e}")))
    }
}

/// Cursor over the current page. `y` is the next baseline.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    /// 0 = left column free, 1 = left column taken on the current row.
    column: usize,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    styles: &'a DocumentStyles,
}

impl PageWriter<'_> {
    fn block(&mut self, block: &ReportBlock) {
        match block {
            ReportBlock::SectionHeader { title } => self.section(title),
            ReportBlock::GroupHeader { title } => self.group(title),
            ReportBlock::LabeledPair { label, .. } => {
                let value = block.display_value().unwrap_or_default();
                self.field(label, &value, None);
            }
            ReportBlock::ClassifiedPair {
                label,
                classification,
                ..
            } => {
                let value = block.display_value().unwrap_or_default();
                self.field(label, &value, Some(*classification));
            }
            ReportBlock::FreeText { text } => self.free_text(text),
            ReportBlock::Footer { generated_at } => {
                self.end_row();
                let text = format!("Gerado em: {}", format::timestamp(*generated_at));
                self.fill(self.styles.footer_text);
                self.centered(&text, self.styles.footer_size as f32, FOOTER_Y, false);
                self.fill(BLACK);
            }
        }
    }

    fn header_band(&mut self) {
        let styles = self.styles;
        let size = styles.title_size as f32;

        self.fill(styles.header_band);
        self.rect(0.0, PAGE_HEIGHT - HEADER_BAND_HEIGHT, PAGE_WIDTH, PAGE_HEIGHT);
        self.fill(BLACK);
        self.centered(&styles.brand_title, size, PAGE_HEIGHT - 13.0, true);
        self.centered(&styles.report_title, size, PAGE_HEIGHT - 23.0, true);

        self.y = PAGE_HEIGHT - HEADER_BAND_HEIGHT - 15.0;
    }

    fn section(&mut self, title: &str) {
        self.end_row();
        self.ensure_space(20.0);
        self.y -= 4.0;

        self.fill(self.styles.section_band);
        self.rect(BAND_LEFT, self.y - 3.0, BAND_RIGHT, self.y + 5.0);
        self.fill(BLACK);
        self.text(title, self.styles.section_size as f32, LEFT_X, true);

        self.y -= 12.0;
    }

    fn group(&mut self, title: &str) {
        self.end_row();
        self.ensure_space(14.0);
        self.y -= 2.0;
        self.text(title, self.styles.body_size as f32, LEFT_X, true);
        self.y -= 8.0;
    }

    fn field(&mut self, label: &str, value: &str, classification: Option<ClassificationResult>) {
        let size = self.styles.body_size as f32;
        let text = format!("{label}: {value}");
        let badge = classification.map(|c| (format!("({})", c.tier.label()), c.severity));

        let mut width = text_width(&text, size);
        if let Some((badge_text, _)) = &badge {
            width += 2.0 + text_width(badge_text, size);
        }
        let full_row = width > COLUMN_WIDTH;
        if full_row {
            self.end_row();
        }
        if self.column == 0 {
            self.ensure_space(ROW_STEP);
        }

        let x = if self.column == 0 { LEFT_X } else { RIGHT_X };
        self.text(&text, size, x, false);
        if let Some((badge_text, severity)) = badge {
            let badge_x = x + text_width(&text, size) + 2.0;
            self.fill(self.styles.badge_color(severity));
            self.text(&badge_text, size, badge_x, true);
            self.fill(BLACK);
        }

        if full_row || self.column == 1 {
            self.column = 0;
            self.y -= ROW_STEP;
        } else {
            self.column = 1;
        }
    }

    fn free_text(&mut self, text: &str) {
        self.end_row();
        let size = self.styles.body_size as f32;
        for paragraph in text.lines() {
            for line in format::wrap_text(paragraph, WRAP_CHARS) {
                self.ensure_space(LINE_STEP);
                self.text(&line, size, LEFT_X, false);
                self.y -= LINE_STEP;
            }
        }
    }

    /// Close a half-filled two-column row.
    fn end_row(&mut self) {
        if self.column == 1 {
            self.column = 0;
            self.y -= ROW_STEP;
        }
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed >= BOTTOM_LIMIT {
            return;
        }
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - 20.0;
        self.column = 0;
    }

    fn text(&self, text: &str, size: f32, x: f32, bold: bool) {
        let font = if bold { self.bold } else { self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn centered(&self, text: &str, size: f32, y: f32, bold: bool) {
        let font = if bold { self.bold } else { self.regular };
        let x = ((PAGE_WIDTH - text_width(text, size)) / 2.0).max(LEFT_X);
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn fill(&self, color: Rgb) {
        let (r, g, b) = color.fractions();
        self.layer
            .set_fill_color(Color::Rgb(printpdf::Rgb::new(r, g, b, None)));
    }

    fn rect(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let rect = Rect::new(Mm(x1), Mm(y1), Mm(x2), Mm(y2)).with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
    }
}

/// Approximate rendered width in millimetres.
fn text_width(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * AVG_GLYPH_EM * PT_TO_MM
}
