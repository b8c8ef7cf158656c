use serde::Serialize;
use tera::{Context, Tera};

use crate::blocks::{ReportBlock, ReportDocument};
use crate::error::{RenderFailure, RenderStage};
use crate::format;
use crate::styles::DocumentStyles;
use crate::{DocumentRenderer, ExportFormat};

const TEMPLATE_NAME: &str = "report";

const TEMPLATE: &str = r#"# {{ brand_title }}

## {{ report_title }}
{% for block in blocks %}
{%- if block.kind == "section_header" %}

### {{ block.title }}

{% elif block.kind == "group_header" %}
**{{ block.title }}**

{% elif block.kind == "free_text" %}
{{ block.text }}

{% elif block.kind == "footer" %}

---

_Gerado em: {{ block.text }}_
{% else -%}
- {{ block.label }}: {{ block.value }}{% if block.badge %}{% if block.attention %} **({{ block.badge }})**{% else %} ({{ block.badge }}){% endif %}{% endif %}
{% endif -%}
{% endfor %}"#;

/// Plain-text preview of a report, rendered through a Tera template.
pub struct MarkdownRenderer {
    styles: DocumentStyles,
}

impl MarkdownRenderer {
    pub fn new(styles: DocumentStyles) -> Self {
        Self { styles }
    }

    pub fn render_to_string(&self, document: &ReportDocument) -> Result<String, RenderFailure> {
        let fail = |message: String| {
            RenderFailure::new(document.assessment_id, RenderStage::Template, message)
        };

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| fail(format!("template parse error: {e}")))?;

        let view = DocumentView {
            brand_title: &self.styles.brand_title,
            report_title: &self.styles.report_title,
            blocks: document.blocks.iter().map(BlockView::from).collect(),
        };
        let value = serde_json::to_value(&view).map_err(|e| fail(e.to_string()))?;
        let context = Context::from_value(value).map_err(|e| fail(e.to_string()))?;

        tera.render(TEMPLATE_NAME, &context)
            .map_err(|e| fail(format!("template rendering failed: {e}")))
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderFailure> {
        self.render_to_string(document).map(String::into_bytes)
    }
}

#[derive(Serialize)]
struct DocumentView<'a> {
    brand_title: &'a str,
    report_title: &'a str,
    blocks: Vec<BlockView>,
}

/// Flattened block for the template: every field present, `null` when
/// the block kind has no such part.
#[derive(Serialize, Default)]
struct BlockView {
    kind: &'static str,
    title: Option<String>,
    label: Option<String>,
    value: Option<String>,
    badge: Option<&'static str>,
    attention: bool,
    text: Option<String>,
}

impl From<&ReportBlock> for BlockView {
    fn from(block: &ReportBlock) -> Self {
        match block {
            ReportBlock::SectionHeader { title } => BlockView {
                kind: "section_header",
                title: Some(title.clone()),
                ..Default::default()
            },
            ReportBlock::GroupHeader { title } => BlockView {
                kind: "group_header",
                title: Some(title.clone()),
                ..Default::default()
            },
            ReportBlock::LabeledPair { label, .. } => BlockView {
                kind: "labeled_pair",
                label: Some(label.clone()),
                value: block.display_value(),
                ..Default::default()
            },
            ReportBlock::ClassifiedPair {
                label,
                classification,
                ..
            } => BlockView {
                kind: "classified_pair",
                label: Some(label.clone()),
                value: block.display_value(),
                badge: Some(classification.tier.label()),
                attention: !classification.is_normal(),
                ..Default::default()
            },
            ReportBlock::FreeText { text } => BlockView {
                kind: "free_text",
                text: Some(text.clone()),
                ..Default::default()
            },
            ReportBlock::Footer { generated_at } => BlockView {
                kind: "footer",
                text: Some(format::timestamp(*generated_at)),
                ..Default::default()
            },
        }
    }
}
