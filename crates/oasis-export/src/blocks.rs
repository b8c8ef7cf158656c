use jiff::civil::DateTime;
use oasis_core::AssessmentId;
use oasis_instruments::scoring::ClassificationResult;
use serde::{Deserialize, Serialize};

use crate::ExportFormat;
use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Centimeters,
    Kilograms,
    KilogramsPerSquareMeter,
    Seconds,
    Percent,
    Points,
    Years,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Centimeters => "cm",
            Unit::Kilograms => "kg",
            Unit::KilogramsPerSquareMeter => "kg/m²",
            Unit::Seconds => "s",
            Unit::Percent => "%",
            Unit::Points => "pontos",
            Unit::Years => "anos",
        }
    }
}

/// One unit of report content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBlock {
    SectionHeader {
        title: String,
    },
    /// Sub-group inside a section (e.g. grip strength under functional tests).
    GroupHeader {
        title: String,
    },
    LabeledPair {
        label: String,
        value: String,
        unit: Option<Unit>,
    },
    ClassifiedPair {
        label: String,
        value: String,
        unit: Option<Unit>,
        classification: ClassificationResult,
    },
    FreeText {
        text: String,
    },
    /// Render time. Not clinical content.
    Footer {
        generated_at: DateTime,
    },
}

impl ReportBlock {
    /// Value with its unit suffix, for pair blocks.
    pub fn display_value(&self) -> Option<String> {
        match self {
            ReportBlock::LabeledPair { value, unit, .. }
            | ReportBlock::ClassifiedPair { value, unit, .. } => {
                Some(format::with_unit(value, *unit))
            }
            _ => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(
            self,
            ReportBlock::SectionHeader { .. } | ReportBlock::GroupHeader { .. }
        )
    }
}

/// The assembled report for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub assessment_id: AssessmentId,
    /// `avaliacao_<name>_<creation millis>`, without extension.
    pub file_stem: String,
    pub blocks: Vec<ReportBlock>,
}

impl ReportDocument {
    /// The suggested PDF filename.
    pub fn filename(&self) -> String {
        self.filename_for(ExportFormat::Pdf)
    }

    pub fn filename_for(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }

    /// Every block except the render-time footer.
    pub fn content(&self) -> Vec<&ReportBlock> {
        self.blocks
            .iter()
            .filter(|b| !matches!(b, ReportBlock::Footer { .. }))
            .collect()
    }

    pub fn section_titles(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                ReportBlock::SectionHeader { title } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn generated_at(&self) -> Option<DateTime> {
        self.blocks.iter().find_map(|b| match b {
            ReportBlock::Footer { generated_at } => Some(*generated_at),
            _ => None,
        })
    }
}
