//! Compact per-assessment summary for saved-assessment listings.

use jiff::civil::Date;
use oasis_core::models::patient::Sex;
use oasis_core::{AssessmentId, AssessmentRecord};
use oasis_instruments::scoring::ClassificationResult;
use oasis_instruments::{classify_bmi, classify_katz, classify_lawton, classify_tug};
use serde::{Deserialize, Serialize};

use crate::blocks::Unit;
use crate::format;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetric {
    /// Value with unit, ready to print.
    pub display: String,
    pub classification: ClassificationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub id: AssessmentId,
    pub patient_name: String,
    pub sex: Sex,
    pub assessment_date: Date,
    pub bmi: SummaryMetric,
    pub katz: SummaryMetric,
    pub lawton: SummaryMetric,
    pub tug: SummaryMetric,
}

impl AssessmentSummary {
    pub fn from_record(record: &AssessmentRecord) -> Self {
        let bmi = record.anthropometry.bmi;
        Self {
            id: record.id,
            patient_name: record.patient.name.clone(),
            sex: record.patient.sex,
            assessment_date: record.assessment_date,
            bmi: SummaryMetric {
                display: format::with_unit(
                    &format::number(bmi),
                    Some(Unit::KilogramsPerSquareMeter),
                ),
                classification: classify_bmi(bmi),
            },
            katz: SummaryMetric {
                display: points(record.katz_points),
                classification: classify_katz(i32::from(record.katz_points)),
            },
            lawton: SummaryMetric {
                display: points(record.lawton_points),
                classification: classify_lawton(i32::from(record.lawton_points)),
            },
            tug: SummaryMetric {
                display: format::with_unit(&format::number(record.tug_seconds), Some(Unit::Seconds)),
                classification: classify_tug(record.tug_seconds),
            },
        }
    }

    /// One line for terminal listings.
    pub fn line(&self) -> String {
        let metric = |name: &str, m: &SummaryMetric| {
            let marker = if m.classification.is_normal() { "" } else { "!" };
            format!("{name} {} ({}){marker}", m.display, m.classification.tier.label())
        };
        format!(
            "{}  {}  {}  {}  |  {}  {}  {}  {}",
            self.id,
            format::date(self.assessment_date),
            self.patient_name,
            self.sex.label(),
            metric("IMC", &self.bmi),
            metric("KATZ", &self.katz),
            metric("LAWTON", &self.lawton),
            metric("TUG", &self.tug),
        )
    }
}

fn points(value: u8) -> String {
    format::with_unit(&value.to_string(), Some(Unit::Points))
}
