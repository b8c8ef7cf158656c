use oasis_core::AssessmentRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::{ClassificationResult, Severity};
use crate::{
    classify_bmi, classify_grip, classify_katz, classify_lawton, classify_lower_limb,
    classify_six_minute_walk, classify_tug,
};

/// Every classification of one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationSet {
    /// Age on the assessment date, as used by the lower-limb bands.
    pub age: Option<i32>,
    pub bmi: ClassificationResult,
    /// First and second trial.
    pub lower_limb: [ClassificationResult; 2],
    /// Right 1, right 2, left 1, left 2.
    pub grip: [ClassificationResult; 4],
    pub six_minute_walk: ClassificationResult,
    pub katz: ClassificationResult,
    pub lawton: ClassificationResult,
    pub tug: ClassificationResult,
}

impl ClassificationSet {
    pub fn for_record(record: &AssessmentRecord) -> Self {
        let age = record.age();
        let grip = record.grip.trials().map(|t| classify_grip(t.kg));

        Self {
            age,
            bmi: classify_bmi(record.anthropometry.bmi),
            lower_limb: [
                classify_lower_limb(record.lower_limb.first_s, age),
                classify_lower_limb(record.lower_limb.second_s, age),
            ],
            grip,
            six_minute_walk: classify_six_minute_walk(i64::from(record.six_minute_walk_steps)),
            katz: classify_katz(i32::from(record.katz_points)),
            lawton: classify_lawton(i32::from(record.lawton_points)),
            tug: classify_tug(record.tug_seconds),
        }
    }

    /// All results in report order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassificationResult> {
        std::iter::once(&self.bmi)
            .chain(self.lower_limb.iter())
            .chain(self.grip.iter())
            .chain([&self.six_minute_walk, &self.katz, &self.lawton, &self.tug])
    }

    pub fn attention_count(&self) -> usize {
        self.iter()
            .filter(|c| c.severity == Severity::AttentionNeeded)
            .count()
    }
}
