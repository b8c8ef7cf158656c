use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::id::AssessmentId;
use super::patient::Patient;
use crate::derive;

/// One clinical visit for one patient.
///
/// A finalized snapshot: built once by the intake layer from validated
/// input and never mutated afterwards. Corrections produce a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub patient: Patient,
    pub assessment_date: jiff::civil::Date,
    pub anthropometry: Anthropometry,
    pub lower_limb: LowerLimbTrials,
    pub grip: GripStrength,
    pub six_minute_walk_steps: u32,
    pub katz_points: u8,
    pub lawton_points: u8,
    pub tug_seconds: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Anthropometry {
    pub height_cm: f64,
    pub mass_kg: f64,
    /// Derived from height and mass at intake, rounded to 2 decimals.
    pub bmi: f64,
    pub body_fat_percent: f64,
    pub lean_mass_percent: f64,
}

/// Lower-limb timed strength test, two trials in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LowerLimbTrials {
    pub first_s: f64,
    pub second_s: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GripStrength {
    pub right_first_kg: f64,
    pub right_second_kg: f64,
    pub left_first_kg: f64,
    pub left_second_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Hand {
    Right,
    Left,
}

/// A single grip measurement with its position in the protocol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GripTrial {
    pub hand: Hand,
    /// 1 or 2.
    pub trial: u8,
    pub kg: f64,
}

impl GripStrength {
    /// The four measurements in protocol order: right 1, right 2, left 1, left 2.
    pub fn trials(&self) -> [GripTrial; 4] {
        [
            GripTrial { hand: Hand::Right, trial: 1, kg: self.right_first_kg },
            GripTrial { hand: Hand::Right, trial: 2, kg: self.right_second_kg },
            GripTrial { hand: Hand::Left, trial: 1, kg: self.left_first_kg },
            GripTrial { hand: Hand::Left, trial: 2, kg: self.left_second_kg },
        ]
    }
}

impl AssessmentRecord {
    /// Age in whole years on the assessment date.
    pub fn age(&self) -> Option<i32> {
        derive::derive_age(Some(self.patient.birth_date), self.assessment_date)
    }

    /// Whether the stored BMI equals a fresh derivation from height and mass.
    pub fn bmi_is_consistent(&self) -> bool {
        derive::derive_bmi(self.anthropometry.height_cm, self.anthropometry.mass_kg)
            == Some(self.anthropometry.bmi)
    }

    /// Notes exactly as stored, if they contain any non-whitespace text.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}
