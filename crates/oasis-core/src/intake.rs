//! Intake: turns raw form input into a finalized [`AssessmentRecord`].
//!
//! This is the data-entry side of the system. Every required field and
//! every measurement constraint is checked here, so the classification and
//! report layers can treat records as complete.

use std::fmt;
use std::ops::RangeInclusive;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::derive::derive_bmi;
use crate::error::CoreError;
use crate::models::assessment::{
    AssessmentRecord, Anthropometry, GripStrength, LowerLimbTrials,
};
use crate::models::id::AssessmentId;
use crate::models::patient::{Patient, Sex};

const KATZ_RANGE: RangeInclusive<i32> = 0..=6;
const LAWTON_RANGE: RangeInclusive<i32> = 0..=27;

/// Form input as submitted. Everything is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AssessmentInput {
    pub name: Option<String>,
    pub birth_date: Option<Date>,
    pub sex: Option<Sex>,
    /// Defaults to the creation day when absent.
    pub assessment_date: Option<Date>,
    pub height_cm: Option<f64>,
    pub mass_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub lean_mass_percent: Option<f64>,
    pub lower_limb_first_s: Option<f64>,
    pub lower_limb_second_s: Option<f64>,
    pub grip_right_first_kg: Option<f64>,
    pub grip_right_second_kg: Option<f64>,
    pub grip_left_first_kg: Option<f64>,
    pub grip_left_second_kg: Option<f64>,
    pub six_minute_walk_steps: Option<i32>,
    pub katz_points: Option<i32>,
    pub lawton_points: Option<i32>,
    pub tug_seconds: Option<f64>,
    pub notes: Option<String>,
}

/// A problem with one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, "required field")
    }
}

/// Every field error found in one input, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl AssessmentInput {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check required fields and measurement constraints.
    ///
    /// Returns every problem at once; an empty vector means the input can
    /// be turned into a record.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name_blank = self
            .name
            .as_deref()
            .map(|n| n.trim().is_empty())
            .unwrap_or(true);
        if name_blank {
            errors.push(FieldError::required("name"));
        }
        if self.birth_date.is_none() {
            errors.push(FieldError::required("birth_date"));
        }
        if self.sex.is_none() {
            errors.push(FieldError::required("sex"));
        }

        check_positive(&mut errors, "height_cm", self.height_cm);
        check_positive(&mut errors, "mass_kg", self.mass_kg);
        check_percentage(&mut errors, "body_fat_percent", self.body_fat_percent);
        check_percentage(&mut errors, "lean_mass_percent", self.lean_mass_percent);

        check_positive(&mut errors, "lower_limb_first_s", self.lower_limb_first_s);
        check_positive(&mut errors, "lower_limb_second_s", self.lower_limb_second_s);
        check_positive(&mut errors, "grip_right_first_kg", self.grip_right_first_kg);
        check_positive(&mut errors, "grip_right_second_kg", self.grip_right_second_kg);
        check_positive(&mut errors, "grip_left_first_kg", self.grip_left_first_kg);
        check_positive(&mut errors, "grip_left_second_kg", self.grip_left_second_kg);

        match self.six_minute_walk_steps {
            None => errors.push(FieldError::required("six_minute_walk_steps")),
            Some(steps) if steps < 0 => errors.push(FieldError::new(
                "six_minute_walk_steps",
                format!("must not be negative, got {steps}"),
            )),
            Some(_) => {}
        }
        check_points(&mut errors, "katz_points", self.katz_points, KATZ_RANGE);
        check_points(&mut errors, "lawton_points", self.lawton_points, LAWTON_RANGE);
        check_positive(&mut errors, "tug_seconds", self.tug_seconds);

        errors
    }

    /// Validate and build the finalized record.
    ///
    /// `today` is used when no assessment date was entered.
    pub fn into_record(self, id: AssessmentId, today: Date) -> Result<AssessmentRecord, CoreError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(CoreError::Validation(ValidationErrors(errors)));
        }

        let height_cm = required(self.height_cm, "height_cm")?;
        let mass_kg = required(self.mass_kg, "mass_kg")?;
        let bmi = required(derive_bmi(height_cm, mass_kg), "bmi")?;

        let name = required(self.name, "name")?.trim().to_string();
        let notes = self.notes.filter(|n| !n.trim().is_empty());

        Ok(AssessmentRecord {
            id,
            patient: Patient {
                name,
                birth_date: required(self.birth_date, "birth_date")?,
                sex: required(self.sex, "sex")?,
            },
            assessment_date: self.assessment_date.unwrap_or(today),
            anthropometry: Anthropometry {
                height_cm,
                mass_kg,
                bmi,
                body_fat_percent: required(self.body_fat_percent, "body_fat_percent")?,
                lean_mass_percent: required(self.lean_mass_percent, "lean_mass_percent")?,
            },
            lower_limb: LowerLimbTrials {
                first_s: required(self.lower_limb_first_s, "lower_limb_first_s")?,
                second_s: required(self.lower_limb_second_s, "lower_limb_second_s")?,
            },
            grip: GripStrength {
                right_first_kg: required(self.grip_right_first_kg, "grip_right_first_kg")?,
                right_second_kg: required(self.grip_right_second_kg, "grip_right_second_kg")?,
                left_first_kg: required(self.grip_left_first_kg, "grip_left_first_kg")?,
                left_second_kg: required(self.grip_left_second_kg, "grip_left_second_kg")?,
            },
            six_minute_walk_steps: narrow(self.six_minute_walk_steps, "six_minute_walk_steps")?,
            katz_points: narrow(self.katz_points, "katz_points")?,
            lawton_points: narrow(self.lawton_points, "lawton_points")?,
            tug_seconds: required(self.tug_seconds, "tug_seconds")?,
            notes,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::MissingField(field.to_string()))
}

fn narrow<T: TryFrom<i32>>(value: Option<i32>, field: &str) -> Result<T, CoreError> {
    let raw = required(value, field)?;
    T::try_from(raw).map_err(|_| {
        CoreError::Validation(ValidationErrors(vec![FieldError::new(
            field,
            format!("value {raw} does not fit the field"),
        )]))
    })
}

fn check_positive(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    match value {
        None => errors.push(FieldError::required(field)),
        Some(v) if !v.is_finite() || v <= 0.0 => {
            errors.push(FieldError::new(field, format!("must be greater than zero, got {v}")))
        }
        Some(_) => {}
    }
}

fn check_percentage(errors: &mut Vec<FieldError>, field: &str, value: Option<f64>) {
    match value {
        None => errors.push(FieldError::required(field)),
        Some(v) if !(0.0..=100.0).contains(&v) => {
            errors.push(FieldError::new(field, format!("must be between 0 and 100, got {v}")))
        }
        Some(_) => {}
    }
}

fn check_points(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: Option<i32>,
    range: RangeInclusive<i32>,
) {
    match value {
        None => errors.push(FieldError::required(field)),
        Some(v) if !range.contains(&v) => errors.push(FieldError::new(
            field,
            format!("must be between {} and {}, got {v}", range.start(), range.end()),
        )),
        Some(_) => {}
    }
}
