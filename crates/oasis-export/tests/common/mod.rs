#![allow(dead_code)]

use jiff::civil::{date, DateTime};
use oasis_core::intake::AssessmentInput;
use oasis_core::models::patient::Sex;
use oasis_core::{AssessmentId, AssessmentRecord};

pub const CREATED_MILLIS: i64 = 1_700_000_000_000;

pub fn maria_input() -> AssessmentInput {
    AssessmentInput {
        name: Some("Maria Silva".to_string()),
        birth_date: Some(date(1960, 3, 10)),
        sex: Some(Sex::Female),
        assessment_date: Some(date(2024, 3, 9)),
        height_cm: Some(160.0),
        mass_kg: Some(70.0),
        body_fat_percent: Some(30.0),
        lean_mass_percent: Some(65.0),
        lower_limb_first_s: Some(13.0),
        lower_limb_second_s: Some(14.5),
        grip_right_first_kg: Some(25.0),
        grip_right_second_kg: Some(31.0),
        grip_left_first_kg: Some(12.0),
        grip_left_second_kg: Some(8.0),
        six_minute_walk_steps: Some(350),
        katz_points: Some(6),
        lawton_points: Some(20),
        tug_seconds: Some(15.0),
        notes: None,
    }
}

pub fn record(input: AssessmentInput) -> AssessmentRecord {
    input
        .into_record(AssessmentId::from_millis(CREATED_MILLIS), date(2024, 3, 9))
        .unwrap()
}

pub fn maria() -> AssessmentRecord {
    record(maria_input())
}

pub fn at(hour: i8, minute: i8) -> DateTime {
    date(2024, 3, 9).at(hour, minute, 0, 0)
}
