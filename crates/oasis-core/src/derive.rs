//! Derived values computed once at intake.
//!
//! Both functions are explicit and synchronous: the intake layer calls them
//! when its inputs are complete, and the result is stored on the record.

use jiff::civil::Date;

/// Body-mass index from height (cm) and mass (kg), rounded to 2 decimals.
///
/// Returns `None` unless both inputs are finite and strictly positive.
pub fn derive_bmi(height_cm: f64, mass_kg: f64) -> Option<f64> {
    if !height_cm.is_finite() || !mass_kg.is_finite() || height_cm <= 0.0 || mass_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round_hundredths(mass_kg / height_m.powi(2)))
}

/// Round half away from zero to 2 decimal places.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole elapsed years between `birth` and `on`.
///
/// The year difference is reduced by one while `on` falls before the
/// birthday in its own year. Negative when `birth` is after `on`.
pub fn derive_age(birth: Option<Date>, on: Date) -> Option<i32> {
    let birth = birth?;
    let mut age = i32::from(on.year()) - i32::from(birth.year());
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}
