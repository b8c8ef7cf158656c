//! oasis-instruments
//!
//! Classification engine. Pure, stateless mappings from clinical
//! measurements to ordinal tiers, one module per instrument. Every
//! function is total: implausible values are classified, never rejected.

pub mod classify;
pub mod instruments;
pub mod scoring;

use scoring::{Band, Bound, ClassificationResult, first_match};

pub use classify::ClassificationSet;
pub use instruments::lower_limb::LowerLimbStrength;

/// A single-input instrument with a fixed reference table.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g. "bmi", "katz").
    fn id(&self) -> &str;

    /// Human-readable name as printed on reports.
    fn name(&self) -> &str;

    /// Reference bands, evaluated top to bottom.
    fn bands(&self) -> &[Band];

    fn classify(&self, value: f64) -> ClassificationResult {
        first_match(self.bands(), value).into()
    }

    /// Reference table as structured text.
    fn describe_bands(&self) -> String {
        let mut output = format!("## {}\n", self.name());
        for band in self.bands() {
            let rule = match band.bound {
                Bound::Below(limit) => format!("< {limit}"),
                Bound::AtLeast(limit) => format!(">= {limit}"),
                Bound::Exactly(target) => format!("= {target}"),
                Bound::Otherwise => "demais valores".to_string(),
            };
            output.push_str(&format!("- {rule}: {}\n", band.tier.label()));
        }
        output
    }
}

/// Return all registered single-input instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::bmi::BodyMassIndex),
        Box::new(instruments::grip::GripStrength),
        Box::new(instruments::six_minute_walk::SixMinuteWalk),
        Box::new(instruments::katz::Katz),
        Box::new(instruments::lawton::Lawton),
        Box::new(instruments::tug::TimedUpAndGo),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

pub fn classify_bmi(bmi: f64) -> ClassificationResult {
    instruments::bmi::BodyMassIndex.classify(bmi)
}

/// Lower-limb timed test; `None` age yields `Undefined` whatever the time.
pub fn classify_lower_limb(seconds: f64, age: Option<i32>) -> ClassificationResult {
    LowerLimbStrength.classify(seconds, age)
}

/// Grip strength, same bands for both hands and both trials.
pub fn classify_grip(kg: f64) -> ClassificationResult {
    instruments::grip::GripStrength.classify(kg)
}

pub fn classify_six_minute_walk(steps: i64) -> ClassificationResult {
    instruments::six_minute_walk::SixMinuteWalk.classify(steps as f64)
}

pub fn classify_katz(points: i32) -> ClassificationResult {
    instruments::katz::Katz.classify(f64::from(points))
}

pub fn classify_lawton(points: i32) -> ClassificationResult {
    instruments::lawton::Lawton.classify(f64::from(points))
}

pub fn classify_tug(seconds: f64) -> ClassificationResult {
    instruments::tug::TimedUpAndGo.classify(seconds)
}
