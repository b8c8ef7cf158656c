use crate::Instrument;
use crate::scoring::{Band, Bound, Tier};

/// Body-mass index (kg/m²), WHO adult cut-offs.
pub struct BodyMassIndex;

const BANDS: &[Band] = &[
    Band::new(Bound::Below(18.5), Tier::Underweight),
    Band::new(Bound::Below(25.0), Tier::Normal),
    Band::new(Bound::Below(30.0), Tier::Overweight),
    Band::new(Bound::Otherwise, Tier::Obese),
];

impl Instrument for BodyMassIndex {
    fn id(&self) -> &str {
        "bmi"
    }

    fn name(&self) -> &str {
        "IMC"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }
}
