use crate::Instrument;
use crate::scoring::{Band, Bound, Tier};

/// Handgrip dynamometry (kg).
///
/// One universal table for both sexes and both hands. Published norms
/// differ by sex; the clinic's protocol does not, and neither does this.
pub struct GripStrength;

const BANDS: &[Band] = &[
    Band::new(Bound::AtLeast(30.0), Tier::Excellent),
    Band::new(Bound::AtLeast(20.0), Tier::Good),
    Band::new(Bound::AtLeast(10.0), Tier::Fair),
    Band::new(Bound::Otherwise, Tier::Poor),
];

impl Instrument for GripStrength {
    fn id(&self) -> &str {
        "grip"
    }

    fn name(&self) -> &str {
        "Força de Preensão Palmar"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }
}
