use crate::Instrument;
use crate::scoring::{Band, Bound, Tier};

/// Timed-Up-and-Go (seconds), fall-risk bands.
pub struct TimedUpAndGo;

const BANDS: &[Band] = &[
    Band::new(Bound::Below(12.0), Tier::LowRisk),
    Band::new(Bound::Below(21.0), Tier::MediumRisk),
    Band::new(Bound::Otherwise, Tier::HighRisk),
];

impl Instrument for TimedUpAndGo {
    fn id(&self) -> &str {
        "tug"
    }

    fn name(&self) -> &str {
        "Teste TUG (Mobilidade e Equilíbrio)"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }
}
