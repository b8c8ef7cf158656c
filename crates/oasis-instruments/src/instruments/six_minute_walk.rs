use crate::Instrument;
use crate::scoring::{Band, Bound, Tier};

/// Six-minute walk, scored on step count.
pub struct SixMinuteWalk;

const BANDS: &[Band] = &[
    Band::new(Bound::AtLeast(400.0), Tier::Excellent),
    Band::new(Bound::AtLeast(300.0), Tier::Good),
    Band::new(Bound::AtLeast(200.0), Tier::Fair),
    Band::new(Bound::Otherwise, Tier::Poor),
];

impl Instrument for SixMinuteWalk {
    fn id(&self) -> &str {
        "six_minute_walk"
    }

    fn name(&self) -> &str {
        "Capacidade Aeróbia (Marcha 6 min)"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }
}
