use crate::Instrument;
use crate::scoring::{Band, Bound, Tier};

/// Lawton instrumental activities of daily living. Total 0–27.
pub struct Lawton;

const BANDS: &[Band] = &[
    Band::new(Bound::AtLeast(24.0), Tier::Independent),
    Band::new(Bound::AtLeast(18.0), Tier::MildDependence),
    Band::new(Bound::AtLeast(12.0), Tier::ModerateDependence),
    Band::new(Bound::Otherwise, Tier::SevereDependence),
];

impl Instrument for Lawton {
    fn id(&self) -> &str {
        "lawton"
    }

    fn name(&self) -> &str {
        "LAWTON"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }
}
