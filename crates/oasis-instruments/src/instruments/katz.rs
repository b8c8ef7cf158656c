use crate::Instrument;
use crate::scoring::{Band, Bound, Tier};

/// Katz index of independence in activities of daily living.
/// Six items, one point each. Total 0–6.
pub struct Katz;

// Only a perfect score is independent. Scores above 6 are not rejected;
// they fall through to the `>= 4` band.
const BANDS: &[Band] = &[
    Band::new(Bound::Exactly(6.0), Tier::Independent),
    Band::new(Bound::AtLeast(4.0), Tier::MildDependence),
    Band::new(Bound::AtLeast(2.0), Tier::ModerateDependence),
    Band::new(Bound::Otherwise, Tier::SevereDependence),
];

impl Instrument for Katz {
    fn id(&self) -> &str {
        "katz"
    }

    fn name(&self) -> &str {
        "KATZ"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }
}
