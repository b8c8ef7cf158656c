use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::{Band, Bound, ClassificationResult, Tier, first_match};

/// Lower-limb timed strength test (MMI), banded by age.
///
/// Not an [`Instrument`](crate::Instrument): the table depends on the
/// patient's age, and without an age there is no table at all.
pub struct LowerLimbStrength;

/// First age that uses the senior table.
pub const SENIOR_AGE: i32 = 60;

const UNDER_SIXTY: &[Band] = &[
    Band::new(Bound::Below(12.0), Tier::Excellent),
    Band::new(Bound::Below(15.0), Tier::Good),
    Band::new(Bound::Below(18.0), Tier::Fair),
    Band::new(Bound::Otherwise, Tier::Poor),
];

const SIXTY_AND_OVER: &[Band] = &[
    Band::new(Bound::Below(14.0), Tier::Excellent),
    Band::new(Bound::Below(17.0), Tier::Good),
    Band::new(Bound::Below(21.0), Tier::Fair),
    Band::new(Bound::Otherwise, Tier::Poor),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeBand {
    UnderSixty,
    SixtyAndOver,
}

impl AgeBand {
    pub fn for_age(age: i32) -> Self {
        if age < SENIOR_AGE {
            AgeBand::UnderSixty
        } else {
            AgeBand::SixtyAndOver
        }
    }

    pub fn bands(&self) -> &'static [Band] {
        match self {
            AgeBand::UnderSixty => UNDER_SIXTY,
            AgeBand::SixtyAndOver => SIXTY_AND_OVER,
        }
    }
}

impl LowerLimbStrength {
    pub fn id(&self) -> &str {
        "lower_limb"
    }

    pub fn name(&self) -> &str {
        "Força de Membros Inferiores (MMI)"
    }

    pub fn bands_for_age(age: i32) -> &'static [Band] {
        AgeBand::for_age(age).bands()
    }

    /// `None` is the only unknown age; 0 and below use the under-60 table.
    pub fn classify(&self, seconds: f64, age: Option<i32>) -> ClassificationResult {
        match age {
            Some(age) => first_match(Self::bands_for_age(age), seconds).into(),
            None => Tier::Undefined.into(),
        }
    }
}
