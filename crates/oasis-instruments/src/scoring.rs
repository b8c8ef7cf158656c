use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal clinical tier produced by a band rule.
///
/// One vocabulary shared by every instrument; each instrument only ever
/// produces its own subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    // Body-mass index
    Underweight,
    Normal,
    Overweight,
    Obese,
    // Performance tests
    Excellent,
    Good,
    Fair,
    Poor,
    /// Age-banded test without a known age.
    Undefined,
    // Katz / Lawton
    Independent,
    MildDependence,
    ModerateDependence,
    SevereDependence,
    // Timed-Up-and-Go
    LowRisk,
    MediumRisk,
    HighRisk,
}

impl Tier {
    pub fn severity(&self) -> Severity {
        match self {
            Tier::Normal | Tier::Excellent | Tier::Good | Tier::Independent | Tier::LowRisk => {
                Severity::Normal
            }
            _ => Severity::AttentionNeeded,
        }
    }

    /// Label printed on reports.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Underweight => "Baixo peso",
            Tier::Normal => "Peso normal",
            Tier::Overweight => "Sobrepeso",
            Tier::Obese => "Obesidade",
            Tier::Excellent => "Excelente",
            Tier::Good => "Bom",
            Tier::Fair => "Regular",
            Tier::Poor => "Fraco",
            Tier::Undefined => "Indefinido",
            Tier::Independent => "Independente",
            Tier::MildDependence => "Dependência leve",
            Tier::ModerateDependence => "Dependência moderada",
            Tier::SevereDependence => "Dependência severa",
            Tier::LowRisk => "Baixo risco",
            Tier::MediumRisk => "Risco médio",
            Tier::HighRisk => "Alto risco",
        }
    }
}

/// Binary flag used only to pick the visual accent of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    AttentionNeeded,
}

/// The classification of one measured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    pub tier: Tier,
    pub severity: Severity,
}

impl ClassificationResult {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            severity: tier.severity(),
        }
    }

    pub fn is_normal(&self) -> bool {
        self.severity == Severity::Normal
    }
}

impl From<Tier> for ClassificationResult {
    fn from(tier: Tier) -> Self {
        Self::new(tier)
    }
}

/// Condition a value must meet to fall in a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Bound {
    Below(f64),
    AtLeast(f64),
    Exactly(f64),
    /// Catch-all; always the last band of a table.
    Otherwise,
}

impl Bound {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Bound::Below(limit) => value < limit,
            Bound::AtLeast(limit) => value >= limit,
            Bound::Exactly(target) => value == target,
            Bound::Otherwise => true,
        }
    }
}

/// One row of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub bound: Bound,
    pub tier: Tier,
}

impl Band {
    pub const fn new(bound: Bound, tier: Tier) -> Self {
        Self { bound, tier }
    }
}

/// Evaluate `bands` top to bottom; the first matching band wins.
///
/// Values that match nothing (NaN against a table without a catch-all)
/// take the last band's tier. An empty table yields `Undefined`.
pub fn first_match(bands: &[Band], value: f64) -> Tier {
    bands
        .iter()
        .find(|band| band.bound.matches(value))
        .or_else(|| bands.last())
        .map(|band| band.tier)
        .unwrap_or(Tier::Undefined)
}
