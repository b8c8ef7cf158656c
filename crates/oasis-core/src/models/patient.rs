use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    #[serde(alias = "masculino")]
    Male,
    #[serde(alias = "feminino")]
    Female,
}

impl Sex {
    /// Label printed on the report.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub name: String,
    pub birth_date: jiff::civil::Date,
    pub sex: Sex,
}
