use serde::{Deserialize, Serialize};

/// Which window drives the headline revenue card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Today,
    #[default]
    Week,
    Month,
}

impl TimeRange {
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeRange::Today => "Today",
            TimeRange::Week => "This week",
            TimeRange::Month => "This month",
        }
    }
}
