use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a stored clock event.
///
/// `Adjusted` and `Invalidated` are terminal: the row stays in the store for
/// audit but never feeds aggregation again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Adjusted,
    Invalidated,
}

impl RecordStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Adjusted => "adjusted",
            RecordStatus::Invalidated => "invalidated",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(RecordStatus::Active),
            "adjusted" => Some(RecordStatus::Adjusted),
            "invalidated" => Some(RecordStatus::Invalidated),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_db_str())
    }
}
