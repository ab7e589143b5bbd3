use super::event::EventId;
use super::event_type::EventKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to a classified punch. Magnitudes are minutes beyond tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "tag", content = "minutes")]
pub enum StatusTag {
    OnTime,
    Late(i64),
    EarlyArrival(i64),
    EarlyDeparture(i64),
}

impl StatusTag {
    pub fn label(&self) -> &'static str {
        match self {
            StatusTag::OnTime => "on-time",
            StatusTag::Late(_) => "late",
            StatusTag::EarlyArrival(_) => "early-arrival",
            StatusTag::EarlyDeparture(_) => "early-departure",
        }
    }

    pub fn magnitude(&self) -> i64 {
        match *self {
            StatusTag::OnTime => 0,
            StatusTag::Late(m) | StatusTag::EarlyArrival(m) | StatusTag::EarlyDeparture(m) => m,
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusTag::OnTime => f.write_str(self.label()),
            _ => write!(f, "{} {}m", self.label(), self.magnitude()),
        }
    }
}

/// Outcome of classifying one active event against its schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status_tags: Vec<StatusTag>,
    /// Entry: actual − expected start. Exit: expected end − actual.
    pub deviation_minutes: i64,
}

impl ClassificationResult {
    pub fn has(&self, label: &str) -> bool {
        self.status_tags.iter().any(|t| t.label() == label)
    }

    pub fn late_minutes(&self) -> i64 {
        self.sum_of(|t| matches!(t, StatusTag::Late(_)))
    }

    pub fn early_arrival_minutes(&self) -> i64 {
        self.sum_of(|t| matches!(t, StatusTag::EarlyArrival(_)))
    }

    pub fn early_departure_minutes(&self) -> i64 {
        self.sum_of(|t| matches!(t, StatusTag::EarlyDeparture(_)))
    }

    fn sum_of(&self, pred: impl Fn(&StatusTag) -> bool) -> i64 {
        self.status_tags
            .iter()
            .filter(|t| pred(t))
            .map(StatusTag::magnitude)
            .sum()
    }
}

/// Classification paired with the event it belongs to, as carried by a day summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventClassification {
    pub event_id: EventId,
    pub kind: EventKind,
    pub result: ClassificationResult,
}
