use super::classification::EventClassification;
use super::schedule::Schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Normal,
    Late,
    Overtime,
    Absent,
    /// The last interval of the day has no closing exit.
    Incomplete,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Normal => "normal",
            DayStatus::Late => "late",
            DayStatus::Overtime => "overtime",
            DayStatus::Absent => "absent",
            DayStatus::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Derived view of one employee-day. Recomputed on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub employee_id: String,
    pub date: NaiveDate,
    pub worked_minutes: i64,
    pub expected_minutes: i64,
    pub delay_minutes: i64,
    pub early_arrival_minutes: i64,
    pub overtime_minutes: i64,
    pub early_departure_minutes: i64,
    pub balance_minutes: i64,
    pub compensated_minutes: i64,
    pub status: DayStatus,
    pub event_count: usize,
    /// Set when malformed events were dropped before aggregation.
    pub degraded: bool,
    pub classifications: Vec<EventClassification>,
    pub schedule: Option<Schedule>,
}
