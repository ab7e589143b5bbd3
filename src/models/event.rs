use super::{
    event_type::{CaptureMethod, EventKind},
    record_status::RecordStatus,
};
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Opaque identifier of a clock event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One physical punch, company-local time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    pub id: EventId,
    pub employee_id: String,
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
    pub capture_method: CaptureMethod,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub supersedes_id: Option<EventId>,
    #[serde(default)]
    pub superseded_by_id: Option<EventId>,
    /// Record-level tolerance override, wins over employee and company values.
    #[serde(default)]
    pub tolerance_minutes: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

impl ClockEvent {
    /// New `active` punch as produced by a capture collaborator.
    pub fn new(
        id: EventId,
        employee_id: impl Into<String>,
        timestamp: NaiveDateTime,
        kind: EventKind,
        capture_method: CaptureMethod,
    ) -> Self {
        Self {
            id,
            employee_id: employee_id.into(),
            timestamp,
            kind,
            capture_method,
            status: RecordStatus::Active,
            justification: None,
            supersedes_id: None,
            superseded_by_id: None,
            tolerance_minutes: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_tolerance(mut self, minutes: Option<i64>) -> Self {
        self.tolerance_minutes = minutes;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Storage-facing shape of a punch: text timestamp and optional kind, exactly
/// as a collaborator hands it over before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClockEvent {
    pub id: String,
    pub employee_id: String,
    pub timestamp: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub capture_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub supersedes_id: Option<String>,
    #[serde(default)]
    pub superseded_by_id: Option<String>,
    #[serde(default)]
    pub tolerance_minutes: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

impl RawClockEvent {
    /// Best-effort calendar date, used to attribute a malformed row to its day.
    pub fn date_hint(&self) -> Option<NaiveDate> {
        self.timestamp
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

impl From<&ClockEvent> for RawClockEvent {
    fn from(ev: &ClockEvent) -> Self {
        Self {
            id: ev.id.0.clone(),
            employee_id: ev.employee_id.clone(),
            timestamp: ev.timestamp_str(),
            kind: Some(ev.kind.to_db_str().to_string()),
            capture_method: Some(ev.capture_method.to_db_str().to_string()),
            status: Some(ev.status.to_db_str().to_string()),
            justification: ev.justification.clone(),
            supersedes_id: ev.supersedes_id.as_ref().map(|i| i.0.clone()),
            superseded_by_id: ev.superseded_by_id.as_ref().map(|i| i.0.clone()),
            tolerance_minutes: ev.tolerance_minutes,
            created_at: ev.created_at.clone(),
        }
    }
}

impl TryFrom<RawClockEvent> for ClockEvent {
    type Error = AppError;

    fn try_from(raw: RawClockEvent) -> AppResult<Self> {
        let malformed = |reason: String| AppError::MalformedEvent {
            event_id: raw.id.clone(),
            reason,
        };

        let timestamp = parse_timestamp(&raw.timestamp)
            .ok_or_else(|| malformed(format!("unparsable timestamp '{}'", raw.timestamp)))?;

        let kind_str = raw
            .kind
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| malformed("missing kind".to_string()))?;
        let kind = EventKind::from_str_loose(kind_str)
            .ok_or_else(|| malformed(format!("unknown kind '{}'", kind_str)))?;

        let capture_method = match raw.capture_method.as_deref() {
            None | Some("") => CaptureMethod::Manual,
            Some(m) => CaptureMethod::from_db_str(m)
                .ok_or_else(|| malformed(format!("unknown capture method '{}'", m)))?,
        };

        let status = match raw.status.as_deref() {
            None | Some("") => RecordStatus::Active,
            Some(s) => RecordStatus::from_db_str(s)
                .ok_or_else(|| malformed(format!("unknown status '{}'", s)))?,
        };

        Ok(ClockEvent {
            id: EventId(raw.id),
            employee_id: raw.employee_id,
            timestamp,
            kind,
            capture_method,
            status,
            justification: raw.justification,
            supersedes_id: raw.supersedes_id.map(EventId),
            superseded_by_id: raw.superseded_by_id.map(EventId),
            tolerance_minutes: raw.tolerance_minutes,
            created_at: raw.created_at,
        })
    }
}

/// Parse a company-local timestamp in any of the accepted layouts.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
