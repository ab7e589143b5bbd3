use super::policy::TOLERANCE_CAP_MINUTES;
use crate::utils::date::{next_day, previous_day};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// Where a resolved schedule came from, kept for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum ScheduleSource {
    Preset(String),
    EmployeeWeekly,
    Employee,
    CompanyWeekly,
    CompanyDefault,
}

/// Expected working window for one employee-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub expected_start: NaiveTime,
    pub expected_end: NaiveTime,
    pub tolerance_minutes: i64,
    /// Upper bound applied to record-level overrides as well.
    pub tolerance_cap: i64,
    pub source: ScheduleSource,
}

impl Schedule {
    pub fn new(
        expected_start: NaiveTime,
        expected_end: NaiveTime,
        tolerance_minutes: i64,
        source: ScheduleSource,
    ) -> Self {
        Self {
            expected_start,
            expected_end,
            tolerance_minutes: tolerance_minutes.max(0),
            tolerance_cap: TOLERANCE_CAP_MINUTES,
            source,
        }
    }

    pub fn with_tolerance_cap(mut self, cap: i64) -> Self {
        self.tolerance_cap = cap.max(0);
        self.tolerance_minutes = self.tolerance_minutes.min(self.tolerance_cap);
        self
    }

    /// Tolerance for one event: the record override wins, always capped.
    pub fn effective_tolerance(&self, record_override: Option<i64>) -> i64 {
        record_override
            .unwrap_or(self.tolerance_minutes)
            .clamp(0, self.tolerance_cap.max(0))
    }

    /// The end lies before the start: the shift crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.expected_end < self.expected_start
    }

    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.expected_start)
    }

    /// Wall-clock end of the shift that starts on `date`.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        if self.is_overnight() {
            next_day(date).and_time(self.expected_end)
        } else {
            date.and_time(self.expected_end)
        }
    }

    /// Half-open range of timestamps that belong to the shift of `date`.
    ///
    /// Day shifts own their calendar day. Overnight shifts are cut in the
    /// middle of the off-shift gap, so a 22:00–06:00 shift owns 14:00 on
    /// `date` up to 14:00 on the next day.
    pub fn day_window(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let next = next_day(date);
        if self.is_overnight() {
            let cut = self.overnight_cut();
            (date.and_time(cut), next.and_time(cut))
        } else {
            (date.and_time(NaiveTime::MIN), next.and_time(NaiveTime::MIN))
        }
    }

    /// Date of the shift a timestamp belongs to.
    pub fn shift_date(&self, at: NaiveDateTime) -> NaiveDate {
        if self.is_overnight() && at.time() < self.overnight_cut() {
            previous_day(at.date())
        } else {
            at.date()
        }
    }

    fn overnight_cut(&self) -> NaiveTime {
        NaiveTime::MIN + TimeDelta::minutes((self.start_minute() + self.end_minute()) / 2)
    }

    pub fn start_minute(&self) -> i64 {
        minute_of_day(self.expected_start)
    }

    pub fn end_minute(&self) -> i64 {
        minute_of_day(self.expected_end)
    }

    /// Raw span in minutes. An end before the start crosses midnight.
    pub fn span_minutes(&self) -> i64 {
        let (s, e) = (self.start_minute(), self.end_minute());
        if e >= s { e - s } else { e + 24 * 60 - s }
    }

    /// Minutes the employee owes for the day once the automatic break is taken out.
    pub fn expected_minutes(&self, auto_break_minutes: i64) -> i64 {
        (self.span_minutes() - auto_break_minutes.max(0)).max(0)
    }
}

/// Minute of day, seconds truncated.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// Drop seconds and sub-seconds.
pub fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
