use crate::core::calculator::{classify, expected, overtime, surplus, timeline};
use crate::core::resolver::ScheduleResolver;
use crate::errors::AppError;
use crate::models::classification::StatusTag;
use crate::models::day_summary::{DailySummary, DayStatus};
use crate::models::event::{ClockEvent, RawClockEvent};
use crate::models::policy::Policy;
use crate::models::schedule::Schedule;
use crate::utils::date::next_day;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Something that went wrong for one employee-day of a batch. The batch keeps going.
#[derive(Debug)]
pub struct DayFailure {
    pub employee_id: String,
    /// `None` when a malformed row carried no readable date.
    pub date: Option<NaiveDate>,
    pub error: AppError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub summaries: Vec<DailySummary>,
    pub failures: Vec<DayFailure>,
}

impl BatchReport {
    pub fn summary_for(&self, employee_id: &str, date: NaiveDate) -> Option<&DailySummary> {
        self.summaries
            .iter()
            .find(|s| s.employee_id == employee_id && s.date == date)
    }
}

pub struct Core;

fn day_window(date: NaiveDate, schedule: Option<&Schedule>) -> (NaiveDateTime, NaiveDateTime) {
    match schedule {
        Some(s) => s.day_window(date),
        None => (
            date.and_time(NaiveTime::MIN),
            next_day(date).and_time(NaiveTime::MIN),
        ),
    }
}

impl Core {
    /// Pure derivation of one employee-day. Events of other employees,
    /// outside the day's window, or not active are ignored. Without a
    /// schedule (day off, nothing resolved) the day is the calendar day.
    pub fn aggregate(
        employee_id: &str,
        date: NaiveDate,
        events: &[ClockEvent],
        schedule: Option<&Schedule>,
        policy: &Policy,
    ) -> DailySummary {
        let (from, to) = day_window(date, schedule);
        let day_events: Vec<ClockEvent> = events
            .iter()
            .filter(|e| {
                e.is_active()
                    && e.employee_id == employee_id
                    && e.timestamp >= from
                    && e.timestamp < to
            })
            .cloned()
            .collect();

        let timeline = timeline::build_timeline(&day_events);
        let expected_minutes = expected::calculate_expected(schedule, policy);
        let worked_minutes = expected::calculate_worked(&timeline, policy);

        let classifications = schedule
            .map(|s| classify::classify_all(&timeline.events, s, date))
            .unwrap_or_default();

        let delay: i64 = classifications.iter().map(|c| c.result.late_minutes()).sum();
        let early_arrival_minutes: i64 = classifications
            .iter()
            .map(|c| c.result.early_arrival_minutes())
            .sum();
        let early_departure_minutes: i64 = classifications
            .iter()
            .map(|c| c.result.early_departure_minutes())
            .sum();

        let raw_overtime =
            schedule.map_or(0, |s| overtime::calculate_overtime(date, &timeline, s, policy));
        let settled = overtime::settle(raw_overtime, delay, policy);

        let status = if expected_minutes > 0 && timeline.events.is_empty() {
            DayStatus::Absent
        } else if timeline.is_incomplete() {
            DayStatus::Incomplete
        } else if settled.net_delay_minutes() > 0 {
            DayStatus::Late
        } else if settled.net_overtime_minutes() > 0 {
            DayStatus::Overtime
        } else {
            DayStatus::Normal
        };

        debug!(
            employee = employee_id,
            %date,
            worked = worked_minutes,
            expected = expected_minutes,
            status = %status,
            "day aggregated"
        );

        DailySummary {
            employee_id: employee_id.to_string(),
            date,
            worked_minutes,
            expected_minutes,
            delay_minutes: settled.delay_minutes,
            early_arrival_minutes,
            overtime_minutes: settled.overtime_minutes,
            early_departure_minutes,
            balance_minutes: surplus::calculate_balance(worked_minutes, expected_minutes),
            compensated_minutes: settled.compensated_minutes,
            status,
            event_count: timeline.events.len(),
            degraded: false,
            classifications,
            schedule: schedule.cloned(),
        }
    }

    /// Aggregate many employee-days from raw storage rows.
    ///
    /// Malformed rows are dropped and their day flagged `degraded`; a missing
    /// schedule is reported and the day summarised without one. Neither stops
    /// the remaining days. `raw_events` should reach one day past the last
    /// requested date so overnight shifts see their closing exits.
    pub fn aggregate_batch(
        raw_events: &[RawClockEvent],
        days: &[(String, NaiveDate)],
        resolver: &ScheduleResolver,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        let mut degraded: HashSet<(String, Option<NaiveDate>)> = HashSet::new();
        let mut events = Vec::with_capacity(raw_events.len());
        let requested: HashSet<(&str, NaiveDate)> =
            days.iter().map(|(e, d)| (e.as_str(), *d)).collect();

        for raw in raw_events {
            match ClockEvent::try_from(raw.clone()) {
                Ok(ev) => events.push(ev),
                Err(error) => {
                    let date = raw.date_hint();
                    if let Some(d) = date
                        && !requested.contains(&(raw.employee_id.as_str(), d))
                    {
                        debug!(event = %raw.id, %error, "malformed event outside requested days");
                        continue;
                    }
                    warn!(event = %raw.id, %error, "excluding malformed event");
                    degraded.insert((raw.employee_id.clone(), date));
                    report.failures.push(DayFailure {
                        employee_id: raw.employee_id.clone(),
                        date,
                        error,
                    });
                }
            }
        }

        for (employee_id, date) in days {
            // Ok(None) is a day off: nothing expected, nothing to report.
            let schedule = match resolver.resolve(employee_id, *date) {
                Ok(s) => s,
                Err(error) => {
                    warn!(employee = %employee_id, %date, %error, "no schedule, summarising without one");
                    report.failures.push(DayFailure {
                        employee_id: employee_id.clone(),
                        date: Some(*date),
                        error,
                    });
                    None
                }
            };

            let mut summary =
                Self::aggregate(employee_id, *date, &events, schedule.as_ref(), resolver.policy());
            summary.degraded = degraded.contains(&(employee_id.clone(), Some(*date)));
            report.summaries.push(summary);
        }

        report
    }

    /// Chip list for one day, de-duplicated by rendered text.
    pub fn day_tags(summary: &DailySummary) -> Vec<StatusTag> {
        classify::dedup_tags(&summary.classifications)
    }
}
