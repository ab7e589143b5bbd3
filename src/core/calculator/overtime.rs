//! Overtime is a property of closed intervals, not of single punches.

use crate::core::calculator::classify::classify_on;
use crate::core::calculator::timeline::Timeline;
use crate::models::policy::Policy;
use crate::models::schedule::Schedule;
use chrono::NaiveDate;

/// Outcome of overtime/delay settlement for one day. `delay_minutes` and
/// `overtime_minutes` stay as measured; the offset lives only in
/// `compensated_minutes`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub overtime_minutes: i64,
    pub delay_minutes: i64,
    pub compensated_minutes: i64,
}

impl Settlement {
    pub fn net_delay_minutes(&self) -> i64 {
        self.delay_minutes - self.compensated_minutes
    }

    pub fn net_overtime_minutes(&self) -> i64 {
        self.overtime_minutes - self.compensated_minutes
    }
}

/// Raw overtime before rounding: for every closed interval ending after the
/// scheduled end, the part past the end beyond tolerance; plus, under the
/// early-arrival policy, that interval's early-arrival magnitude.
pub fn calculate_overtime(
    date: NaiveDate,
    timeline: &Timeline,
    schedule: &Schedule,
    policy: &Policy,
) -> i64 {
    let end = schedule.end_on(date);
    let mut overtime = 0;

    for interval in timeline.closed_intervals() {
        let Some(exit) = &interval.exit else { continue };

        if exit.timestamp > end {
            let from = end.max(interval.entry.timestamp);
            let excess = (exit.timestamp - from).num_minutes();
            let tolerance = schedule.effective_tolerance(exit.tolerance_minutes);
            if excess > tolerance {
                overtime += excess - tolerance;
            }
        }

        if policy.count_early_arrival_as_overtime {
            overtime += classify_on(&interval.entry, schedule, date)
                .map_or(0, |c| c.early_arrival_minutes());
        }
    }

    overtime
}

/// Apply rounding, then work out how much delay the overtime offsets.
pub fn settle(raw_overtime: i64, delay: i64, policy: &Policy) -> Settlement {
    let overtime = policy.overtime_rounding.apply(raw_overtime.max(0));
    let compensated = if policy.compensate_balance {
        overtime.min(delay).max(0)
    } else {
        0
    };

    Settlement {
        overtime_minutes: overtime,
        delay_minutes: delay,
        compensated_minutes: compensated,
    }
}
