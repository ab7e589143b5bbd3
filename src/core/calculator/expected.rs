use crate::core::calculator::timeline::Timeline;
use crate::models::policy::Policy;
use crate::models::schedule::Schedule;

/// Expected = scheduled span − automatic break. No schedule, nothing expected.
pub fn calculate_expected(schedule: Option<&Schedule>, policy: &Policy) -> i64 {
    schedule.map_or(0, |s| s.expected_minutes(policy.auto_break_minutes))
}

/// Worked = closed intervals − automatic break (once per day, floored at 0).
pub fn calculate_worked(timeline: &Timeline, policy: &Policy) -> i64 {
    if !timeline.has_closed_interval() {
        return 0;
    }
    (timeline.total_worked_minutes - policy.auto_break_minutes.max(0)).max(0)
}
