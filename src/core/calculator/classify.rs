//! Per-event classification against a resolved schedule.

use crate::models::classification::{ClassificationResult, EventClassification, StatusTag};
use crate::models::event::ClockEvent;
use crate::models::event_type::EventKind;
use crate::models::schedule::{Schedule, truncate_to_minute};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Classify one event against the shift it falls in. Non-active events are
/// skipped (`None`).
///
/// Overtime is not decided here: it is a property of a closed interval and is
/// computed by the aggregator.
pub fn classify(event: &ClockEvent, schedule: &Schedule) -> Option<ClassificationResult> {
    classify_on(event, schedule, schedule.shift_date(event.timestamp))
}

/// Classify against the shift starting on `shift_date`. Deviations are whole
/// minutes, seconds truncated.
pub fn classify_on(
    event: &ClockEvent,
    schedule: &Schedule,
    shift_date: NaiveDate,
) -> Option<ClassificationResult> {
    if !event.is_active() {
        return None;
    }

    let tolerance = schedule.effective_tolerance(event.tolerance_minutes);
    let actual = truncate_to_minute(event.timestamp);

    let (deviation, tag) = match event.kind {
        EventKind::Entry => {
            let deviation = (actual - schedule.start_on(shift_date)).num_minutes();
            let tag = if deviation > tolerance {
                StatusTag::Late(deviation - tolerance)
            } else if deviation < -tolerance {
                StatusTag::EarlyArrival(deviation.abs() - tolerance)
            } else {
                StatusTag::OnTime
            };
            (deviation, tag)
        }
        EventKind::Exit => {
            let deviation = (schedule.end_on(shift_date) - actual).num_minutes();
            let tag = if deviation > tolerance {
                StatusTag::EarlyDeparture(deviation - tolerance)
            } else {
                StatusTag::OnTime
            };
            (deviation, tag)
        }
    };

    Some(ClassificationResult {
        status_tags: vec![tag],
        deviation_minutes: deviation,
    })
}

/// Classify every active event of a slice against one shift, preserving order.
pub fn classify_all(
    events: &[ClockEvent],
    schedule: &Schedule,
    shift_date: NaiveDate,
) -> Vec<EventClassification> {
    events
        .iter()
        .filter_map(|ev| {
            classify_on(ev, schedule, shift_date).map(|result| EventClassification {
                event_id: ev.id.clone(),
                kind: ev.kind,
                result,
            })
        })
        .collect()
}

/// Day-level chip list: entry tags first, then exit tags, dropping any tag
/// whose rendered text was already emitted.
pub fn dedup_tags(classifications: &[EventClassification]) -> Vec<StatusTag> {
    let mut seen = HashSet::new();
    let entries = classifications.iter().filter(|c| c.kind.is_entry());
    let exits = classifications.iter().filter(|c| c.kind.is_exit());

    entries
        .chain(exits)
        .flat_map(|c| c.result.status_tags.iter().copied())
        .filter(|tag| seen.insert(tag.to_string()))
        .collect()
}
