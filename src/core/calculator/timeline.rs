use crate::models::event::ClockEvent;
use crate::models::event_type::EventKind;

/// Entry/exit pair. `exit == None` only for the trailing open interval.
#[derive(Debug, Clone)]
pub struct Interval {
    pub entry: ClockEvent,
    pub exit: Option<ClockEvent>,
    pub duration_minutes: i64,
}

impl Interval {
    pub fn is_closed(&self) -> bool {
        self.exit.is_some()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Timeline {
    /// Active events, ascending.
    pub events: Vec<ClockEvent>,
    pub intervals: Vec<Interval>,
    /// Entries superseded by a later entry before any exit.
    pub orphan_entries: Vec<ClockEvent>,
    /// Exits with no open interval to close.
    pub orphan_exits: Vec<ClockEvent>,
    pub total_worked_minutes: i64,
}

impl Timeline {
    pub fn closed_intervals(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter().filter(|i| i.is_closed())
    }

    pub fn has_closed_interval(&self) -> bool {
        self.intervals.iter().any(Interval::is_closed)
    }

    /// The last interval of the day is still waiting for its exit.
    pub fn is_incomplete(&self) -> bool {
        self.intervals.last().is_some_and(|i| !i.is_closed())
    }
}

pub fn build_timeline(events: &[ClockEvent]) -> Timeline {
    let mut sorted: Vec<ClockEvent> = events.iter().filter(|e| e.is_active()).cloned().collect();
    if sorted.is_empty() {
        return Timeline::default();
    }

    // -----------------------------
    // Sort events chronologically
    // -----------------------------
    sorted.sort_by_key(|e| e.timestamp);

    let mut intervals = Vec::new();
    let mut orphan_entries = Vec::new();
    let mut orphan_exits = Vec::new();
    let mut total = 0;
    let mut open: Option<ClockEvent> = None;

    // -----------------------------
    // Running-state pairing
    // -----------------------------
    for ev in &sorted {
        match ev.kind {
            EventKind::Entry => {
                if let Some(prev) = open.replace(ev.clone()) {
                    orphan_entries.push(prev);
                }
            }
            EventKind::Exit => match open.take() {
                Some(entry) => {
                    // num_minutes truncates toward zero
                    let duration = (ev.timestamp - entry.timestamp).num_minutes();
                    total += duration;
                    intervals.push(Interval {
                        entry,
                        exit: Some(ev.clone()),
                        duration_minutes: duration,
                    });
                }
                None => orphan_exits.push(ev.clone()),
            },
        }
    }

    if let Some(entry) = open {
        intervals.push(Interval {
            entry,
            exit: None,
            duration_minutes: 0,
        });
    }

    Timeline {
        events: sorted,
        intervals,
        orphan_entries,
        orphan_exits,
        total_worked_minutes: total,
    }
}
