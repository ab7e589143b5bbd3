//! Storage seam for clock events.
//!
//! The engine never touches storage itself; the lifecycle manager and the CLI
//! go through this trait. Implementations must serialise writers per event:
//! `commit` succeeds only while the target is still `active`.

pub mod memory;

use crate::errors::AppResult;
use crate::models::event::{ClockEvent, EventId, RawClockEvent};
use chrono::NaiveDate;

/// A validated lifecycle change, applied atomically by `EventStore::commit`.
#[derive(Debug, Clone)]
pub enum Transition {
    /// Retire `target` as `adjusted` and insert `replacement` in its place.
    Adjust {
        target: EventId,
        justification: String,
        replacement: ClockEvent,
    },
    /// Retire `target` as `invalidated`.
    Invalidate {
        target: EventId,
        justification: String,
    },
}

impl Transition {
    pub fn target(&self) -> &EventId {
        match self {
            Transition::Adjust { target, .. } | Transition::Invalidate { target, .. } => target,
        }
    }

    pub fn justification(&self) -> &str {
        match self {
            Transition::Adjust { justification, .. }
            | Transition::Invalidate { justification, .. } => justification,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Transition::Adjust { .. } => "adjust",
            Transition::Invalidate { .. } => "invalidate",
        }
    }
}

pub trait EventStore {
    fn get(&self, id: &EventId) -> AppResult<Option<ClockEvent>>;

    fn insert(&mut self, event: &ClockEvent) -> AppResult<()>;

    /// Every event of the employee-day regardless of status, ascending.
    fn events_for_day(&self, employee_id: &str, date: NaiveDate) -> AppResult<Vec<ClockEvent>>;

    /// Unvalidated rows in `[from, to]`, optionally for one employee.
    fn raw_events_between(
        &self,
        employee_id: Option<&str>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<RawClockEvent>>;

    /// Reserve a fresh identifier.
    fn next_id(&mut self) -> AppResult<EventId>;

    /// Apply a transition. Returns the replacement (adjust) or the retired
    /// event (invalidate). Fails with `InvalidTransition` if the target is no
    /// longer active, leaving the store untouched.
    fn commit(&mut self, transition: &Transition) -> AppResult<ClockEvent>;
}
