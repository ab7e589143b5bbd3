//! Non-destructive corrections: `active → adjusted` (with a linked
//! replacement) and `active → invalidated`. Nothing else is legal.
//!
//! Every check runs before the single `EventStore::commit` call, so a
//! rejected request leaves the store exactly as it was. No retries here:
//! callers that want to retry must re-read the event first.

use crate::errors::{AppError, AppResult};
use crate::models::event::{ClockEvent, EventId};
use crate::models::event_type::{CaptureMethod, EventKind};
use crate::store::{EventStore, Transition};
use chrono::NaiveDateTime;
use tracing::info;

pub struct RecordLifecycle<S: EventStore> {
    store: S,
}

impl<S: EventStore> RecordLifecycle<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Retire `event_id` and return its active replacement.
    pub fn adjust(
        &mut self,
        event_id: &EventId,
        new_timestamp: NaiveDateTime,
        new_kind: EventKind,
        justification: &str,
    ) -> AppResult<ClockEvent> {
        let justification = require_justification(justification)?;
        let original = self.load_active(event_id)?;

        let mut replacement = ClockEvent::new(
            self.store.next_id()?,
            original.employee_id.clone(),
            new_timestamp,
            new_kind,
            CaptureMethod::Adjustment,
        )
        .with_tolerance(original.tolerance_minutes);
        replacement.supersedes_id = Some(original.id.clone());

        let created = self.store.commit(&Transition::Adjust {
            target: original.id.clone(),
            justification,
            replacement,
        })?;

        info!(
            event = %original.id,
            replacement = %created.id,
            from = %original.timestamp,
            to = %created.timestamp,
            "event adjusted"
        );
        Ok(created)
    }

    /// Retire `event_id` without replacement and return it in its final state.
    pub fn invalidate(&mut self, event_id: &EventId, justification: &str) -> AppResult<ClockEvent> {
        let justification = require_justification(justification)?;
        let original = self.load_active(event_id)?;

        let retired = self.store.commit(&Transition::Invalidate {
            target: original.id.clone(),
            justification,
        })?;

        info!(event = %retired.id, "event invalidated");
        Ok(retired)
    }

    fn load_active(&self, event_id: &EventId) -> AppResult<ClockEvent> {
        let event = self
            .store
            .get(event_id)?
            .ok_or_else(|| AppError::EventNotFound(event_id.to_string()))?;

        if !event.is_active() {
            return Err(AppError::InvalidTransition {
                event_id: event_id.to_string(),
                status: event.status,
            });
        }

        Ok(event)
    }
}

fn require_justification(text: &str) -> AppResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingJustification);
    }
    Ok(trimmed.to_string())
}
