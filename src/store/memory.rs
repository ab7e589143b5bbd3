use super::{EventStore, Transition};
use crate::errors::{AppError, AppResult};
use crate::models::event::{ClockEvent, EventId, RawClockEvent};
use crate::models::record_status::RecordStatus;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Process-local store, mostly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    events: BTreeMap<EventId, ClockEvent>,
    next: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = ClockEvent>) -> AppResult<Self> {
        let mut store = Self::new();
        for ev in events {
            store.insert(&ev)?;
        }
        Ok(store)
    }

    pub fn all(&self) -> Vec<ClockEvent> {
        let mut out: Vec<ClockEvent> = self.events.values().cloned().collect();
        out.sort_by_key(|e| e.timestamp);
        out
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for MemoryStore {
    fn get(&self, id: &EventId) -> AppResult<Option<ClockEvent>> {
        Ok(self.events.get(id).cloned())
    }

    fn insert(&mut self, event: &ClockEvent) -> AppResult<()> {
        if self.events.contains_key(&event.id) {
            return Err(AppError::DuplicateEvent(event.id.to_string()));
        }
        self.events.insert(event.id.clone(), event.clone());
        Ok(())
    }

    fn events_for_day(&self, employee_id: &str, date: NaiveDate) -> AppResult<Vec<ClockEvent>> {
        Ok(self
            .all()
            .into_iter()
            .filter(|e| e.employee_id == employee_id && e.date() == date)
            .collect())
    }

    fn raw_events_between(
        &self,
        employee_id: Option<&str>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<RawClockEvent>> {
        Ok(self
            .all()
            .iter()
            .filter(|e| employee_id.is_none_or(|id| e.employee_id == id))
            .filter(|e| e.date() >= from && e.date() <= to)
            .map(RawClockEvent::from)
            .collect())
    }

    fn next_id(&mut self) -> AppResult<EventId> {
        loop {
            self.next += 1;
            let id = EventId(format!("evt-{}", self.next));
            if !self.events.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    fn commit(&mut self, transition: &Transition) -> AppResult<ClockEvent> {
        let target_id = transition.target();

        // Check everything before touching the map.
        let current = self
            .events
            .get(target_id)
            .ok_or_else(|| AppError::EventNotFound(target_id.to_string()))?;
        if !current.is_active() {
            return Err(AppError::InvalidTransition {
                event_id: target_id.to_string(),
                status: current.status,
            });
        }
        if let Transition::Adjust { replacement, .. } = transition
            && self.events.contains_key(&replacement.id)
        {
            return Err(AppError::DuplicateEvent(replacement.id.to_string()));
        }

        let justification = Some(transition.justification().to_string());

        match transition {
            Transition::Adjust { replacement, .. } => {
                if let Some(original) = self.events.get_mut(target_id) {
                    original.status = RecordStatus::Adjusted;
                    original.justification = justification;
                    original.superseded_by_id = Some(replacement.id.clone());
                }
                self.events
                    .insert(replacement.id.clone(), replacement.clone());
                Ok(replacement.clone())
            }
            Transition::Invalidate { .. } => {
                let original = self
                    .events
                    .get_mut(target_id)
                    .ok_or_else(|| AppError::EventNotFound(target_id.to_string()))?;
                original.status = RecordStatus::Invalidated;
                original.justification = justification;
                Ok(original.clone())
            }
        }
    }
}
