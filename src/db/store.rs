use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    current_status, insert_event, load_raw_event, load_raw_events_between,
    load_raw_events_for_day, reserve_event_number, retire_event,
};
use crate::errors::{AppError, AppResult};
use crate::models::event::{ClockEvent, EventId, RawClockEvent};
use crate::models::record_status::RecordStatus;
use crate::store::{EventStore, Transition};
use chrono::NaiveDate;
use tracing::warn;

/// `EventStore` over the SQLite `events` table. Transitions run inside one
/// transaction and rely on `UPDATE … WHERE status = 'active'` as the
/// per-event writer guard.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Insert a punch and record it in the audit log.
    pub fn record(&mut self, event: &ClockEvent) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        insert_event(&tx, event)?;
        ttlog(
            &tx,
            "punch",
            event.id.as_str(),
            &format!(
                "{} {} at {} ({})",
                event.employee_id,
                event.kind,
                event.timestamp_str(),
                event.capture_method
            ),
        )?;
        tx.commit()?;
        Ok(())
    }
}

impl EventStore for SqliteStore {
    fn get(&self, id: &EventId) -> AppResult<Option<ClockEvent>> {
        load_raw_event(&self.pool.conn, id)?
            .map(ClockEvent::try_from)
            .transpose()
    }

    fn insert(&mut self, event: &ClockEvent) -> AppResult<()> {
        insert_event(&self.pool.conn, event).map_err(|e| match e {
            AppError::Db(rusqlite::Error::SqliteFailure(f, _))
                if f.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::DuplicateEvent(event.id.to_string())
            }
            other => other,
        })
    }

    /// Malformed rows are skipped here; batch aggregation reads raw rows instead.
    fn events_for_day(&self, employee_id: &str, date: NaiveDate) -> AppResult<Vec<ClockEvent>> {
        let raws = load_raw_events_for_day(&self.pool.conn, employee_id, &date)?;
        let mut out = Vec::with_capacity(raws.len());
        for raw in raws {
            match ClockEvent::try_from(raw) {
                Ok(ev) => out.push(ev),
                Err(error) => warn!(%error, "skipping malformed row"),
            }
        }
        Ok(out)
    }

    fn raw_events_between(
        &self,
        employee_id: Option<&str>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<RawClockEvent>> {
        load_raw_events_between(&self.pool.conn, employee_id, &from, &to)
    }

    fn next_id(&mut self) -> AppResult<EventId> {
        let n = reserve_event_number(&self.pool.conn)?;
        Ok(EventId(format!("evt-{}", n)))
    }

    fn commit(&mut self, transition: &Transition) -> AppResult<ClockEvent> {
        let target = transition.target();
        let justification = transition.justification();
        let tx = self.pool.conn.transaction()?;

        let (to, superseded_by) = match transition {
            Transition::Adjust { replacement, .. } => {
                (RecordStatus::Adjusted, Some(&replacement.id))
            }
            Transition::Invalidate { .. } => (RecordStatus::Invalidated, None),
        };

        if retire_event(&tx, target, to, justification, superseded_by)? == 0 {
            // Lost the race or never existed; dropping `tx` rolls back.
            return Err(match current_status(&tx, target)? {
                None => AppError::EventNotFound(target.to_string()),
                Some(s) => AppError::InvalidTransition {
                    event_id: target.to_string(),
                    status: RecordStatus::from_db_str(&s).unwrap_or(RecordStatus::Invalidated),
                },
            });
        }

        let result_id = match transition {
            Transition::Adjust { replacement, .. } => {
                insert_event(&tx, replacement)?;
                ttlog(
                    &tx,
                    transition.operation(),
                    target.as_str(),
                    &format!(
                        "replaced by {} ({} at {}): {}",
                        replacement.id,
                        replacement.kind,
                        replacement.timestamp_str(),
                        justification
                    ),
                )?;
                replacement.id.clone()
            }
            Transition::Invalidate { .. } => {
                ttlog(&tx, transition.operation(), target.as_str(), justification)?;
                target.clone()
            }
        };

        let raw = load_raw_event(&tx, &result_id)?
            .ok_or_else(|| AppError::EventNotFound(result_id.to_string()))?;
        let event = ClockEvent::try_from(raw)?;

        tx.commit()?;
        Ok(event)
    }
}
