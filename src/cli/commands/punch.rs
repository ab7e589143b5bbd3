use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::models::event_type::{CaptureMethod, EventKind};
use crate::store::EventStore;
use crate::ui::messages::success;
use crate::utils::time::require_timestamp;

/// Record a punch, standing in for the capture collaborators.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        employee,
        kind,
        at,
        method,
        tolerance,
    } = cmd
    {
        let kind = EventKind::from_str_loose(kind)
            .ok_or_else(|| AppError::InvalidEventKind(kind.to_string()))?;
        let timestamp = require_timestamp(at)?;
        let method = CaptureMethod::from_db_str(method)
            .filter(|m| *m != CaptureMethod::Adjustment)
            .ok_or_else(|| AppError::InvalidCaptureMethod(method.to_string()))?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let event = ClockEvent::new(store.next_id()?, employee.as_str(), timestamp, kind, method)
            .with_tolerance(*tolerance);

        store.record(&event)?;

        success(format!(
            "Recorded {} {} for {} at {}.",
            event.id,
            event.kind,
            event.employee_id,
            event.timestamp_str()
        ));
    }

    Ok(())
}
