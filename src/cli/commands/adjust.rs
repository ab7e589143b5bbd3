use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::RecordLifecycle;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventId;
use crate::models::event_type::EventKind;
use crate::store::EventStore;
use crate::ui::messages::success;
use crate::utils::time::require_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Adjust {
        event_id,
        at,
        kind,
        reason,
    } = cmd
    {
        let id = EventId::new(event_id.as_str());
        let timestamp = require_timestamp(at)?;
        if reason.trim().is_empty() {
            return Err(AppError::MissingJustification);
        }

        let mut lifecycle = RecordLifecycle::new(SqliteStore::open(&cfg.database)?);

        // Without --kind the replacement keeps the original direction.
        let new_kind = match kind {
            Some(k) => {
                EventKind::from_str_loose(k).ok_or_else(|| AppError::InvalidEventKind(k.clone()))?
            }
            None => {
                lifecycle
                    .store()
                    .get(&id)?
                    .ok_or_else(|| AppError::EventNotFound(id.to_string()))?
                    .kind
            }
        };

        let replacement = lifecycle.adjust(&id, timestamp, new_kind, reason)?;

        success(format!(
            "Adjusted {} → {} ({} at {}).",
            id,
            replacement.id,
            replacement.kind,
            replacement.timestamp_str()
        ));
    }

    Ok(())
}
