use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::RecordLifecycle;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::event::EventId;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Invalidate { event_id, reason } = cmd {
        let mut lifecycle = RecordLifecycle::new(SqliteStore::open(&cfg.database)?);
        let retired = lifecycle.invalidate(&EventId::new(event_id.as_str()), reason)?;

        info(format!(
            "Invalidated {} ({} at {}).",
            retired.id,
            retired.kind,
            retired.timestamp_str()
        ));
    }

    Ok(())
}
