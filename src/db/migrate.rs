use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

const MIGRATION_CREATE_EVENTS: &str = "20260101_0001_create_events";
const MIGRATION_EVENT_IDS: &str = "20260101_0002_event_id_sequence";

/// Ensure that the `log` table exists. It doubles as the audit trail and as
/// the migration ledger.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    info!(version, "migration applied");
    Ok(())
}

/// `kind` is nullable on purpose: rows written by capture collaborators are
/// validated when read, and a missing kind must surface as a malformed event.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id                TEXT PRIMARY KEY,
            employee_id       TEXT NOT NULL,
            timestamp         TEXT NOT NULL,
            kind              TEXT,
            capture_method    TEXT NOT NULL DEFAULT 'manual',
            status            TEXT NOT NULL DEFAULT 'active'
                              CHECK(status IN ('active','adjusted','invalidated')),
            justification     TEXT,
            supersedes_id     TEXT,
            superseded_by_id  TEXT,
            tolerance_minutes INTEGER,
            created_at        TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_events_employee_ts ON events(employee_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_events_status ON events(status);
        "#,
    )
}

fn create_event_id_sequence(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS event_ids (
            n INTEGER PRIMARY KEY AUTOINCREMENT
        );
        "#,
    )
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !is_applied(conn, MIGRATION_CREATE_EVENTS)? {
        create_events_table(conn)?;
        mark_applied(conn, MIGRATION_CREATE_EVENTS, "Created events table")?;
    }

    if !is_applied(conn, MIGRATION_EVENT_IDS)? {
        create_event_id_sequence(conn)?;
        mark_applied(conn, MIGRATION_EVENT_IDS, "Created event id sequence")?;
    }

    Ok(())
}
