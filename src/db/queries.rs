use crate::errors::AppResult;
use crate::models::event::{ClockEvent, EventId, RawClockEvent};
use crate::models::record_status::RecordStatus;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_COLUMNS: &str = "id, employee_id, timestamp, kind, capture_method, status, \
     justification, supersedes_id, superseded_by_id, tolerance_minutes, created_at";

/// Row → raw event. Validation into `ClockEvent` happens in the caller so a
/// bad row can be reported instead of failing the whole query.
pub fn map_row(row: &Row) -> Result<RawClockEvent> {
    Ok(RawClockEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        timestamp: row.get("timestamp")?,
        kind: row.get("kind")?,
        capture_method: row.get("capture_method")?,
        status: row.get("status")?,
        justification: row.get("justification")?,
        supersedes_id: row.get("supersedes_id")?,
        superseded_by_id: row.get("superseded_by_id")?,
        tolerance_minutes: row.get("tolerance_minutes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &ClockEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (id, employee_id, timestamp, kind, capture_method, status,
                             justification, supersedes_id, superseded_by_id, tolerance_minutes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            ev.id.as_str(),
            ev.employee_id,
            ev.timestamp_str(),
            ev.kind.to_db_str(),
            ev.capture_method.to_db_str(),
            ev.status.to_db_str(),
            ev.justification,
            ev.supersedes_id.as_ref().map(EventId::as_str),
            ev.superseded_by_id.as_ref().map(EventId::as_str),
            ev.tolerance_minutes,
            ev.created_at,
        ],
    )?;
    Ok(())
}

pub fn load_raw_event(conn: &Connection, id: &EventId) -> AppResult<Option<RawClockEvent>> {
    let sql = format!("SELECT {} FROM events WHERE id = ?1", EVENT_COLUMNS);
    let raw = conn
        .query_row(&sql, [id.as_str()], map_row)
        .optional()?;
    Ok(raw)
}

pub fn load_raw_events_for_day(
    conn: &Connection,
    employee_id: &str,
    date: &NaiveDate,
) -> AppResult<Vec<RawClockEvent>> {
    let sql = format!(
        "SELECT {} FROM events
         WHERE employee_id = ?1 AND substr(timestamp, 1, 10) = ?2
         ORDER BY timestamp ASC",
        EVENT_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![employee_id, date.format("%Y-%m-%d").to_string()],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_raw_events_between(
    conn: &Connection,
    employee_id: Option<&str>,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<RawClockEvent>> {
    let sql = format!(
        "SELECT {} FROM events
         WHERE substr(timestamp, 1, 10) BETWEEN ?1 AND ?2
           AND (?3 IS NULL OR employee_id = ?3)
         ORDER BY employee_id ASC, timestamp ASC",
        EVENT_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
            employee_id
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Compare-and-swap on status: retire `id` only while it is still active.
/// Returns the number of rows changed (0 or 1).
pub fn retire_event(
    conn: &Connection,
    id: &EventId,
    to: RecordStatus,
    justification: &str,
    superseded_by: Option<&EventId>,
) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE events
         SET status = ?1, justification = ?2, superseded_by_id = ?3
         WHERE id = ?4 AND status = 'active'",
        params![
            to.to_db_str(),
            justification,
            superseded_by.map(EventId::as_str),
            id.as_str()
        ],
    )?;
    Ok(changed)
}

pub fn current_status(conn: &Connection, id: &EventId) -> AppResult<Option<String>> {
    let status = conn
        .query_row(
            "SELECT status FROM events WHERE id = ?1",
            [id.as_str()],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(status)
}

/// Reserve the next number of the id sequence.
pub fn reserve_event_number(conn: &Connection) -> AppResult<i64> {
    conn.execute("INSERT INTO event_ids DEFAULT VALUES", [])?;
    Ok(conn.last_insert_rowid())
}
