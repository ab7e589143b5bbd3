use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::ClockEvent;
use crate::store::EventStore;
use crate::utils::colors::{RESET, color_for_record_status};
use crate::utils::date;
use crate::utils::formatting::pad_right;

/// Audit view of one employee-day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events {
        employee,
        date: day,
        all,
    } = cmd
    {
        let d = date::parse_date(day).ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
        let store = SqliteStore::open(&cfg.database)?;

        let events: Vec<ClockEvent> = store
            .events_for_day(employee, d)?
            .into_iter()
            .filter(|e| *all || e.is_active())
            .collect();

        if events.is_empty() {
            println!("No events for {} on {}", employee, d);
            return Ok(());
        }

        print_events(&events);
    }

    Ok(())
}

fn print_events(events: &[ClockEvent]) {
    let id_w = events.iter().map(|e| e.id.as_str().len()).max().unwrap_or(6);

    println!("EVENTS:");
    for ev in events {
        let color = color_for_record_status(ev.status);
        let mut line = format!(
            "{} | {} | {:<5} | {:<10} | {:<11}",
            pad_right(ev.id.as_str(), id_w),
            ev.timestamp_str(),
            ev.kind,
            ev.capture_method,
            ev.status
        );

        if let Some(prev) = &ev.supersedes_id {
            line.push_str(&format!(" | supersedes {}", prev));
        }
        if let Some(next) = &ev.superseded_by_id {
            line.push_str(&format!(" | superseded by {}", next));
        }
        if let Some(reason) = &ev.justification {
            line.push_str(&format!(" | \"{}\"", reason));
        }

        println!("{color}{line}{RESET}");
    }
}
