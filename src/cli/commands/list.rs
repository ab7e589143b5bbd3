use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{BatchReport, Core};
use crate::core::report::ReportLogic;
use crate::core::resolver::ScheduleResolver;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DailySummary;
use crate::ui::messages::warning;
use crate::utils::colors::{RESET, color_for_balance, color_for_day_status, colorize_tag};
use crate::utils::date;
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        employee,
        period,
        json,
    } = cmd
    {
        let dates = date::resolve_period(period.as_deref()).map_err(AppError::InvalidDate)?;
        let store = SqliteStore::open(&cfg.database)?;
        let resolver = ScheduleResolver::from_config(cfg);

        let report = ReportLogic::daily(&store, &resolver, employee, &dates)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report.summaries)?);
        } else {
            for summary in &report.summaries {
                print_summary(summary);
            }
        }

        print_failures(&report);
    }
    Ok(())
}

pub(crate) fn print_failures(report: &BatchReport) {
    for f in &report.failures {
        let day = f
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "unknown date".into());
        warning(format!("{} {}: {}", f.employee_id, day, f.error));
    }
}

fn print_summary(summary: &DailySummary) {
    if summary.event_count == 0 && summary.expected_minutes == 0 {
        return;
    }

    let status_color = color_for_day_status(summary.status);
    let balance_color = color_for_balance(summary.balance_minutes);
    let tags: Vec<String> = Core::day_tags(summary).iter().map(colorize_tag).collect();

    println!(
        "{} | {}{:<10}{} | worked {} | expected {} | balance {}{}{} | delay {}m | overtime {}m{}{}",
        summary.date,
        status_color,
        summary.status,
        RESET,
        mins2readable(summary.worked_minutes, false, true),
        mins2readable(summary.expected_minutes, false, true),
        balance_color,
        mins2readable(summary.balance_minutes, true, true),
        RESET,
        summary.delay_minutes,
        summary.overtime_minutes,
        if tags.is_empty() {
            String::new()
        } else {
            format!(" | {}", tags.join(" "))
        },
        if summary.degraded { " | degraded" } else { "" },
    );
}
