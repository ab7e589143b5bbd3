use crate::cli::commands::list::print_failures;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::core::resolver::ScheduleResolver;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date;
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Monthly {
        employee,
        month,
        json,
    } = cmd
    {
        let (year, m) =
            date::parse_month(month).ok_or_else(|| AppError::InvalidDate(month.to_string()))?;
        let store = SqliteStore::open(&cfg.database)?;
        let resolver = ScheduleResolver::from_config(cfg);

        let (summary, report) = ReportLogic::monthly(&store, &resolver, employee, year, m)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            header(format!("{} · {}", summary.employee_id, summary.month));
            println!(
                "Worked:      {}",
                mins2readable(summary.worked_minutes, false, false)
            );
            println!(
                "Expected:    {}",
                mins2readable(summary.expected_minutes, false, false)
            );
            println!(
                "Balance:     {}{}{} ({:?})",
                color_for_balance(summary.balance_minutes),
                mins2readable(summary.balance_minutes, true, false),
                RESET,
                summary.status
            );
            println!("Overtime:    {} min", summary.overtime_minutes);
            println!("Delay:       {} min", summary.delay_minutes);
            println!("Compensated: {} min", summary.compensated_minutes);
            println!(
                "Days worked: {} | absences: {} | late: {} | overtime: {} | incomplete: {}",
                summary.days_worked,
                summary.absences,
                summary.days_late,
                summary.days_overtime,
                summary.days_incomplete
            );
        }

        print_failures(&report);
    }

    Ok(())
}
