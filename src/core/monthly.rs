use crate::models::day_summary::{DailySummary, DayStatus};
use crate::models::month_summary::{MonthStatus, MonthlySummary};
use chrono::Datelike;

/// Fold the daily summaries of one employee-month. Days outside the month
/// or belonging to someone else are ignored.
pub fn rollup(employee_id: &str, year: i32, month: u32, days: &[DailySummary]) -> MonthlySummary {
    let mut out = MonthlySummary {
        employee_id: employee_id.to_string(),
        month: format!("{:04}-{:02}", year, month),
        expected_minutes: 0,
        worked_minutes: 0,
        overtime_minutes: 0,
        delay_minutes: 0,
        compensated_minutes: 0,
        balance_minutes: 0,
        days_worked: 0,
        absences: 0,
        days_late: 0,
        days_overtime: 0,
        days_incomplete: 0,
        status: MonthStatus::Balanced,
    };

    let in_month = days.iter().filter(|d| {
        d.employee_id == employee_id && d.date.year() == year && d.date.month() == month
    });

    for day in in_month {
        out.expected_minutes += day.expected_minutes;
        out.worked_minutes += day.worked_minutes;
        out.overtime_minutes += day.overtime_minutes;
        out.delay_minutes += day.delay_minutes;
        out.compensated_minutes += day.compensated_minutes;

        match day.status {
            DayStatus::Absent => out.absences += 1,
            DayStatus::Late => out.days_late += 1,
            DayStatus::Overtime => out.days_overtime += 1,
            DayStatus::Incomplete => out.days_incomplete += 1,
            DayStatus::Normal => {}
        }

        if day.event_count > 0 {
            out.days_worked += 1;
        }
    }

    out.balance_minutes = out.worked_minutes - out.expected_minutes;
    out.status = match out.balance_minutes {
        b if b > 0 => MonthStatus::Positive,
        b if b < 0 => MonthStatus::Negative,
        _ => MonthStatus::Balanced,
    };

    out
}
