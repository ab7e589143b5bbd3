use crate::core::logic::{BatchReport, Core};
use crate::core::monthly;
use crate::core::resolver::ScheduleResolver;
use crate::errors::AppResult;
use crate::models::month_summary::MonthlySummary;
use crate::store::EventStore;
use crate::utils::date::{all_days_of_month, next_day};
use chrono::NaiveDate;

/// Glue between a store and the pure engine for reporting surfaces.
pub struct ReportLogic;

impl ReportLogic {
    /// Daily summaries for one employee over `dates` (ascending, non-empty for output).
    pub fn daily<S: EventStore>(
        store: &S,
        resolver: &ScheduleResolver,
        employee_id: &str,
        dates: &[NaiveDate],
    ) -> AppResult<BatchReport> {
        let (Some(&from), Some(&to)) = (dates.first(), dates.last()) else {
            return Ok(BatchReport::default());
        };

        // one extra day for overnight shifts closing after midnight
        let raw = store.raw_events_between(Some(employee_id), from, next_day(to))?;
        let days: Vec<(String, NaiveDate)> = dates
            .iter()
            .map(|d| (employee_id.to_string(), *d))
            .collect();

        Ok(Core::aggregate_batch(&raw, &days, resolver))
    }

    pub fn monthly<S: EventStore>(
        store: &S,
        resolver: &ScheduleResolver,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> AppResult<(MonthlySummary, BatchReport)> {
        let dates = all_days_of_month(year, month);
        let report = Self::daily(store, resolver, employee_id, &dates)?;
        let summary = monthly::rollup(employee_id, year, month, &report.summaries);
        Ok((summary, report))
    }
}
