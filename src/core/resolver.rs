//! Schedule resolution: one fixed lookup order for expected times and tolerance.
//!
//! Day off: the employee's weekly entry for the weekday, else the company's.
//! Times:     preset assigned for the date → employee weekday → employee times
//!            → company weekday → company default.
//! Tolerance: employee override → company default → 0, capped by policy.
//! The record-level override sits on the event and is applied by the classifier.

use crate::config::{Config, EmployeeProfile, ScheduleTimes, WeeklySchedule};
use crate::errors::{AppError, AppResult};
use crate::models::policy::Policy;
use crate::models::schedule::{Schedule, ScheduleSource};
use crate::utils::time::require_time;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ScheduleResolver {
    policy: Policy,
    default_schedule: Option<ScheduleTimes>,
    weekly: WeeklySchedule,
    presets: BTreeMap<String, ScheduleTimes>,
    employees: BTreeMap<String, EmployeeProfile>,
}

impl ScheduleResolver {
    pub fn new(policy: Policy, default_schedule: Option<ScheduleTimes>) -> Self {
        Self {
            policy,
            default_schedule,
            ..Self::default()
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            policy: cfg.policy.clone(),
            default_schedule: cfg.default_schedule.clone(),
            weekly: cfg.weekly_schedule.clone(),
            presets: cfg.presets.clone(),
            employees: cfg.employees.clone(),
        }
    }

    pub fn with_weekly(mut self, weekly: WeeklySchedule) -> Self {
        self.weekly = weekly;
        self
    }

    pub fn with_preset(mut self, name: &str, times: ScheduleTimes) -> Self {
        self.presets.insert(name.to_string(), times);
        self
    }

    pub fn with_employee(mut self, id: &str, profile: EmployeeProfile) -> Self {
        self.employees.insert(id.to_string(), profile);
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Schedule of one employee-day. `Ok(None)` is a day off: nothing is
    /// expected and nothing can be late.
    pub fn resolve(&self, employee_id: &str, date: NaiveDate) -> AppResult<Option<Schedule>> {
        let profile = self.employees.get(employee_id);
        let weekday = date.weekday();
        let own_day = profile.and_then(|p| p.weekly_schedule.day(weekday));
        let company_day = self.weekly.day(weekday);

        if own_day.or(company_day).is_some_and(|d| !d.work_day) {
            debug!(employee = employee_id, %date, "day off");
            return Ok(None);
        }

        let tolerance = self.resolve_tolerance(profile);

        if let Some(profile) = profile {
            if let Some((name, times)) = self.preset_for(employee_id, profile, date) {
                return self
                    .build(times, tolerance, ScheduleSource::Preset(name.to_string()))
                    .map(Some);
            }

            if let Some(times) = own_day.and_then(|d| d.times()) {
                return self
                    .build(&times, tolerance, ScheduleSource::EmployeeWeekly)
                    .map(Some);
            }

            if let (Some(start), Some(end)) = (&profile.expected_start, &profile.expected_end) {
                return self
                    .build(
                        &ScheduleTimes::new(start, end),
                        tolerance,
                        ScheduleSource::Employee,
                    )
                    .map(Some);
            }
        }

        if let Some(times) = company_day.and_then(|d| d.times()) {
            return self
                .build(&times, tolerance, ScheduleSource::CompanyWeekly)
                .map(Some);
        }

        match &self.default_schedule {
            Some(times) => self
                .build(times, tolerance, ScheduleSource::CompanyDefault)
                .map(Some),
            None => Err(AppError::ScheduleNotFound {
                employee_id: employee_id.to_string(),
                date: date.to_string(),
            }),
        }
    }

    fn resolve_tolerance(&self, profile: Option<&EmployeeProfile>) -> i64 {
        let raw = profile
            .and_then(|p| p.tolerance_minutes)
            .or(self.policy.tolerance_minutes)
            .unwrap_or(0);
        self.policy.cap_tolerance(raw)
    }

    /// First assignment covering `date` whose preset exists.
    fn preset_for<'a>(
        &'a self,
        employee_id: &str,
        profile: &'a EmployeeProfile,
        date: NaiveDate,
    ) -> Option<(&'a str, &'a ScheduleTimes)> {
        profile
            .presets
            .iter()
            .filter(|a| a.covers(date))
            .find_map(|a| match self.presets.get(&a.preset) {
                Some(times) => Some((a.preset.as_str(), times)),
                None => {
                    warn!(
                        employee = employee_id,
                        preset = %a.preset,
                        "assigned preset is not defined, skipping"
                    );
                    None
                }
            })
    }

    fn build(
        &self,
        times: &ScheduleTimes,
        tolerance: i64,
        source: ScheduleSource,
    ) -> AppResult<Schedule> {
        let start = require_time(&times.start)?;
        let end = require_time(&times.end)?;
        Ok(Schedule::new(start, end, tolerance, source)
            .with_tolerance_cap(self.policy.max_tolerance_minutes))
    }
}
