use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStatus {
    Positive,
    Negative,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub employee_id: String,
    /// `YYYY-MM`
    pub month: String,
    pub expected_minutes: i64,
    pub worked_minutes: i64,
    pub overtime_minutes: i64,
    pub delay_minutes: i64,
    pub compensated_minutes: i64,
    pub balance_minutes: i64,
    pub days_worked: u32,
    pub absences: u32,
    pub days_late: u32,
    pub days_overtime: u32,
    pub days_incomplete: u32,
    pub status: MonthStatus,
}
