use serde::{Deserialize, Serialize};

/// Company rule: no tolerance window may exceed this many minutes.
pub const TOLERANCE_CAP_MINUTES: i64 = 10;

/// How overtime minutes are rounded before being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeRounding {
    #[default]
    Exact,
    /// Round up to the next multiple of the step (5, 10, 15 in practice).
    /// Config validation keeps it within 1..=60.
    Step(i64),
}

impl OvertimeRounding {
    pub fn apply(&self, minutes: i64) -> i64 {
        match *self {
            OvertimeRounding::Step(step) if step > 1 && minutes > 0 => {
                let steps = minutes / step + i64::from(minutes % step != 0);
                steps.checked_mul(step).unwrap_or(minutes)
            }
            _ => minutes,
        }
    }
}

/// Company-wide attendance policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Company default tolerance, used when the employee has no override.
    #[serde(default)]
    pub tolerance_minutes: Option<i64>,
    #[serde(default = "default_max_tolerance")]
    pub max_tolerance_minutes: i64,
    #[serde(default)]
    pub count_early_arrival_as_overtime: bool,
    #[serde(default)]
    pub auto_break_minutes: i64,
    #[serde(default)]
    pub overtime_rounding: OvertimeRounding,
    /// Offset a day's delay against the same day's overtime.
    #[serde(default)]
    pub compensate_balance: bool,
}

fn default_max_tolerance() -> i64 {
    TOLERANCE_CAP_MINUTES
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            tolerance_minutes: None,
            max_tolerance_minutes: default_max_tolerance(),
            count_early_arrival_as_overtime: false,
            auto_break_minutes: 0,
            overtime_rounding: OvertimeRounding::Exact,
            compensate_balance: false,
        }
    }
}

impl Policy {
    /// Clamp any tolerance value into `[0, max_tolerance_minutes]`.
    pub fn cap_tolerance(&self, minutes: i64) -> i64 {
        minutes.clamp(0, self.max_tolerance_minutes.max(0))
    }
}
