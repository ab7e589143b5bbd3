use crate::models::classification::StatusTag;
use crate::models::day_summary::DayStatus;
use crate::models::record_status::RecordStatus;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_balance(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

pub fn color_for_day_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Normal => GREEN,
        DayStatus::Late => YELLOW,
        DayStatus::Overtime => BLUE,
        DayStatus::Absent => RED,
        DayStatus::Incomplete => MAGENTA,
    }
}

pub fn color_for_record_status(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Active => RESET,
        RecordStatus::Adjusted | RecordStatus::Invalidated => GREY,
    }
}

/// Chip text for a tag, colored by severity.
pub fn colorize_tag(tag: &StatusTag) -> String {
    let color = match tag {
        StatusTag::OnTime => GREEN,
        StatusTag::Late(_) | StatusTag::EarlyDeparture(_) => YELLOW,
        StatusTag::EarlyArrival(_) => BLUE,
    };
    format!("{color}{tag}{RESET}")
}
