pub mod classification;
pub mod day_summary;
pub mod event;
pub mod event_type;
pub mod month_summary;
pub mod policy;
pub mod record_status;
pub mod schedule;
