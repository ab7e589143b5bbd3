#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimeclock::models::event::{ClockEvent, EventId, parse_timestamp};
use rtimeclock::models::event_type::{CaptureMethod, EventKind};
use rtimeclock::models::schedule::{Schedule, ScheduleSource};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimeclock");
    // keep `init` away from the real home directory
    cmd.env("HOME", env::temp_dir());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a YAML config next to the test DB and return its path.
pub fn write_config(name: &str, yaml: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.conf", name));
    fs::write(&path, yaml).expect("write config");
    path.to_string_lossy().to_string()
}

/// `init --test` against a fresh database.
pub fn init_db(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

pub fn event(id: &str, employee: &str, at: &str, kind: EventKind) -> ClockEvent {
    ClockEvent::new(
        EventId::new(id),
        employee,
        parse_timestamp(at).expect("timestamp"),
        kind,
        CaptureMethod::Manual,
    )
}

pub fn entry(id: &str, at: &str) -> ClockEvent {
    event(id, "emp-1", at, EventKind::Entry)
}

pub fn exit(id: &str, at: &str) -> ClockEvent {
    event(id, "emp-1", at, EventKind::Exit)
}

/// 09:00–18:00 with the given tolerance, capped at 10.
pub fn office_schedule(tolerance: i64) -> Schedule {
    Schedule::new(
        chrono::NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
        chrono::NaiveTime::from_hms_opt(18, 0, 0).expect("time"),
        tolerance,
        ScheduleSource::CompanyDefault,
    )
}
