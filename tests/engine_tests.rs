use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rtimeclock::config::{
    Config, DaySchedule, EmployeeProfile, PresetAssignment, ScheduleTimes, WeeklySchedule,
};
use rtimeclock::core::calculator::classify::{classify, dedup_tags};
use rtimeclock::core::calculator::timeline::build_timeline;
use rtimeclock::core::logic::Core;
use rtimeclock::core::monthly::rollup;
use rtimeclock::core::resolver::ScheduleResolver;
use rtimeclock::errors::AppError;
use rtimeclock::models::classification::StatusTag;
use rtimeclock::models::day_summary::DayStatus;
use rtimeclock::models::event::RawClockEvent;
use rtimeclock::models::month_summary::MonthStatus;
use rtimeclock::models::policy::{OvertimeRounding, Policy};
use rtimeclock::models::record_status::RecordStatus;
use rtimeclock::models::schedule::{Schedule, ScheduleSource};
use rtimeclock::utils::date::all_days_of_month;

mod common;
use common::{day, entry, exit, office_schedule};

#[test]
fn entry_within_tolerance_is_on_time() {
    let schedule = office_schedule(10);
    let result = classify(&entry("e1", "2026-03-02 09:07"), &schedule).expect("active");

    assert_eq!(result.status_tags, vec![StatusTag::OnTime]);
    assert_eq!(result.deviation_minutes, 7);
}

#[test]
fn entry_past_tolerance_is_late_by_the_excess() {
    let schedule = office_schedule(10);
    let result = classify(&entry("e1", "2026-03-02 09:12"), &schedule).expect("active");

    assert_eq!(result.status_tags, vec![StatusTag::Late(2)]);
    assert_eq!(result.deviation_minutes, 12);
    assert_eq!(result.late_minutes(), 2);
}

#[test]
fn tolerance_boundary_is_inclusive() {
    let schedule = office_schedule(10);

    let late_edge = classify(&entry("e1", "2026-03-02 09:10"), &schedule).expect("active");
    assert!(late_edge.has("on-time"));

    let early_edge = classify(&entry("e2", "2026-03-02 08:50"), &schedule).expect("active");
    assert!(early_edge.has("on-time"));

    let exit_edge = classify(&exit("x1", "2026-03-02 17:50"), &schedule).expect("active");
    assert!(exit_edge.has("on-time"));
}

#[test]
fn early_arrival_and_early_departure_carry_magnitudes() {
    let schedule = office_schedule(5);

    let early = classify(&entry("e1", "2026-03-02 08:30"), &schedule).expect("active");
    assert_eq!(early.status_tags, vec![StatusTag::EarlyArrival(25)]);
    assert_eq!(early.deviation_minutes, -30);

    let leaving = classify(&exit("x1", "2026-03-02 17:20"), &schedule).expect("active");
    assert_eq!(leaving.status_tags, vec![StatusTag::EarlyDeparture(35)]);
    assert_eq!(leaving.deviation_minutes, 40);
}

#[test]
fn record_override_wins_but_stays_capped() {
    let schedule = office_schedule(2);

    let generous = entry("e1", "2026-03-02 09:08").with_tolerance(Some(8));
    assert!(classify(&generous, &schedule).expect("active").has("on-time"));

    // 30 is capped to 10
    let excessive = entry("e2", "2026-03-02 09:15").with_tolerance(Some(30));
    let result = classify(&excessive, &schedule).expect("active");
    assert_eq!(result.status_tags, vec![StatusTag::Late(5)]);
}

#[test]
fn negative_tolerance_cap_means_no_tolerance() {
    let mut schedule = office_schedule(10);
    schedule.tolerance_cap = -5;

    assert_eq!(schedule.effective_tolerance(None), 0);
    assert_eq!(schedule.effective_tolerance(Some(8)), 0);

    let result = classify(&entry("e1", "2026-03-02 09:01"), &schedule).expect("active");
    assert_eq!(result.status_tags, vec![StatusTag::Late(1)]);
}

#[test]
fn retired_events_are_not_classified() {
    let mut ev = entry("e1", "2026-03-02 09:30");
    ev.status = RecordStatus::Invalidated;
    assert!(classify(&ev, &office_schedule(10)).is_none());
}

#[test]
fn full_day_with_late_exit_reports_overtime() {
    let events = vec![
        entry("e1", "2026-03-02 09:00"),
        exit("x1", "2026-03-02 18:30"),
    ];
    let schedule = office_schedule(10);

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&schedule),
        &Policy::default(),
    );

    assert_eq!(summary.worked_minutes, 570);
    assert_eq!(summary.expected_minutes, 540);
    assert_eq!(summary.overtime_minutes, 20);
    assert_eq!(summary.balance_minutes, 30);
    assert_eq!(summary.delay_minutes, 0);
    assert_eq!(summary.status, DayStatus::Overtime);
}

#[test]
fn entry_without_exit_is_incomplete() {
    let events = vec![entry("e1", "2026-03-02 08:00")];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &Policy::default(),
    );

    assert_eq!(summary.status, DayStatus::Incomplete);
    assert_eq!(summary.worked_minutes, 0);
    assert_eq!(summary.overtime_minutes, 0);
    assert_eq!(summary.event_count, 1);
}

#[test]
fn no_events_on_a_scheduled_day_is_absent() {
    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &[],
        Some(&office_schedule(10)),
        &Policy::default(),
    );

    assert_eq!(summary.status, DayStatus::Absent);
    assert_eq!(summary.balance_minutes, -540);
}

#[test]
fn late_day_reports_delay_and_tags() {
    let events = vec![
        entry("e1", "2026-03-02 09:25"),
        exit("x1", "2026-03-02 18:00"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &Policy::default(),
    );

    assert_eq!(summary.delay_minutes, 15);
    assert_eq!(summary.status, DayStatus::Late);
    assert_eq!(summary.worked_minutes, 515);
    assert_eq!(
        Core::day_tags(&summary),
        vec![StatusTag::Late(15), StatusTag::OnTime]
    );
}

#[test]
fn day_tags_drop_repeated_text() {
    let events = vec![
        entry("e1", "2026-03-02 09:00"),
        exit("x1", "2026-03-02 12:00"),
        entry("e2", "2026-03-02 09:05"),
        exit("x2", "2026-03-02 18:00"),
    ];
    let schedule = office_schedule(10);
    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&schedule),
        &Policy::default(),
    );

    let tags = dedup_tags(&summary.classifications);
    assert_eq!(tags, vec![StatusTag::OnTime, StatusTag::EarlyDeparture(350)]);
}

#[test]
fn aggregation_is_idempotent_and_order_independent() {
    let events = vec![
        exit("x1", "2026-03-02 17:45"),
        entry("e1", "2026-03-02 08:40"),
    ];
    let mut reversed = events.clone();
    reversed.reverse();
    let schedule = office_schedule(10);
    let policy = Policy::default();

    let a = Core::aggregate("emp-1", day("2026-03-02"), &events, Some(&schedule), &policy);
    let b = Core::aggregate("emp-1", day("2026-03-02"), &events, Some(&schedule), &policy);
    let c = Core::aggregate("emp-1", day("2026-03-02"), &reversed, Some(&schedule), &policy);

    assert_eq!(a, b);
    assert_eq!(a.worked_minutes, c.worked_minutes);
    assert_eq!(a.status, c.status);
    assert_eq!(a.early_arrival_minutes, 10);
    assert_eq!(a.early_departure_minutes, 5);
}

#[test]
fn second_entry_orphans_the_first() {
    let events = vec![
        entry("e1", "2026-03-02 08:00"),
        entry("e2", "2026-03-02 09:00"),
        exit("x1", "2026-03-02 17:00"),
        exit("x2", "2026-03-02 17:30"),
    ];

    let timeline = build_timeline(&events);
    assert_eq!(timeline.orphan_entries.len(), 1);
    assert_eq!(timeline.orphan_entries[0].id.as_str(), "e1");
    assert_eq!(timeline.orphan_exits.len(), 1);
    assert_eq!(timeline.orphan_exits[0].id.as_str(), "x2");
    assert_eq!(timeline.total_worked_minutes, 480);
    assert!(!timeline.is_incomplete());
}

#[test]
fn retired_events_do_not_count() {
    let mut stale = exit("x0", "2026-03-02 12:00");
    stale.status = RecordStatus::Adjusted;
    let events = vec![
        entry("e1", "2026-03-02 09:00"),
        stale,
        exit("x1", "2026-03-02 18:00"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &Policy::default(),
    );

    assert_eq!(summary.worked_minutes, 540);
    assert_eq!(summary.event_count, 2);
    assert_eq!(summary.status, DayStatus::Normal);
}

#[test]
fn auto_break_comes_off_both_sides() {
    let policy = Policy {
        auto_break_minutes: 60,
        ..Policy::default()
    };
    let events = vec![
        entry("e1", "2026-03-02 09:00"),
        exit("x1", "2026-03-02 18:00"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &policy,
    );

    assert_eq!(summary.expected_minutes, 480);
    assert_eq!(summary.worked_minutes, 480);
    assert_eq!(summary.balance_minutes, 0);
}

#[test]
fn early_arrival_counts_as_overtime_when_enabled() {
    let policy = Policy {
        count_early_arrival_as_overtime: true,
        ..Policy::default()
    };
    let events = vec![
        entry("e1", "2026-03-02 08:30"),
        exit("x1", "2026-03-02 18:00"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &policy,
    );

    assert_eq!(summary.early_arrival_minutes, 20);
    assert_eq!(summary.overtime_minutes, 20);
    assert_eq!(summary.status, DayStatus::Overtime);
}

#[test]
fn overtime_rounds_up_to_the_step() {
    let policy = Policy {
        overtime_rounding: OvertimeRounding::Step(15),
        ..Policy::default()
    };
    let events = vec![
        entry("e1", "2026-03-02 09:00"),
        exit("x1", "2026-03-02 18:17"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &policy,
    );

    assert_eq!(summary.overtime_minutes, 15);
    assert_eq!(OvertimeRounding::Step(15).apply(16), 30);
    assert_eq!(OvertimeRounding::Exact.apply(16), 16);
}

#[test]
fn oversized_rounding_step_does_not_overflow() {
    assert_eq!(OvertimeRounding::Step(i64::MAX).apply(5), i64::MAX);
    assert_eq!(OvertimeRounding::Step(i64::MAX / 2 + 1).apply(i64::MAX), i64::MAX);
    assert_eq!(OvertimeRounding::Step(15).apply(30), 30);
}

#[test]
fn config_rejects_rounding_steps_out_of_range() {
    for step in [0, -5, 61, i64::MAX] {
        let cfg = Config {
            policy: Policy {
                overtime_rounding: OvertimeRounding::Step(step),
                ..Policy::default()
            },
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))), "step {step}");
    }

    let ok = Config {
        policy: Policy {
            overtime_rounding: OvertimeRounding::Step(60),
            ..Policy::default()
        },
        ..Config::default()
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn compensation_offsets_delay_against_overtime() {
    let policy = Policy {
        compensate_balance: true,
        ..Policy::default()
    };
    let events = vec![
        entry("e1", "2026-03-02 09:15"),
        exit("x1", "2026-03-02 18:40"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &policy,
    );

    // delay 5 offset against overtime 30; both stay as measured
    assert_eq!(summary.compensated_minutes, 5);
    assert_eq!(summary.delay_minutes, 5);
    assert_eq!(summary.overtime_minutes, 30);
    assert_eq!(summary.status, DayStatus::Overtime);
}

#[test]
fn compensated_delay_is_no_longer_late() {
    let policy = Policy {
        compensate_balance: true,
        ..Policy::default()
    };
    let events = vec![
        entry("e1", "2026-03-02 09:25"),
        exit("x1", "2026-03-02 18:30"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &policy,
    );

    // delay 15, overtime 20
    assert_eq!(summary.delay_minutes, 15);
    assert_eq!(Core::day_tags(&summary)[0], StatusTag::Late(15));
    assert_eq!(summary.compensated_minutes, 15);
    assert_eq!(summary.status, DayStatus::Overtime);

    let without = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&office_schedule(10)),
        &Policy::default(),
    );
    assert_eq!(without.compensated_minutes, 0);
    assert_eq!(without.status, DayStatus::Late);
}

fn night_schedule() -> Schedule {
    Schedule::new(
        NaiveTime::from_hms_opt(22, 0, 0).expect("time"),
        NaiveTime::from_hms_opt(6, 0, 0).expect("time"),
        10,
        ScheduleSource::CompanyDefault,
    )
}

#[test]
fn overnight_shift_is_aggregated_across_midnight() {
    let events = vec![
        entry("e1", "2026-03-02 22:00"),
        exit("x1", "2026-03-03 06:30"),
    ];

    let summary = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &events,
        Some(&night_schedule()),
        &Policy::default(),
    );

    assert_eq!(summary.event_count, 2);
    assert_eq!(summary.expected_minutes, 480);
    assert_eq!(summary.worked_minutes, 510);
    assert_eq!(summary.overtime_minutes, 20);
    assert_eq!(summary.status, DayStatus::Overtime);
    assert_eq!(Core::day_tags(&summary), vec![StatusTag::OnTime]);
}

#[test]
fn overnight_exit_before_the_end_is_an_early_departure() {
    let result = classify(&exit("x1", "2026-03-02 23:00"), &night_schedule()).expect("active");
    assert_eq!(result.status_tags, vec![StatusTag::EarlyDeparture(410)]);
    assert_eq!(result.deviation_minutes, 420);

    let after_midnight =
        classify(&exit("x2", "2026-03-03 05:55"), &night_schedule()).expect("active");
    assert_eq!(after_midnight.status_tags, vec![StatusTag::OnTime]);
    assert_eq!(after_midnight.deviation_minutes, 5);
}

#[test]
fn previous_night_belongs_to_the_previous_day() {
    // Sunday night shift closes on Monday morning; Monday's own shift starts at 22:00.
    let events = vec![
        entry("e0", "2026-03-01 22:00"),
        exit("x0", "2026-03-02 06:00"),
        entry("e1", "2026-03-02 22:05"),
        exit("x1", "2026-03-03 06:00"),
    ];
    let schedule = night_schedule();
    let policy = Policy::default();

    let sunday = Core::aggregate("emp-1", day("2026-03-01"), &events, Some(&schedule), &policy);
    let monday = Core::aggregate("emp-1", day("2026-03-02"), &events, Some(&schedule), &policy);

    assert_eq!(sunday.event_count, 2);
    assert_eq!(sunday.worked_minutes, 480);
    assert_eq!(monday.event_count, 2);
    assert_eq!(monday.worked_minutes, 475);
    assert_eq!(monday.status, DayStatus::Normal);
}

fn resolver() -> ScheduleResolver {
    let policy = Policy {
        tolerance_minutes: Some(5),
        ..Policy::default()
    };
    ScheduleResolver::new(policy, Some(ScheduleTimes::new("09:00", "18:00")))
        .with_preset("early", ScheduleTimes::new("07:00", "16:00"))
        .with_employee(
            "ana",
            EmployeeProfile {
                expected_start: Some("08:00".into()),
                expected_end: Some("17:00".into()),
                tolerance_minutes: Some(25),
                presets: vec![PresetAssignment {
                    preset: "early".into(),
                    from: Some(day("2026-03-09")),
                    until: Some(day("2026-03-13")),
                }],
                ..EmployeeProfile::default()
            },
        )
}

fn working(r: &ScheduleResolver, employee: &str, date: &str) -> Schedule {
    r.resolve(employee, day(date))
        .expect("resolvable")
        .expect("working day")
}

#[test]
fn resolution_prefers_preset_then_employee_then_default() {
    let r = resolver();

    let in_preset = working(&r, "ana", "2026-03-10");
    assert_eq!(in_preset.source, ScheduleSource::Preset("early".into()));
    assert_eq!(in_preset.start_minute(), 7 * 60);

    let own = working(&r, "ana", "2026-03-16");
    assert_eq!(own.source, ScheduleSource::Employee);
    assert_eq!(own.start_minute(), 8 * 60);

    let fallback = working(&r, "bob", "2026-03-16");
    assert_eq!(fallback.source, ScheduleSource::CompanyDefault);
    assert_eq!(fallback.tolerance_minutes, 5);
}

#[test]
fn resolved_tolerance_never_exceeds_the_cap() {
    let schedule = working(&resolver(), "ana", "2026-03-16");
    assert_eq!(schedule.tolerance_minutes, 10);
}

#[test]
fn undefined_preset_falls_through() {
    let r = ScheduleResolver::new(Policy::default(), None).with_employee(
        "ana",
        EmployeeProfile {
            expected_start: Some("08:30".into()),
            expected_end: Some("17:30".into()),
            presets: vec![PresetAssignment {
                preset: "missing".into(),
                from: None,
                until: None,
            }],
            ..EmployeeProfile::default()
        },
    );

    let schedule = working(&r, "ana", "2026-03-16");
    assert_eq!(schedule.source, ScheduleSource::Employee);
    assert_eq!(schedule.tolerance_minutes, 0);
}

#[test]
fn nothing_to_resolve_is_an_error() {
    let r = ScheduleResolver::new(Policy::default(), None);
    let err = r.resolve("ana", day("2026-03-16")).unwrap_err();
    assert!(matches!(err, AppError::ScheduleNotFound { .. }));
}

fn weekly_resolver() -> ScheduleResolver {
    // 2026-03-06 is a Friday, 2026-03-07 a Saturday
    ScheduleResolver::new(Policy::default(), Some(ScheduleTimes::new("09:00", "18:00")))
        .with_weekly(
            WeeklySchedule::weekends_off().set(Weekday::Fri, DaySchedule::working("09:00", "15:00")),
        )
        .with_employee(
            "ana",
            EmployeeProfile {
                expected_start: Some("08:00".into()),
                expected_end: Some("17:00".into()),
                weekly_schedule: WeeklySchedule::default()
                    .set(Weekday::Sat, DaySchedule::working("10:00", "14:00"))
                    .set(Weekday::Wed, DaySchedule::off()),
                ..EmployeeProfile::default()
            },
        )
}

#[test]
fn weekly_schedules_resolve_by_weekday() {
    let r = weekly_resolver();

    let friday = working(&r, "bob", "2026-03-06");
    assert_eq!(friday.source, ScheduleSource::CompanyWeekly);
    assert_eq!(friday.span_minutes(), 360);

    let monday = working(&r, "bob", "2026-03-02");
    assert_eq!(monday.source, ScheduleSource::CompanyDefault);

    // the employee's own times beat the company weekday
    let ana_friday = working(&r, "ana", "2026-03-06");
    assert_eq!(ana_friday.source, ScheduleSource::Employee);

    let ana_saturday = working(&r, "ana", "2026-03-07");
    assert_eq!(ana_saturday.source, ScheduleSource::EmployeeWeekly);
    assert_eq!(ana_saturday.start_minute(), 10 * 60);
}

#[test]
fn days_off_resolve_to_no_schedule() {
    let r = weekly_resolver();

    assert_eq!(r.resolve("bob", day("2026-03-07")).unwrap(), None);
    assert_eq!(r.resolve("bob", day("2026-03-08")).unwrap(), None);
    assert_eq!(r.resolve("ana", day("2026-03-04")).unwrap(), None);
    assert!(r.resolve("ana", day("2026-03-08")).unwrap().is_none());
}

#[test]
fn day_off_is_never_absent() {
    let report = Core::aggregate_batch(&[], &[("bob".to_string(), day("2026-03-07"))], &weekly_resolver());

    assert!(report.failures.is_empty());
    let saturday = &report.summaries[0];
    assert_eq!(saturday.expected_minutes, 0);
    assert_eq!(saturday.status, DayStatus::Normal);
    assert_eq!(saturday.balance_minutes, 0);
}

#[test]
fn full_weekday_attendance_balances_the_month() {
    let r = ScheduleResolver::new(Policy::default(), Some(ScheduleTimes::new("09:00", "18:00")))
        .with_weekly(WeeklySchedule::weekends_off());
    let days: Vec<(String, NaiveDate)> = all_days_of_month(2026, 3)
        .into_iter()
        .map(|d| ("ana".to_string(), d))
        .collect();

    let mut rows = Vec::new();
    for (_, d) in &days {
        if matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        rows.push(raw(&format!("in-{d}"), "ana", &format!("{d} 09:00"), Some("entry")));
        rows.push(raw(&format!("out-{d}"), "ana", &format!("{d} 18:00"), Some("exit")));
    }

    let report = Core::aggregate_batch(&rows, &days, &r);
    let month = rollup("ana", 2026, 3, &report.summaries);

    assert!(report.failures.is_empty());
    assert_eq!(month.days_worked, 22);
    assert_eq!(month.absences, 0);
    assert_eq!(month.expected_minutes, 22 * 540);
    assert_eq!(month.balance_minutes, 0);
    assert_eq!(month.status, MonthStatus::Balanced);
}

fn raw(id: &str, employee: &str, timestamp: &str, kind: Option<&str>) -> RawClockEvent {
    RawClockEvent {
        id: id.into(),
        employee_id: employee.into(),
        timestamp: timestamp.into(),
        kind: kind.map(str::to_string),
        capture_method: Some("manual".into()),
        status: Some("active".into()),
        justification: None,
        supersedes_id: None,
        superseded_by_id: None,
        tolerance_minutes: None,
        created_at: String::new(),
    }
}

#[test]
fn batch_keeps_going_past_malformed_rows() {
    let rows = vec![
        raw("a1", "ana", "2026-03-02 09:00", Some("entry")),
        raw("a2", "ana", "2026-03-02 18:00", Some("exit")),
        raw("a3", "ana", "2026-03-02 12:00", None),
        raw("b1", "bob", "2026-03-02 09:00", Some("entry")),
        raw("b2", "bob", "2026-03-02 18:00", Some("exit")),
    ];
    let days = vec![
        ("ana".to_string(), day("2026-03-02")),
        ("bob".to_string(), day("2026-03-02")),
    ];

    let report = Core::aggregate_batch(&rows, &days, &resolver());

    assert_eq!(report.summaries.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        AppError::MalformedEvent { .. }
    ));

    let ana = report.summary_for("ana", day("2026-03-02")).expect("ana");
    assert!(ana.degraded);
    assert_eq!(ana.worked_minutes, 540);
    assert_eq!(ana.event_count, 2);

    let bob = report.summary_for("bob", day("2026-03-02")).expect("bob");
    assert!(!bob.degraded);
    assert_eq!(bob.status, DayStatus::Normal);
}

#[test]
fn batch_reports_missing_schedule_and_summarises_anyway() {
    let rows = vec![
        raw("a1", "ana", "2026-03-02 09:00", Some("entry")),
        raw("a2", "ana", "2026-03-02 17:00", Some("exit")),
    ];
    let days = vec![("ana".to_string(), day("2026-03-02"))];
    let r = ScheduleResolver::new(Policy::default(), None);

    let report = Core::aggregate_batch(&rows, &days, &r);

    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        AppError::ScheduleNotFound { .. }
    ));
    let summary = &report.summaries[0];
    assert_eq!(summary.expected_minutes, 0);
    assert_eq!(summary.worked_minutes, 480);
    assert!(summary.schedule.is_none());
    assert!(summary.classifications.is_empty());
}

#[test]
fn monthly_rollup_sums_days() {
    let schedule = office_schedule(10);
    let policy = Policy::default();
    let d1 = Core::aggregate(
        "emp-1",
        day("2026-03-02"),
        &[
            entry("e1", "2026-03-02 09:00"),
            exit("x1", "2026-03-02 18:30"),
        ],
        Some(&schedule),
        &policy,
    );
    let d2 = Core::aggregate(
        "emp-1",
        day("2026-03-03"),
        &[
            entry("e2", "2026-03-03 09:20"),
            exit("x2", "2026-03-03 18:00"),
        ],
        Some(&schedule),
        &policy,
    );
    let d3 = Core::aggregate("emp-1", day("2026-03-04"), &[], Some(&schedule), &policy);
    let other_month = Core::aggregate("emp-1", day("2026-04-01"), &[], Some(&schedule), &policy);

    let month = rollup("emp-1", 2026, 3, &[d1, d2, d3, other_month]);

    assert_eq!(month.month, "2026-03");
    assert_eq!(month.expected_minutes, 3 * 540);
    assert_eq!(month.worked_minutes, 570 + 520);
    assert_eq!(month.overtime_minutes, 20);
    assert_eq!(month.delay_minutes, 10);
    assert_eq!(month.days_worked, 2);
    assert_eq!(month.absences, 1);
    assert_eq!(month.days_late, 1);
    assert_eq!(month.days_overtime, 1);
    assert_eq!(month.status, MonthStatus::Negative);
}
