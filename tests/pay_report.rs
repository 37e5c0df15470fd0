//! Tests the full path from a sheet file to the computed pay report.

use wage_sheet::payroll::{Money, PayrollSummary, WorkHours};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_empty_sheet() {
    let summary = common::summarize(&common::make_sheet(10_000.0, &[]));

    assert_eq!(
        summary,
        PayrollSummary::new(WorkHours::ZERO, 0, Money::ZERO, Money::ZERO, Money::ZERO, 0, 0)
    );
}

#[test]
fn test_single_monday_below_threshold() {
    // one 9 hour monday is the only entry of its week, so the week stays
    // below the 15 hour threshold and earns no holiday pay
    let sheet = common::make_sheet(10_000.0, &[("2026-08-03", "09:00", "18:00")]);

    assert_eq!(
        common::summarize(&sheet),
        PayrollSummary::new(
            WorkHours::from_hours(9),
            1,
            Money::new(90_000),
            Money::ZERO,
            Money::new(90_000),
            0,
            1,
        )
    );
}

#[test]
fn test_full_week_earns_one_average_day() {
    // monday until friday, 6 hours each: 30 hours over 5 days in one week
    let sheet = common::make_sheet(
        10_000.0,
        &[
            ("2026-08-03", "09:00", "15:00"),
            ("2026-08-04", "09:00", "15:00"),
            ("2026-08-05", "09:00", "15:00"),
            ("2026-08-06", "09:00", "15:00"),
            ("2026-08-07", "09:00", "15:00"),
        ],
    );

    assert_eq!(
        common::summarize(&sheet),
        PayrollSummary::new(
            WorkHours::from_hours(30),
            5,
            Money::new(300_000),
            Money::new(60_000),
            Money::new(360_000),
            1,
            1,
        )
    );
}

#[test]
fn test_night_shift_crosses_midnight() {
    let sheet = common::make_sheet(10_000.0, &[("2026-08-03", "22:00", "06:00")]);
    let summary = common::summarize(&sheet);

    assert_eq!(summary.total_hours(), WorkHours::from_hours(8));
    assert_eq!(summary.basic_pay(), Money::new(80_000));
}

#[test]
fn test_week_crosses_month_boundary() {
    // monday 2026-08-31 and tuesday 2026-09-01 share a week, together they
    // pass the threshold
    let sheet = common::make_sheet(
        10_000.0,
        &[
            ("2026-08-31", "09:00", "18:00"),
            ("2026-09-01", "09:00", "18:00"),
        ],
    );
    let summary = common::summarize(&sheet);

    assert_eq!(summary.total_weeks(), 1);
    assert_eq!(summary.eligible_weeks(), 1);
    // 18 hours over 2 days make a 9 hour average
    assert_eq!(summary.weekly_holiday_pay(), Money::new(90_000));
    assert_eq!(summary.total_pay(), Money::new(270_000));
}

#[test]
fn test_fifteen_hour_boundary() {
    // exactly 15 hours qualify
    let at_threshold = common::make_sheet(
        10_000.0,
        &[
            ("2026-08-03", "10:00", "15:00"),
            ("2026-08-04", "10:00", "15:00"),
            ("2026-08-05", "10:00", "15:00"),
        ],
    );
    assert_eq!(common::summarize(&at_threshold).eligible_weeks(), 1);

    // 14.82 + 0.17 = 14.99 hours do not
    let below_threshold = common::make_sheet(
        10_000.0,
        &[
            ("2026-08-03", "09:00", "23:49"),
            ("2026-08-04", "10:00", "10:10"),
        ],
    );
    let summary = common::summarize(&below_threshold);

    assert_eq!(summary.total_hours(), WorkHours::from_centis(1499));
    assert_eq!(summary.eligible_weeks(), 0);
    assert_eq!(summary.weekly_holiday_pay(), Money::ZERO);
}

#[test]
fn test_multiple_weeks_accumulate_holiday_pay() {
    // two eligible weeks with different daily averages and one short week
    let sheet = common::make_sheet(
        10_000.0,
        &[
            // week of 2026-08-02: 16 hours over 2 days, 8 hour average
            ("2026-08-03", "09:00", "17:00"),
            ("2026-08-04", "09:00", "17:00"),
            // week of 2026-08-09: 18 hours over 3 days, 6 hour average
            ("2026-08-10", "09:00", "15:00"),
            ("2026-08-11", "09:00", "15:00"),
            ("2026-08-12", "09:00", "15:00"),
            // week of 2026-08-16: 4 hours, not eligible
            ("2026-08-17", "09:00", "13:00"),
        ],
    );

    assert_eq!(
        common::summarize(&sheet),
        PayrollSummary::new(
            WorkHours::from_hours(38),
            6,
            Money::new(380_000),
            // 8 hours + 6 hours of average pay
            Money::new(140_000),
            Money::new(520_000),
            2,
            3,
        )
    );
}

#[test]
fn test_default_wage_applies() {
    let summary = common::summarize(concat!(
        //
        "[entry.2026-08-03]\n",
        "start = \"09:00\"\n",
        "end = \"10:00\"\n",
    ));

    assert_eq!(summary.basic_pay(), Money::new(10_300));
}

#[test]
fn test_summary_as_json() {
    let sheet = common::make_sheet(10_000.0, &[("2026-08-03", "09:00", "18:00")]);
    let config = common::make_config(&sheet);

    let json = config.to_summary_json().expect("summary should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json should be valid");

    assert_eq!(value["total_hours"], "9.00");
    assert_eq!(value["total_days"], 1);
    assert_eq!(value["basic_pay"], 90_000);
    assert_eq!(value["weekly_holiday_pay"], 0);
    assert_eq!(value["total_pay"], 90_000);
    assert_eq!(value["eligible_weeks"], 0);
    assert_eq!(value["total_weeks"], 1);
}
