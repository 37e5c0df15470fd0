use serde::Serialize;

use crate::payroll::{HourlyWage, Money, Schedule, WeekBucket, WorkHours};

/// The derived pay report for a schedule and an hourly wage.
///
/// A summary is a plain value: it is recomputed from scratch whenever the
/// schedule or the wage changes and carries no state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollSummary {
    total_hours: WorkHours,
    total_days: usize,
    basic_pay: Money,
    weekly_holiday_pay: Money,
    total_pay: Money,
    eligible_weeks: usize,
    total_weeks: usize,
}

impl PayrollSummary {
    #[must_use]
    pub fn new(
        total_hours: WorkHours,
        total_days: usize,
        basic_pay: Money,
        weekly_holiday_pay: Money,
        total_pay: Money,
        eligible_weeks: usize,
        total_weeks: usize,
    ) -> Self {
        Self {
            total_hours,
            total_days,
            basic_pay,
            weekly_holiday_pay,
            total_pay,
            eligible_weeks,
            total_weeks,
        }
    }

    pub const fn total_hours(&self) -> WorkHours {
        self.total_hours
    }

    pub const fn total_days(&self) -> usize {
        self.total_days
    }

    pub const fn basic_pay(&self) -> Money {
        self.basic_pay
    }

    pub const fn weekly_holiday_pay(&self) -> Money {
        self.weekly_holiday_pay
    }

    pub const fn total_pay(&self) -> Money {
        self.total_pay
    }

    pub const fn eligible_weeks(&self) -> usize {
        self.eligible_weeks
    }

    pub const fn total_weeks(&self) -> usize {
        self.total_weeks
    }
}

/// Computes the pay report for the given schedule and wage.
///
/// The basic pay covers every worked hour. On top of that, every week with
/// at least 15 worked hours earns one day of average pay as the weekly
/// holiday allowance. Both components are rounded to whole currency units
/// on their own and the total is the sum of the rounded parts; this order
/// is part of the reported numbers and must not be changed.
#[must_use]
pub fn calculate(schedule: &Schedule, wage: HourlyWage) -> PayrollSummary {
    let total_hours = schedule.total_hours();
    let total_days = schedule.len();
    let basic_pay = Money::from_rounded(total_hours.as_f64() * wage.rate());

    let buckets = WeekBucket::collect(schedule);

    let mut holiday_pay = 0.0;
    let mut eligible_weeks = 0;

    for bucket in buckets.values() {
        if bucket.is_eligible() {
            eligible_weeks += 1;
            holiday_pay += bucket.daily_average() * wage.rate();
        }
    }

    let weekly_holiday_pay = Money::from_rounded(holiday_pay);

    PayrollSummary {
        total_hours,
        total_days,
        basic_pay,
        weekly_holiday_pay,
        total_pay: basic_pay + weekly_holiday_pay,
        eligible_weeks,
        total_weeks: buckets.len(),
    }
}
