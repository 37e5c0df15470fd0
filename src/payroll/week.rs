use std::collections::BTreeMap;

use crate::payroll::{Schedule, WorkHours, WorkInterval};
use crate::time::Date;

/// The work recorded within one payroll week, Sunday through Saturday.
///
/// Buckets are rebuilt from the schedule on every calculation, they are
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBucket {
    week_start: Date,
    hours: WorkHours,
    days: usize,
}

impl WeekBucket {
    /// A week qualifies for the holiday allowance from 15 worked hours.
    pub const ELIGIBILITY_THRESHOLD: WorkHours = WorkHours::from_hours(15);

    const fn new(week_start: Date) -> Self {
        Self {
            week_start,
            hours: WorkHours::ZERO,
            days: 0,
        }
    }

    fn add(&mut self, interval: &WorkInterval) {
        // one interval per date, so every interval is a distinct work day
        self.hours += interval.hours();
        self.days += 1;
    }

    /// Groups all schedule entries by the Sunday starting their week.
    #[must_use]
    pub fn collect(schedule: &Schedule) -> BTreeMap<Date, Self> {
        let mut buckets = BTreeMap::new();

        for interval in schedule.iter() {
            let week_start = interval.date().week_start();
            buckets
                .entry(week_start)
                .or_insert_with(|| Self::new(week_start))
                .add(interval);
        }

        buckets
    }

    pub const fn week_start(&self) -> Date {
        self.week_start
    }

    pub const fn hours(&self) -> WorkHours {
        self.hours
    }

    pub const fn days(&self) -> usize {
        self.days
    }

    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.hours >= Self::ELIGIBILITY_THRESHOLD && self.days > 0
    }

    /// The average worked hours per work day in this week.
    #[must_use]
    pub fn daily_average(&self) -> f64 {
        self.hours.as_f64() / self.days as f64
    }
}
