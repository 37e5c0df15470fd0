use std::collections::BTreeMap;

use log::debug;

use crate::payroll::WorkHours;
use crate::time::{Date, TimeStamp};

/// A single recorded work interval on one calendar day.
///
/// The worked hours are derived from the start and end time on
/// construction, so they can never disagree with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkInterval {
    date: Date,
    start: TimeStamp,
    end: TimeStamp,
    hours: WorkHours,
}

impl WorkInterval {
    #[must_use]
    pub fn new(date: Date, start: TimeStamp, end: TimeStamp) -> Self {
        Self {
            date,
            start,
            end,
            hours: WorkHours::between(start, end),
        }
    }

    pub const fn date(&self) -> Date {
        self.date
    }

    pub const fn start(&self) -> TimeStamp {
        self.start
    }

    pub const fn end(&self) -> TimeStamp {
        self.end
    }

    pub const fn hours(&self) -> WorkHours {
        self.hours
    }
}

/// All recorded work intervals, at most one per calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: BTreeMap<Date, WorkInterval>,
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the interval, replacing any interval already recorded for
    /// the same date. The replaced interval is returned.
    pub fn insert(&mut self, interval: WorkInterval) -> Option<WorkInterval> {
        let replaced = self.entries.insert(interval.date(), interval);

        if replaced.is_some() {
            debug!("replacing the work entry for {}", interval.date());
        }

        replaced
    }

    /// Removes the interval recorded for `date`, if there is one.
    pub fn remove(&mut self, date: Date) -> Option<WorkInterval> {
        self.entries.remove(&date)
    }

    #[must_use]
    pub fn get(&self, date: Date) -> Option<&WorkInterval> {
        self.entries.get(&date)
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all intervals in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkInterval> {
        self.entries.values()
    }

    #[must_use]
    pub fn total_hours(&self) -> WorkHours {
        self.iter().map(WorkInterval::hours).sum()
    }
}
