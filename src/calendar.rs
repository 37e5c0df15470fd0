use crate::time::{Date, InvalidDate, Month, WeekDay, Year};

/// The month a calendar view is currently looking at.
///
/// Navigation only moves this cursor; it never touches the schedule. The
/// day component is pinned to the first of the month, so stepping through
/// months can never overflow into an unintended one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: Year,
    month: Month,
}

impl MonthCursor {
    #[must_use]
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Moves the cursor one month back, wrapping into the previous year.
    pub fn prev(&mut self) {
        if self.month.is_eq(&Month::January) {
            self.year = self.year.prev();
        }

        self.month = self.month.prev();
    }

    /// Moves the cursor one month forward, wrapping into the next year.
    pub fn next(&mut self) {
        if self.month.is_eq(&Month::December) {
            self.year = self.year.next();
        }

        self.month = self.month.next();
    }

    /// The week day of the first day in the month, which is the number of
    /// blank leading cells in a Sunday-based calendar grid.
    #[must_use]
    pub const fn first_week_day(&self) -> WeekDay {
        self.year.week_day(self.month, 1)
    }

    #[must_use]
    pub const fn days(&self) -> usize {
        self.year.number_of_days_in_month(self.month)
    }

    /// Resolves a day number within the displayed month to a date.
    pub fn select(&self, day: usize) -> Result<Date, InvalidDate> {
        Date::new(self.year, self.month, day)
    }

    /// Iterates over all dates of the displayed month.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        (1..=self.days()).filter_map(|day| self.select(day).ok())
    }
}

impl From<Date> for MonthCursor {
    fn from(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }
}
