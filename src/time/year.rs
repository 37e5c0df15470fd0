use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::{Month, WeekDay};
use crate::{iter_const, unreachable_unchecked};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make sense to go past this date.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    /// The number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// The number of days in this year that come before the first day of `month`.
    #[must_use]
    pub(super) const fn days_before_month(&self, month: Month) -> usize {
        let mut result = 0;

        iter_const!(for m in 1,..month.as_usize() => {
            result += self.number_of_days_in_month(Month::new(m));
        });

        result
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (year_ref, _month_ref, day_ref, week_day_ref) = Self::BASE_DATE;

        let days = self.days_since(year_ref) + self.days_before_month(month) + day - day_ref;

        week_day_ref.add_days(days)
    }

    /// Returns the number of days that have passed since `other`.
    ///
    /// `(other + self.days_since(other)) == self`
    const fn days_since(&self, other: Self) -> usize {
        debug_assert!(self.as_usize() >= other.as_usize());

        let mut result = 0;
        iter_const!(for year in other.as_usize(),..self.as_usize() => {
            result += Year::new(year).days();
        });

        result
    }

    pub(super) const fn days_since_base_date(&self) -> usize {
        self.days_since(Self::BASE_DATE.0)
    }

    pub(super) const fn from_days_since_base_date(days: usize) -> Self {
        // Approximate the years upper/lower bounds:
        let lower_year = days / 366;
        let upper_year = days / 365;

        iter_const!(for year in lower_year,..upper_year + 1 => {
            let this_year = Year::new(year);
            let next_year = this_year.next();

            if this_year.days_since_base_date() <= days && next_year.days_since_base_date() > days {
                return this_year;
            }
        });

        unreachable_unchecked!("the year should always be found!")
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        Self(self.0 - 1)
    }
}

impl From<usize> for Year {
    fn from(year: usize) -> Self {
        Self::new(year)
    }
}

impl From<Year> for usize {
    fn from(year: Year) -> Self {
        year.as_usize()
    }
}
