use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Returns the date of the last day as a date in the month.
    #[must_use]
    pub const fn last_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: year.number_of_days_in_month(month),
        }
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: u16) -> Self {
        debug_assert!(ordinal != 0 && ordinal as usize <= year.days());

        // this is in O(1) as the number of months is bounded by 12
        let mut month = Month::January;
        while !month.is_eq(&Month::December)
            && year.days_before_month(month) + year.number_of_days_in_month(month)
                < ordinal as usize
        {
            month = month.next();
        }

        let day = ordinal as usize - year.days_before_month(month);

        Self { year, month, day }
    }

    #[must_use]
    const fn from_days_since_base_date(days: usize) -> Self {
        let year = Year::from_days_since_base_date(days);
        // NOTE: +1 because the ordinal of the first day of the year is 1 and not 0
        let ordinal = (days - year.days_since_base_date()) + 1;
        Self::from_ordinal(year, ordinal as u16)
    }

    /// Days between 0000-01-01 and 1970-01-01 in the proleptic gregorian calendar.
    const UNIX_EPOCH_OFFSET: usize = 719_528;

    /// Returns the current date (UTC).
    #[must_use]
    pub fn today() -> Self {
        let days = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() / 86_400)
            .unwrap_or(0) as usize;

        Self::from_days_since_base_date(Self::UNIX_EPOCH_OFFSET + days)
    }
}

impl Date {
    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    /// Returns the Sunday on or before this date, crossing month and year
    /// boundaries where necessary.
    ///
    /// All dates sharing a `week_start` belong to the same payroll week.
    #[must_use]
    pub const fn week_start(&self) -> Self {
        self.sub_days(self.week_day().as_usize())
    }

    #[must_use]
    const fn ordinal(&self) -> u16 {
        (self.year.days_before_month(self.month) + self.day) as u16
    }

    #[must_use]
    const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of the year is 1.
        // when one does not subtract 1, then
        // date!(0000:01:01).days_since_base_date()
        // = 0 + 1 (because ordinal is 1)
        //
        // but this is not correct => one has to subtract 1
        self.year.days_since_base_date() + (self.ordinal() - 1) as usize
    }

    #[must_use]
    pub(crate) const fn add_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal() as usize + days;
        let mut year = self.year();

        while ordinal > year.days() {
            ordinal -= year.days();
            year = year.next();
        }

        Self::from_ordinal(year, ordinal as u16)
    }

    #[must_use]
    pub(crate) const fn sub_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal() as usize;
        let mut year = self.year();

        while ordinal < days {
            year = year.prev();
            ordinal += year.days();
        }

        if ordinal == days {
            year = year.prev();
            ordinal = year.days();
        } else {
            ordinal -= days;
        }

        Self::from_ordinal(year, ordinal as u16)
    }

    /// Returns the number of days that have passed between `self` and `other`.
    ///
    /// `self + self.days_until(other) == other`
    ///
    /// # Panics
    ///
    /// This function assumes that `self` is before `other`.
    /// If this is not the case, it will panic.
    #[must_use]
    pub const fn days_until(&self, other: Self) -> usize {
        other.days_since_base_date() - self.days_since_base_date()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not a valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<usize> for Date {
    type Output = Self;

    fn sub(self, days: usize) -> Self::Output {
        self.sub_days(days)
    }
}

impl AddAssign<usize> for Date {
    fn add_assign(&mut self, days: usize) {
        *self = self.add_days(days);
    }
}

impl SubAssign<usize> for Date {
    fn sub_assign(&mut self, days: usize) {
        *self = *self - days;
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for toml::value::Date {
    fn from(date: Date) -> Self {
        toml::value::Date {
            year: date.year().as_usize() as u16,
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl TryFrom<toml::value::Date> for Date {
    type Error = InvalidDate;

    fn try_from(date: toml::value::Date) -> Result<Self, Self::Error> {
        Self::new(
            Year::new(date.year as usize),
            Month::try_from(date.month as usize).map_err(|_| InvalidDate::ParseDateError {
                input: date.to_string(),
            })?,
            date.day as usize,
        )
    }
}
