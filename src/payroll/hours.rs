use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{ser, Serialize};

use crate::time::TimeStamp;

/// An amount of worked time, stored as a whole number of centi-hours.
///
/// Work entries keep their duration with two decimal places, so storing
/// centi-hours makes sums and the 15-hour eligibility comparison exact.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkHours(u32);

impl WorkHours {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_centis(centis: u32) -> Self {
        Self(centis)
    }

    #[must_use]
    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * 100)
    }

    /// Converts a number of minutes, rounding to the nearest centi-hour.
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(((minutes as u32) * 100 + 30) / 60)
    }

    /// The duration between two wall-clock times.
    ///
    /// An end before the start is a shift that crosses midnight, so a full
    /// day is added to the end before taking the difference.
    #[must_use]
    pub fn between(start: TimeStamp, end: TimeStamp) -> Self {
        let start = start.as_minutes();
        let mut end = end.as_minutes();

        if end < start {
            end += 24 * 60;
        }

        Self::from_minutes(end - start)
    }

    #[must_use]
    pub const fn centis(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for WorkHours {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl AddAssign for WorkHours {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for WorkHours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for WorkHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for WorkHours {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
