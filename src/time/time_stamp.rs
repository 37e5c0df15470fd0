use core::fmt;
use core::str::FromStr;

use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::StrExt;

#[macro_export]
macro_rules! time_stamp {
    ($hour:literal : $minute:literal) => {{
        static_assertions::const_assert!($hour <= 23);
        static_assertions::const_assert!($minute <= 59);

        unsafe { $crate::time::TimeStamp::new_unchecked($hour, $minute) }
    }};
}

/// A wall-clock time of day with minute precision.
///
/// Parsing is strict: `HH:MM` with an hour of 0 to 23 and a minute of 0
/// to 59. A malformed time must be rejected here, at the input boundary,
/// so that it can never reach the aggregated sums.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidTime {
    #[error("\"{input}\" is not a valid time. Expected format: \"HH:MM\"")]
    ParseTimeError { input: String },
    #[error("time is out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u8, minute: u8 },
}

impl TimeStamp {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime::OutOfRange { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    // u16::MAX is 2^16 - 1 = 65535
    #[must_use]
    pub(crate) const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn parse_or_err(input: &str, string: &str) -> Result<u8, InvalidTime> {
    input
        .parse::<u8>()
        .map_err(|_| InvalidTime::ParseTimeError {
            input: string.to_string(),
        })
}

impl FromStr for TimeStamp {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(hour), Some(minute)] = string.split_exact::<2>(":") {
            Self::new(parse_or_err(hour, string)?, parse_or_err(minute, string)?)
        } else {
            Err(InvalidTime::ParseTimeError {
                input: string.to_string(),
            })
        }
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
