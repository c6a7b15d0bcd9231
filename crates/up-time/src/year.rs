//! `Year`: a calendar year inside the supported range.

use crate::date::Date;
use up_core::errors::{Error, Result};

/// A calendar year in `2000..=2100`, the range the persistence layer accepts.
///
/// Holding a `Year` means every date of that year is representable, so the
/// holiday and quota computations taking one are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u16"))]
pub struct Year(u16);

impl Year {
    /// First supported year.
    pub const MIN: Year = Year(2000);

    /// Last supported year.
    pub const MAX: Year = Year(2100);

    /// Validate `year` against the supported range.
    pub fn new(year: i64) -> Result<Self> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&year) {
            Ok(Year(year as u16))
        } else {
            Err(Error::InvalidYear(year.to_string()))
        }
    }

    /// The year as a plain number.
    pub fn get(self) -> u16 {
        self.0
    }

    /// January 1 of this year.
    pub fn first_day(self) -> Date {
        Date::from_ymd_unchecked(self.0, 1, 1)
    }

    /// December 31 of this year.
    pub fn last_day(self) -> Date {
        Date::from_ymd_unchecked(self.0, 12, 31)
    }

    /// The date `month`/`day` in this year, if it exists.
    pub fn date(self, month: u8, day: u8) -> Result<Date> {
        Date::from_ymd(self.0, month, day)
    }

    /// Whether `date` falls inside this year.
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.0
    }

    /// Iterate over every date of the year in ascending order.
    pub fn days(self) -> impl Iterator<Item = Date> + Clone {
        self.first_day().iter_through(self.last_day())
    }
}

impl TryFrom<i64> for Year {
    type Error = Error;

    fn try_from(year: i64) -> Result<Self> {
        Year::new(year)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> u16 {
        year.0
    }
}

impl std::str::FromStr for Year {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidYear(s.to_string()))?;
        Year::new(n)
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
