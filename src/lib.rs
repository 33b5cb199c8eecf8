//! A validated `YYYY-MM-DD` calendar date with navigation helpers,
//! weekday classification and holiday awareness.
//!
//! ```
//! use ymd_date::YmdDate;
//!
//! let friday: YmdDate = "2024-02-23".parse()?;
//! assert_eq!(friday.next_business_day()?, "2024-02-26");
//! assert_eq!(friday.get_weekday(true), "Fri");
//! # Ok::<(), ymd_date::DateError>(())
//! ```

mod consts;
mod error;
mod holiday;
mod navigation;
mod prelude;
mod types;
mod validate;
mod weekday;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use error::DateError;
pub use holiday::{FederalHoliday, FixedHolidays, HolidayCalendar, HolidayEntry, UsFederalCalendar};
pub use navigation::{MonthUnit, YearUnit};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validate::{is_ymd, is_ymd_date, is_ymd_datetime};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;
use std::str::FromStr;

/// An immutable calendar date in years 1..=9999.
///
/// Always holds a real Gregorian date. Displays as `YYYY-MM-DD`, which is
/// also its serde representation. Ordering is by (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct YmdDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl YmdDate {
    /// Creates a date from numeric components.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` when the
    /// components don't name a real date.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Returns `InvalidYear` if the system clock is outside years 1..=9999.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(Local::now().date_naive())
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Equivalent chrono date.
    pub fn to_date(&self) -> NaiveDate {
        // Components were validated against the same proleptic Gregorian
        // rules chrono uses, so the fallback is unreachable.
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())
            .unwrap_or(NaiveDate::MIN)
    }

    /// Equivalent chrono date-time at midnight.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.to_date().and_time(NaiveTime::MIN)
    }

    /// Orders this date against a string, surfacing malformed input.
    ///
    /// The comparison operators treat a malformed string as unequal and
    /// unordered; use this when that should be an error instead.
    ///
    /// # Errors
    /// Returns `DateError::Format` if `other` is not a canonical date.
    pub fn compare_str(&self, other: &str) -> Result<Ordering, DateError> {
        let other = other.parse::<Self>()?;
        Ok(self.cmp(&other))
    }

    fn parse_str_lossy(other: &str) -> Option<Self> {
        other.parse().ok()
    }
}

impl FromStr for YmdDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || DateError::Format(s.to_owned());
        let (year, month, day) = validate::split_canonical(s).ok_or_else(format_error)?;
        Self::new(year, month, day).map_err(|_| format_error())
    }
}

impl TryFrom<&str> for YmdDate {
    type Error = DateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<NaiveDate> for YmdDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = Year::try_from(date.year())?;
        let month = Month::try_from(date.month())?;
        let day = u8::try_from(date.day()).map_err(|_| DateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: date.day(),
        })?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }
}

/// The time of day is discarded.
impl TryFrom<NaiveDateTime> for YmdDate {
    type Error = DateError;

    fn try_from(datetime: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::try_from(datetime.date())
    }
}

impl From<YmdDate> for NaiveDate {
    fn from(date: YmdDate) -> Self {
        date.to_date()
    }
}

impl TryFrom<(u16, u8, u8)> for YmdDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

// --- comparisons against other date shapes ---

impl PartialEq<NaiveDate> for YmdDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.to_date() == *other
    }
}

impl PartialOrd<NaiveDate> for YmdDate {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        Some(self.to_date().cmp(other))
    }
}

impl PartialEq<NaiveDateTime> for YmdDate {
    fn eq(&self, other: &NaiveDateTime) -> bool {
        self.to_date() == other.date()
    }
}

impl PartialOrd<NaiveDateTime> for YmdDate {
    fn partial_cmp(&self, other: &NaiveDateTime) -> Option<Ordering> {
        Some(self.to_date().cmp(&other.date()))
    }
}

impl PartialEq<str> for YmdDate {
    fn eq(&self, other: &str) -> bool {
        Self::parse_str_lossy(other).is_some_and(|other| *self == other)
    }
}

impl PartialOrd<str> for YmdDate {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Self::parse_str_lossy(other).map(|other| self.cmp(&other))
    }
}

impl PartialEq<&str> for YmdDate {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialOrd<&str> for YmdDate {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        PartialOrd::<str>::partial_cmp(self, *other)
    }
}

impl PartialEq<String> for YmdDate {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialOrd<String> for YmdDate {
    fn partial_cmp(&self, other: &String) -> Option<Ordering> {
        PartialOrd::<str>::partial_cmp(self, other.as_str())
    }
}

impl serde::Serialize for YmdDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for YmdDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
