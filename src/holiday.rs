//! Holiday providers and business-day logic.
//!
//! A [`HolidayCalendar`] answers "which dates are holidays in year N".
//! [`UsFederalCalendar`] is the built-in provider; [`FixedHolidays`] wraps an
//! explicit set so callers can bring their own.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{JUNETEENTH_FIRST_YEAR, MLK_DAY_FIRST_YEAR};
use crate::prelude::*;
use crate::{DateError, YmdDate};

/// Source of holiday dates, queried one year at a time.
pub trait HolidayCalendar {
    /// All holidays falling inside `year`.
    fn holidays_for_year(&self, year: u16) -> BTreeSet<YmdDate>;

    fn is_holiday(&self, date: &YmdDate) -> bool {
        self.holidays_for_year(date.year()).contains(date)
    }

    /// A weekday that is not a holiday.
    fn is_business_day(&self, date: &YmdDate) -> bool {
        date.is_weekday() && !self.is_holiday(date)
    }
}

impl<C: HolidayCalendar + ?Sized> HolidayCalendar for &C {
    fn holidays_for_year(&self, year: u16) -> BTreeSet<YmdDate> {
        (**self).holidays_for_year(year)
    }

    fn is_holiday(&self, date: &YmdDate) -> bool {
        (**self).is_holiday(date)
    }
}

/// The eleven US federal holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum FederalHoliday {
    #[display(fmt = "New Year's Day")]
    NewYearsDay,
    #[display(fmt = "Martin Luther King Jr. Day")]
    MartinLutherKingJrDay,
    #[display(fmt = "Washington's Birthday")]
    WashingtonsBirthday,
    #[display(fmt = "Memorial Day")]
    MemorialDay,
    #[display(fmt = "Juneteenth National Independence Day")]
    Juneteenth,
    #[display(fmt = "Independence Day")]
    IndependenceDay,
    #[display(fmt = "Labor Day")]
    LaborDay,
    #[display(fmt = "Columbus Day")]
    ColumbusDay,
    #[display(fmt = "Veterans Day")]
    VeteransDay,
    #[display(fmt = "Thanksgiving Day")]
    ThanksgivingDay,
    #[display(fmt = "Christmas Day")]
    ChristmasDay,
}

impl FederalHoliday {
    /// Every holiday in calendar order
    pub const ALL: [Self; 11] = [
        Self::NewYearsDay,
        Self::MartinLutherKingJrDay,
        Self::WashingtonsBirthday,
        Self::MemorialDay,
        Self::Juneteenth,
        Self::IndependenceDay,
        Self::LaborDay,
        Self::ColumbusDay,
        Self::VeteransDay,
        Self::ThanksgivingDay,
        Self::ChristmasDay,
    ];

    /// Holidays pinned to a month and day rather than a weekday rule.
    /// Only these move when they land on a weekend.
    pub const fn is_fixed_date(self) -> bool {
        matches!(
            self,
            Self::NewYearsDay
                | Self::Juneteenth
                | Self::IndependenceDay
                | Self::VeteransDay
                | Self::ChristmasDay
        )
    }

    /// The nominal date in `year`, or `None` before the holiday existed.
    pub fn actual_date(self, year: i32) -> Option<NaiveDate> {
        match self {
            Self::NewYearsDay => NaiveDate::from_ymd_opt(year, 1, 1),
            Self::MartinLutherKingJrDay => (year >= i32::from(MLK_DAY_FIRST_YEAR))
                .then(|| NaiveDate::from_weekday_of_month_opt(year, 1, Weekday::Mon, 3))
                .flatten(),
            Self::WashingtonsBirthday => NaiveDate::from_weekday_of_month_opt(year, 2, Weekday::Mon, 3),
            Self::MemorialDay => NaiveDate::from_ymd_opt(year, 5, 31)
                .and_then(|end| last_weekday_on_or_before(end, Weekday::Mon)),
            Self::Juneteenth => (year >= i32::from(JUNETEENTH_FIRST_YEAR))
                .then(|| NaiveDate::from_ymd_opt(year, 6, 19))
                .flatten(),
            Self::IndependenceDay => NaiveDate::from_ymd_opt(year, 7, 4),
            Self::LaborDay => NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1),
            Self::ColumbusDay => NaiveDate::from_weekday_of_month_opt(year, 10, Weekday::Mon, 2),
            Self::VeteransDay => NaiveDate::from_ymd_opt(year, 11, 11),
            Self::ThanksgivingDay => NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Thu, 4),
            Self::ChristmasDay => NaiveDate::from_ymd_opt(year, 12, 25),
        }
    }

    /// The day off in lieu: fixed-date holidays on a Saturday move to
    /// Friday, on a Sunday to Monday. May land in the adjacent year.
    pub fn observed_date(self, year: i32) -> Option<NaiveDate> {
        let actual = self.actual_date(year)?;
        if self.is_fixed_date() {
            nearest_workday(actual)
        } else {
            Some(actual)
        }
    }
}

fn nearest_workday(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_sub_days(Days::new(1)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

fn last_weekday_on_or_before(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let back = (date.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(back)))
}

/// US federal holidays with weekend observance.
///
/// A year's set holds the observed dates inside that year, so when
/// New Year's Day falls on a Saturday its observed Friday belongs to the
/// previous year's set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsFederalCalendar;

impl UsFederalCalendar {
    /// Observed holidays in `year` with their names, in date order.
    pub fn named_holidays(&self, year: u16) -> Vec<(FederalHoliday, YmdDate)> {
        let target = i32::from(year);
        let mut named: Vec<(FederalHoliday, YmdDate)> = (target - 1..=target + 1)
            .flat_map(|y| {
                FederalHoliday::ALL
                    .into_iter()
                    .filter_map(move |holiday| holiday.observed_date(y).map(|date| (holiday, date)))
            })
            .filter(|(_, date)| date.year() == target)
            .filter_map(|(holiday, date)| YmdDate::try_from(date).ok().map(|date| (holiday, date)))
            .collect();
        named.sort_by_key(|(_, date)| *date);
        named
    }
}

impl HolidayCalendar for UsFederalCalendar {
    fn holidays_for_year(&self, year: u16) -> BTreeSet<YmdDate> {
        trace!(year, "computing US federal holidays");
        self.named_holidays(year).into_iter().map(|(_, date)| date).collect()
    }
}

/// One entry of a caller-supplied holiday list: canonical text or a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayEntry<'a> {
    Text(&'a str),
    Date(YmdDate),
}

impl HolidayEntry<'_> {
    /// Normalizes the entry through the same parser as construction.
    ///
    /// # Errors
    /// Returns `DateError::Format` for text that isn't a canonical date.
    pub fn resolve(self) -> Result<YmdDate, DateError> {
        match self {
            Self::Text(text) => text.parse(),
            Self::Date(date) => Ok(date),
        }
    }
}

impl<'a> From<&'a str> for HolidayEntry<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for HolidayEntry<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl From<YmdDate> for HolidayEntry<'_> {
    fn from(date: YmdDate) -> Self {
        Self::Date(date)
    }
}

impl From<&YmdDate> for HolidayEntry<'_> {
    fn from(date: &YmdDate) -> Self {
        Self::Date(*date)
    }
}

/// A provider backed by an explicit set of dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, From, Into)]
pub struct FixedHolidays(BTreeSet<YmdDate>);

impl FixedHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from mixed entries, ignoring duplicates.
    ///
    /// # Errors
    /// Returns `DateError::Format` for the first malformed text entry.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, DateError>
    where
        I: IntoIterator,
        I::Item: Into<HolidayEntry<'a>>,
    {
        entries
            .into_iter()
            .map(|entry| {
                let entry: HolidayEntry<'a> = entry.into();
                entry.resolve()
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    /// Adds a date, returning false if it was already present
    pub fn insert(&mut self, date: YmdDate) -> bool {
        self.0.insert(date)
    }

    pub fn contains(&self, date: &YmdDate) -> bool {
        self.0.contains(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<YmdDate> for FixedHolidays {
    fn from_iter<T: IntoIterator<Item = YmdDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl HolidayCalendar for FixedHolidays {
    fn holidays_for_year(&self, year: u16) -> BTreeSet<YmdDate> {
        self.0.iter().filter(|date| date.year() == year).copied().collect()
    }

    fn is_holiday(&self, date: &YmdDate) -> bool {
        self.contains(date)
    }
}

impl YmdDate {
    /// Whether this date equals any entry of `holidays`.
    ///
    /// Entries may mix canonical strings and dates; duplicates are fine.
    /// Every string entry is validated, not just those before a match.
    ///
    /// # Errors
    /// Returns `DateError::Format` if any string entry is malformed.
    pub fn is_holiday<'a, I>(&self, holidays: I) -> Result<bool, DateError>
    where
        I: IntoIterator,
        I::Item: Into<HolidayEntry<'a>>,
    {
        let mut found = false;
        for entry in holidays {
            let entry: HolidayEntry<'a> = entry.into();
            found |= entry.resolve()? == *self;
        }
        Ok(found)
    }

    /// Whether this date is an observed US federal holiday
    pub fn is_us_federal_holiday(&self) -> bool {
        UsFederalCalendar.is_holiday(self)
    }

    /// Which US federal holiday is observed on this date, if any
    pub fn us_federal_holiday(&self) -> Option<FederalHoliday> {
        UsFederalCalendar
            .named_holidays(self.year())
            .into_iter()
            .find(|(_, date)| date == self)
            .map(|(holiday, _)| holiday)
    }

    /// The next weekday that is not a US federal holiday.
    ///
    /// Only weekends and [`UsFederalCalendar`] are honored; use
    /// [`next_business_day_in`](Self::next_business_day_in) to account for
    /// other holidays.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if no business day exists before 9999-12-31.
    pub fn next_business_day(&self) -> Result<Self, DateError> {
        self.next_business_day_in(&UsFederalCalendar)
    }

    /// The next business day according to `calendar`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if no business day exists before 9999-12-31.
    pub fn next_business_day_in<C>(&self, calendar: &C) -> Result<Self, DateError>
    where
        C: HolidayCalendar + ?Sized,
    {
        let mut candidate = self.tomorrow()?;
        while !calendar.is_business_day(&candidate) {
            debug!(date = %candidate, "skipping non-business day");
            candidate = candidate.tomorrow()?;
        }
        Ok(candidate)
    }
}
