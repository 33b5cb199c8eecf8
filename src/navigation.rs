//! Day, week, month and year navigation.
//!
//! Every operation returns a new [`YmdDate`] and fails with
//! [`DateError::OutOfRange`] instead of leaving years 1..=9999.

use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DAYS_PER_WEEK, DEFAULT_DAYS_PER_MONTH, DEFAULT_DAYS_PER_YEAR, DEFAULT_WEEKS_PER_MONTH,
    DEFAULT_WEEKS_PER_YEAR, MONTHS_PER_YEAR,
};
use crate::{DateError, Year, YmdDate};

/// How [`YmdDate::n_months`] measures one month.
///
/// `Calendar` moves by real calendar months, clamping the day to the end of
/// a shorter target month. `Weeks` and `Days` are fixed-length
/// approximations: four weeks is 28 days, so repeated week-mode jumps drift
/// earlier than the calendar, and 30-day months drift around month ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthUnit {
    /// Exact calendar months
    Calendar,
    /// `per_month` weeks per month
    Weeks { per_month: u32 },
    /// `per_month` days per month
    Days { per_month: u32 },
}

impl MonthUnit {
    /// Four weeks per month
    pub const fn weeks() -> Self {
        Self::Weeks {
            per_month: DEFAULT_WEEKS_PER_MONTH,
        }
    }

    /// Thirty days per month
    pub const fn days() -> Self {
        Self::Days {
            per_month: DEFAULT_DAYS_PER_MONTH,
        }
    }
}

impl Default for MonthUnit {
    fn default() -> Self {
        Self::weeks()
    }
}

/// Parses the single-letter codes `W`, `D` and `M` (case-insensitive).
impl FromStr for MonthUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "W" => Ok(Self::weeks()),
            "D" => Ok(Self::days()),
            "M" => Ok(Self::Calendar),
            _ => Err(DateError::InvalidUnit(s.to_owned())),
        }
    }
}

/// How [`YmdDate::n_years`] measures one year.
///
/// `Calendar` moves by real calendar years (Feb 29 clamps to Feb 28).
/// `Weeks` (52 weeks = 364 days) and `Days` (365 days) ignore leap years and
/// drift from the calendar over several years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearUnit {
    /// Exact calendar years
    Calendar,
    /// `per_year` weeks per year
    Weeks { per_year: u32 },
    /// `per_year` days per year
    Days { per_year: u32 },
}

impl YearUnit {
    /// Fifty-two weeks per year
    pub const fn weeks() -> Self {
        Self::Weeks {
            per_year: DEFAULT_WEEKS_PER_YEAR,
        }
    }

    /// 365 days per year
    pub const fn days() -> Self {
        Self::Days {
            per_year: DEFAULT_DAYS_PER_YEAR,
        }
    }
}

impl Default for YearUnit {
    fn default() -> Self {
        Self::weeks()
    }
}

/// Parses the single-letter codes `W`, `D` and `Y` (case-insensitive).
impl FromStr for YearUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "W" => Ok(Self::weeks()),
            "D" => Ok(Self::days()),
            "Y" => Ok(Self::Calendar),
            _ => Err(DateError::InvalidUnit(s.to_owned())),
        }
    }
}

impl YmdDate {
    /// The following day
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` on 9999-12-31.
    pub fn tomorrow(&self) -> Result<Self, DateError> {
        self.n_days(1)
    }

    /// The previous day
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` on 0001-01-01.
    pub fn yesterday(&self) -> Result<Self, DateError> {
        self.n_days(-1)
    }

    /// Seven days later
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` past 9999-12-31.
    pub fn next_week(&self) -> Result<Self, DateError> {
        self.n_weeks(1)
    }

    /// One calendar month later, clamping the day to the target month's
    /// length (2022-01-31 becomes 2022-02-28).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` past 9999-12-31.
    pub fn next_month(&self) -> Result<Self, DateError> {
        self.add_months(1)
    }

    /// Number of the month after this one (December wraps to 1)
    pub fn next_month_number(&self) -> u8 {
        self.month_typed().succ().get()
    }

    /// One calendar year later (Feb 29 becomes Feb 28)
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` in year 9999.
    pub fn next_year(&self) -> Result<Self, DateError> {
        self.add_years(1)
    }

    /// Number of the following year
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` in year 9999.
    pub fn next_year_number(&self) -> Result<u16, DateError> {
        Year::new(self.year() + 1)
            .map(Year::get)
            .map_err(|_| DateError::OutOfRange)
    }

    /// Moves `days` days; negative goes back, zero returns an equal date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves years 1..=9999.
    pub fn n_days(&self, days: i64) -> Result<Self, DateError> {
        let date = self.to_date();
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            date.checked_add_days(magnitude)
        } else {
            date.checked_sub_days(magnitude)
        };
        Self::landed(shifted)
    }

    /// Moves `weeks` weeks; negative goes back.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves years 1..=9999.
    pub fn n_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        let days = weeks.checked_mul(DAYS_PER_WEEK).ok_or(DateError::OutOfRange)?;
        self.n_days(days)
    }

    /// Moves `months` calendar months, clamping to month end.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves years 1..=9999.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        self.shift_months(i64::from(months))
    }

    /// Moves `years` calendar years, clamping Feb 29 to Feb 28.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves years 1..=9999.
    pub fn add_years(&self, years: i32) -> Result<Self, DateError> {
        self.shift_months(i64::from(years) * MONTHS_PER_YEAR)
    }

    /// Moves `months` months measured by `unit`; see [`MonthUnit`] for how
    /// the approximate modes differ from the calendar.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves years 1..=9999.
    pub fn n_months(&self, months: i32, unit: MonthUnit) -> Result<Self, DateError> {
        match unit {
            MonthUnit::Calendar => self.add_months(months),
            MonthUnit::Weeks { per_month } => self.n_weeks(i64::from(months) * i64::from(per_month)),
            MonthUnit::Days { per_month } => self.n_days(i64::from(months) * i64::from(per_month)),
        }
    }

    /// Moves `years` years measured by `unit`; see [`YearUnit`].
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves years 1..=9999.
    pub fn n_years(&self, years: i32, unit: YearUnit) -> Result<Self, DateError> {
        match unit {
            YearUnit::Calendar => self.add_years(years),
            YearUnit::Weeks { per_year } => self.n_weeks(i64::from(years) * i64::from(per_year)),
            YearUnit::Days { per_year } => self.n_days(i64::from(years) * i64::from(per_year)),
        }
    }

    fn shift_months(&self, months: i64) -> Result<Self, DateError> {
        let date = self.to_date();
        let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| DateError::OutOfRange)?;
        let shifted = if months >= 0 {
            date.checked_add_months(Months::new(magnitude))
        } else {
            date.checked_sub_months(Months::new(magnitude))
        };
        Self::landed(shifted)
    }

    /// chrono's range is wider than ours, so both overflows map to `OutOfRange`
    fn landed(shifted: Option<NaiveDate>) -> Result<Self, DateError> {
        let date = shifted.ok_or(DateError::OutOfRange)?;
        Self::try_from(date).map_err(|_| DateError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_tomorrow_and_yesterday() {
        assert_eq!(ymd("2024-02-28").tomorrow().unwrap(), ymd("2024-02-29"));
        assert_eq!(ymd("2023-02-28").tomorrow().unwrap(), ymd("2023-03-01"));
        assert_eq!(ymd("2023-12-31").tomorrow().unwrap(), ymd("2024-01-01"));
        assert_eq!(ymd("2024-03-01").yesterday().unwrap(), ymd("2024-02-29"));
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(ymd("9999-12-31").tomorrow(), Err(DateError::OutOfRange));
        assert_eq!(ymd("0001-01-01").yesterday(), Err(DateError::OutOfRange));
        assert_eq!(ymd("9999-12-15").next_month(), Err(DateError::OutOfRange));
        assert_eq!(ymd("9999-01-01").next_year_number(), Err(DateError::OutOfRange));
        assert_eq!(ymd("2024-01-01").n_days(i64::MIN), Err(DateError::OutOfRange));
        assert_eq!(ymd("2024-01-01").n_weeks(i64::MAX), Err(DateError::OutOfRange));
    }

    #[test]
    fn test_next_week() {
        assert_eq!(ymd("2024-12-28").next_week().unwrap(), ymd("2025-01-04"));
    }

    #[test]
    fn test_next_month_clamps_to_month_end() {
        struct TestCase {
            from:        &'static str,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        "2022-01-31",
                expected:    "2022-02-28",
                description: "common year February",
            },
            TestCase {
                from:        "2024-01-31",
                expected:    "2024-02-29",
                description: "leap year February",
            },
            TestCase {
                from:        "2024-03-31",
                expected:    "2024-04-30",
                description: "30-day month",
            },
            TestCase {
                from:        "2024-12-15",
                expected:    "2025-01-15",
                description: "year rollover",
            },
            TestCase {
                from:        "2024-04-22",
                expected:    "2024-05-22",
                description: "day preserved",
            },
        ];

        for case in &cases {
            assert_eq!(
                ymd(case.from).next_month().unwrap(),
                ymd(case.expected),
                "{} ({})",
                case.from,
                case.description
            );
        }
    }

    #[test]
    fn test_next_month_number() {
        assert_eq!(ymd("2024-01-31").next_month_number(), 2);
        assert_eq!(ymd("2024-12-01").next_month_number(), 1);
    }

    #[test]
    fn test_next_year() {
        assert_eq!(ymd("2024-02-29").next_year().unwrap(), ymd("2025-02-28"));
        assert_eq!(ymd("2023-07-04").next_year().unwrap(), ymd("2024-07-04"));
        assert_eq!(ymd("2023-07-04").next_year_number(), Ok(2024));
    }

    #[test]
    fn test_n_days_and_weeks() {
        let date = ymd("2024-03-10");
        assert_eq!(date.n_days(0).unwrap(), date);
        assert_eq!(date.n_days(-10).unwrap(), ymd("2024-02-29"));
        assert_eq!(date.n_days(366).unwrap(), ymd("2025-03-11"));
        assert_eq!(date.n_weeks(-2).unwrap(), ymd("2024-02-25"));
        assert_eq!(date.n_weeks(0).unwrap(), date);
    }

    #[test]
    fn test_n_months_unit_modes_differ() {
        let date = ymd("2024-01-31");
        // 4 weeks = 28 days
        assert_eq!(date.n_months(1, MonthUnit::weeks()).unwrap(), ymd("2024-02-28"));
        assert_eq!(date.n_months(1, MonthUnit::days()).unwrap(), ymd("2024-03-01"));
        assert_eq!(date.n_months(1, MonthUnit::Calendar).unwrap(), ymd("2024-02-29"));

        let start = ymd("2024-01-15");
        assert_eq!(start.n_months(3, MonthUnit::default()).unwrap(), ymd("2024-04-08"));
        assert_eq!(start.n_months(3, MonthUnit::Calendar).unwrap(), ymd("2024-04-15"));
        assert_eq!(start.n_months(-2, MonthUnit::Calendar).unwrap(), ymd("2023-11-15"));
        assert_eq!(
            start.n_months(2, MonthUnit::Weeks { per_month: 5 }).unwrap(),
            ymd("2024-03-25")
        );
        assert_eq!(start.n_months(0, MonthUnit::days()).unwrap(), start);
    }

    #[test]
    fn test_n_years_unit_modes_differ() {
        let date = ymd("2023-03-01");
        // 52 weeks = 364 days
        assert_eq!(date.n_years(1, YearUnit::weeks()).unwrap(), ymd("2024-02-28"));
        assert_eq!(date.n_years(1, YearUnit::days()).unwrap(), ymd("2024-02-29"));
        assert_eq!(date.n_years(1, YearUnit::Calendar).unwrap(), ymd("2024-03-01"));
        assert_eq!(date.n_years(-3, YearUnit::Calendar).unwrap(), ymd("2020-03-01"));
        assert_eq!(ymd("2024-02-29").add_years(4).unwrap(), ymd("2028-02-29"));
        assert_eq!(ymd("2024-02-29").add_years(-1).unwrap(), ymd("2023-02-28"));
    }

    #[test]
    fn test_unit_codes() {
        assert_eq!("W".parse::<MonthUnit>(), Ok(MonthUnit::weeks()));
        assert_eq!("d".parse::<MonthUnit>(), Ok(MonthUnit::days()));
        assert_eq!("m".parse::<MonthUnit>(), Ok(MonthUnit::Calendar));
        assert!(matches!("Q".parse::<MonthUnit>(), Err(DateError::InvalidUnit(ref s)) if s == "Q"));

        assert_eq!("w".parse::<YearUnit>(), Ok(YearUnit::weeks()));
        assert_eq!("D".parse::<YearUnit>(), Ok(YearUnit::days()));
        assert_eq!("Y".parse::<YearUnit>(), Ok(YearUnit::Calendar));
        assert!("M".parse::<YearUnit>().is_err());
    }

    #[test]
    fn test_navigation_is_pure() {
        let date = ymd("2024-05-05");
        let _ = date.tomorrow().unwrap();
        let _ = date.next_month().unwrap();
        assert_eq!(date, ymd("2024-05-05"));
    }
}
