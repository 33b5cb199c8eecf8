//! Fixture helpers shared by the unit tests.

use chrono::NaiveDate;

use crate::YmdDate;

/// Parses a canonical string, panicking on bad fixtures
pub fn ymd(s: &str) -> YmdDate {
    s.parse().unwrap_or_else(|e| panic!("bad fixture {s:?}: {e}"))
}

/// Builds a chrono date, panicking on bad fixtures
pub fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("bad fixture {year}-{month}-{day}"))
}
