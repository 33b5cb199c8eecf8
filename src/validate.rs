//! Free-function validators for the canonical `YYYY-MM-DD` form.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::consts::{CANONICAL_LEN, DATE_SEPARATOR, MAX_YEAR, MIN_YEAR, SEPARATOR_OFFSETS};
use crate::types::{Day, Month, Year};

/// Returns true iff `candidate` is exactly `YYYY-MM-DD` and names a real
/// calendar date in years 1..=9999. Never fails.
///
/// Surrounding whitespace, missing zero padding and trailing characters are
/// all rejected.
pub fn is_ymd(candidate: &str) -> bool {
    split_canonical(candidate).is_some_and(|(y, m, d)| components_form_date(y, m, d))
}

/// Returns true iff the date can be written in canonical form.
pub fn is_ymd_date(date: NaiveDate) -> bool {
    u16::try_from(date.year()).is_ok_and(|y| (MIN_YEAR..=MAX_YEAR).contains(&y))
}

/// Returns true iff the date part of `datetime` can be written in canonical form.
pub fn is_ymd_datetime(datetime: NaiveDateTime) -> bool {
    is_ymd_date(datetime.date())
}

/// Splits a string with the exact canonical shape into raw numeric parts.
/// Checks shape only; the parts may still not form a real date.
pub(crate) fn split_canonical(candidate: &str) -> Option<(u16, u8, u8)> {
    let bytes = candidate.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| {
        if SEPARATOR_OFFSETS.contains(&i) {
            char::from(*b) == DATE_SEPARATOR
        } else {
            b.is_ascii_digit()
        }
    });
    if !shape_ok {
        return None;
    }

    // All-ASCII at this point, so byte slicing is on char boundaries
    let year = candidate[0..4].parse().ok()?;
    let month = candidate[5..7].parse().ok()?;
    let day = candidate[8..10].parse().ok()?;
    Some((year, month, day))
}

fn components_form_date(year: u16, month: u8, day: u8) -> bool {
    let Ok(year) = Year::new(year) else {
        return false;
    };
    let Ok(month) = Month::new(month) else {
        return false;
    };
    Day::new(day, year, month).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ymd_cases() {
        struct TestCase {
            input:       &'static str,
            expected:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2022-04-22",
                expected:    true,
                description: "ordinary date",
            },
            TestCase {
                input:       "2024-02-29",
                expected:    true,
                description: "leap day in leap year",
            },
            TestCase {
                input:       "2023-02-29",
                expected:    false,
                description: "leap day in common year",
            },
            TestCase {
                input:       "2022-13-01",
                expected:    false,
                description: "month 13",
            },
            TestCase {
                input:       "2022-00-10",
                expected:    false,
                description: "month 0",
            },
            TestCase {
                input:       "2022-04-31",
                expected:    false,
                description: "April 31",
            },
            TestCase {
                input:       "0000-01-01",
                expected:    false,
                description: "year 0",
            },
            TestCase {
                input:       "22-04-22",
                expected:    false,
                description: "two-digit year",
            },
            TestCase {
                input:       "2022-4-22",
                expected:    false,
                description: "unpadded month",
            },
            TestCase {
                input:       "2022/04/22",
                expected:    false,
                description: "wrong separator",
            },
            TestCase {
                input:       " 2022-04-22",
                expected:    false,
                description: "leading whitespace",
            },
            TestCase {
                input:       "2022-04-221",
                expected:    false,
                description: "trailing digit",
            },
            TestCase {
                input:       "2022-04-2a",
                expected:    false,
                description: "non-digit",
            },
            TestCase {
                input:       "+022-04-22",
                expected:    false,
                description: "sign in year",
            },
            TestCase {
                input:       "",
                expected:    false,
                description: "empty",
            },
            TestCase {
                input:       "2022-04-２",
                expected:    false,
                description: "non-ASCII digit",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_ymd(case.input),
                case.expected,
                "is_ymd({:?}) ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_split_canonical_checks_shape_only() {
        assert_eq!(split_canonical("2022-13-40"), Some((2022, 13, 40)));
        assert_eq!(split_canonical("2022-1-400"), None);
    }

    #[test]
    fn test_is_ymd_date() {
        let ok = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let too_late = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        let too_early = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        assert!(is_ymd_date(ok));
        assert!(!is_ymd_date(too_late));
        assert!(!is_ymd_date(too_early));
    }

    #[test]
    fn test_is_ymd_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert!(is_ymd_datetime(dt));
    }
}
