/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive), the largest four-digit year
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator in the canonical `YYYY-MM-DD` form
pub const DATE_SEPARATOR: char = '-';

/// Byte length of a canonical `YYYY-MM-DD` string
pub const CANONICAL_LEN: usize = 10;
/// Byte offsets of the two separators in a canonical string
pub(crate) const SEPARATOR_OFFSETS: [usize; 2] = [4, 7];

/// Full weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Three-letter weekday abbreviations, Monday first
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;
/// Months in a year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Weeks counted as one month by the approximate week mode
pub const DEFAULT_WEEKS_PER_MONTH: u32 = 4;
/// Days counted as one month by the approximate day mode
pub const DEFAULT_DAYS_PER_MONTH: u32 = 30;
/// Weeks counted as one year by the approximate week mode
pub const DEFAULT_WEEKS_PER_YEAR: u32 = 52;
/// Days counted as one year by the approximate day mode
pub const DEFAULT_DAYS_PER_YEAR: u32 = 365;

/// First year Martin Luther King Jr. Day was observed federally
pub const MLK_DAY_FIRST_YEAR: u16 = 1986;
/// First year Juneteenth was observed federally
pub const JUNETEENTH_FIRST_YEAR: u16 = 2021;
