/// Error type for every fallible date operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input text is not a real date in `YYYY-MM-DD` form.
    #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
    Format(String),

    /// Year outside `1..=9999`.
    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(i64),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    /// Day that does not exist in the given month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u32 },

    /// Arithmetic moved past 0001-01-01 or 9999-12-31.
    #[error("Date arithmetic left the supported range 0001-01-01..=9999-12-31")]
    OutOfRange,

    /// Unknown navigation unit code.
    #[error("Invalid unit: {0:?} (expected one of W, D, M, Y)")]
    InvalidUnit(String),
}

impl DateError {
    /// True for errors raised by text that failed validation.
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// True for numeric components that cannot form a real date.
    pub const fn is_value_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. }
        )
    }
}
