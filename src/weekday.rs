use chrono::{Datelike, Local, Weekday};

use crate::YmdDate;
use crate::consts::{WEEKDAY_ABBREVIATIONS, WEEKDAY_NAMES};

/// Monday-first index, matching the layout of the name tables
const fn weekday_index(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    }
}

impl YmdDate {
    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        self.to_date().weekday()
    }

    /// Day of the week as 0 (Monday) through 6 (Sunday)
    pub fn weekday_number(&self) -> u8 {
        weekday_index(self.weekday())
    }

    /// Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Monday through Friday
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// English weekday name, e.g. "Monday", or "Mon" when `abbreviated`.
    pub fn get_weekday(&self, abbreviated: bool) -> &'static str {
        if abbreviated {
            self.weekday_label(&WEEKDAY_ABBREVIATIONS)
        } else {
            self.weekday_label(&WEEKDAY_NAMES)
        }
    }

    /// Picks this date's entry from caller-supplied labels, Monday first.
    pub fn weekday_label<'a>(&self, labels: &[&'a str; 7]) -> &'a str {
        labels[usize::from(self.weekday_number())]
    }

    /// Whether this is the current local date. Racy across midnight.
    pub fn is_today(&self) -> bool {
        *self == Local::now().date_naive()
    }
}
