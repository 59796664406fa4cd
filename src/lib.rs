mod clock;
mod consts;
mod constraints;
mod events;
mod format;
mod grid;
mod navigation;
mod options;
mod picker;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use constraints::{ConfigError, ConstraintSet, ConstraintSetBuilder};
pub use events::{CalendarViewChanged, DateChanged, DayOfMonth, InputFieldChanged, PickerEvent};
pub use format::{
    DatePattern, DayLabels, MonthLabels, date_from_iso_prefix, epoch_millis, format_date,
    parse_date, parse_default_month, parse_month_label, parse_year_label, to_local_iso_string,
};
pub use grid::{CalendarCell, CalendarGrid, CalendarWeek, MonthRelation, weekday_labels};
pub use navigation::NavigationState;
pub use options::{PickerConfig, PickerOptions};
pub use picker::{CalendarView, DatePicker, LabelEdit, ModelValue};
pub use range::{DateRange, RangeError};
pub use types::{
    Month, Weekday, Year, YearMonth, days_in_month, is_leap_year, is_valid_calendar_date,
    iso_week_number, weekday_of,
};

use crate::prelude::*;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A calendar day as a `(year, month, day)` triple.
///
/// Every value is either a valid proleptic Gregorian date or the sentinel
/// [`DateValue::NONE`] (`{0, 0, 0}`), which stands for "no date selected".
/// Ordering is lexicographic on `(year, month, day)`, so the sentinel sorts
/// before every real date.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct DateValue {
    year:  u16,
    month: u8,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Wire shape of a [`DateValue`]: the `{year, month, day}` object hosts use
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl DateValue {
    /// The "no date" sentinel
    pub const NONE: Self = Self {
        year:  0,
        month: 0,
        day:   0,
    };

    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns `DateError` if the year is outside `1..=MAX_YEAR`, the month
    /// outside `1..=12`, or the day does not exist in that month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Year::new(year)?;
        Month::new(month)?;
        if !is_valid_calendar_date(year, month, day) {
            return Err(DateError::InvalidDay { month, day, year });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a value whose components were derived from calendar arithmetic.
    pub(crate) const fn from_valid(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(year >= 1 && year <= MAX_YEAR && is_valid_calendar_date(year, month, day));
        Self { year, month, day }
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// True for the sentinel
    pub const fn is_none(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// True for a real calendar date in years `1..=MAX_YEAR`
    pub const fn is_valid(&self) -> bool {
        self.year >= 1
            && self.year <= MAX_YEAR
            && is_valid_calendar_date(self.year, self.month, self.day)
    }

    /// Day of week, `None` for the sentinel
    pub fn weekday(&self) -> Option<Weekday> {
        self.is_valid()
            .then(|| weekday_of(self.year, self.month, self.day))
    }

    /// Month this date belongs to, `None` for the sentinel
    pub fn year_month(&self) -> Option<YearMonth> {
        YearMonth::of(*self)
    }

    /// The same day as a `chrono` date, `None` for the sentinel
    pub fn to_naive(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// Converts a `chrono` date, `None` outside `1..=MAX_YEAR`
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        let year = u16::try_from(date.year()).ok()?;
        let month = u8::try_from(date.month()).ok()?;
        let day = u8::try_from(date.day()).ok()?;
        Self::new(year, month, day).ok()
    }

    /// Shifts by a number of days. Returns `None` for the sentinel or when
    /// the result leaves `1..=MAX_YEAR`.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let start = self.to_naive()?;
        let step = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            start.checked_add_days(step)
        } else {
            start.checked_sub_days(step)
        }?;
        Self::from_naive(shifted)
    }
}

impl TryFrom<RawDate> for DateValue {
    type Error = DateError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        if raw.year == 0 && raw.month == 0 && raw.day == 0 {
            return Ok(Self::NONE);
        }
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<DateValue> for RawDate {
    fn from(date: DateValue) -> Self {
        Self {
            year:  date.year,
            month: date.month,
            day:   date.day,
        }
    }
}

impl TryFrom<(u16, u8, u8)> for DateValue {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for DateValue {
    type Err = DateError;

    /// Strict ISO `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

impl DateValue {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}
