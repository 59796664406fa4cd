use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::prelude::*;
use crate::{DateError, DateValue};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub fn pred(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }

    pub fn succ(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position, January = 0
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. Discriminants follow the `0 = Sunday .. 6 = Saturday`
/// convention, tokens are the two-letter names used in picker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "su")]
    #[serde(rename = "su")]
    Sunday = 0,
    #[display(fmt = "mo")]
    #[serde(rename = "mo")]
    Monday = 1,
    #[display(fmt = "tu")]
    #[serde(rename = "tu")]
    Tuesday = 2,
    #[display(fmt = "we")]
    #[serde(rename = "we")]
    Wednesday = 3,
    #[display(fmt = "th")]
    #[serde(rename = "th")]
    Thursday = 4,
    #[display(fmt = "fr")]
    #[serde(rename = "fr")]
    Friday = 5,
    #[display(fmt = "sa")]
    #[serde(rename = "sa")]
    Saturday = 6,
}

impl Weekday {
    /// All weekdays, Sunday first
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// `0 = Sunday .. 6 = Saturday`
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Weekday::index`], wrapping modulo 7
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % DAYS_PER_WEEK]
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// Column this weekday occupies when `first` is in column 0
    pub const fn column_from(self, first: Self) -> usize {
        (self.index() + DAYS_PER_WEEK - first.index()) % DAYS_PER_WEEK
    }
}

impl FromStr for Weekday {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.to_string() == token)
            .ok_or_else(|| DateError::InvalidFormat(format!("Unknown weekday token: {s}")))
    }
}

/// A displayed month: the unit a calendar grid is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct YearMonth {
    pub year:  Year,
    pub month: Month,
}

impl YearMonth {
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Builds from raw components
    ///
    /// # Errors
    /// Returns `DateError` if either component is out of range.
    pub fn from_parts(year: u16, month: u8) -> Result<Self, DateError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    pub const fn days(self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    pub const fn first_day(self) -> DateValue {
        DateValue::from_valid(self.year.get(), self.month.get(), MIN_DAY)
    }

    pub const fn last_day(self) -> DateValue {
        DateValue::from_valid(self.year.get(), self.month.get(), self.days())
    }

    /// Previous month, carrying into the previous year after January.
    /// Returns `None` below year 1.
    pub fn prev(self) -> Option<Self> {
        let (year, month) = previous_month(self.year.get(), self.month.get());
        Self::from_parts(year, month).ok()
    }

    /// Next month, carrying into the next year after December.
    /// Returns `None` above `MAX_YEAR`.
    pub fn next(self) -> Option<Self> {
        let (year, month) = following_month(self.year.get(), self.month.get());
        Self::from_parts(year, month).ok()
    }

    pub fn prev_year(self) -> Option<Self> {
        self.year.pred().map(|year| Self { year, ..self })
    }

    pub fn next_year(self) -> Option<Self> {
        self.year.succ().map(|year| Self { year, ..self })
    }

    /// Month containing `date`, `None` for the sentinel
    pub fn of(date: DateValue) -> Option<Self> {
        Self::from_parts(date.year(), date.month()).ok()
    }
}

impl Default for YearMonth {
    /// January of `MIN_YEAR`
    fn default() -> Self {
        Self {
            year:  Year(NonZeroU16::MIN.saturating_add(MIN_YEAR - 1)),
            month: Month(NonZeroU8::MIN),
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// True iff `(year, month, day)` names a day of the proleptic Gregorian calendar
pub const fn is_valid_calendar_date(year: u16, month: u8, day: u8) -> bool {
    month >= JANUARY && month <= MAX_MONTH && day >= MIN_DAY && day <= days_in_month(year, month)
}

/// Raw month step backwards; year 1 January yields year 0 December.
pub(crate) const fn previous_month(year: u16, month: u8) -> (u16, u8) {
    if month == JANUARY {
        (year.saturating_sub(1), DECEMBER)
    } else {
        (year, month - 1)
    }
}

/// Raw month step forwards; may step past `MAX_YEAR`.
pub(crate) const fn following_month(year: u16, month: u8) -> (u16, u8) {
    if month == DECEMBER {
        (year + 1, JANUARY)
    } else {
        (year, month + 1)
    }
}

/// Day of week via Sakamoto's method.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn weekday_of(year: u16, month: u8, day: u8) -> Weekday {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let y = if month < 3 {
        i32::from(year) - 1
    } else {
        i32::from(year)
    };
    let raw = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + OFFSETS[usize::from(month - 1)]
        + i32::from(day);
    Weekday::from_index(raw.rem_euclid(7) as usize)
}

/// ISO 8601 week number of the week containing the given day, `None` when
/// the triple is not a calendar date.
pub fn iso_week_number(year: u16, month: u8, day: u8) -> Option<u8> {
    let date = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))?;
    u8::try_from(date.iso_week().week()).ok()
}
