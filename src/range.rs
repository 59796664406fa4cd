use serde::{Deserialize, Serialize};

use crate::DateValue;

/// Represents a range between two calendar dates (inclusive).
/// The begin date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct DateRange {
    begin: DateValue,
    end:   DateValue,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Begin date is after end date.
    #[error("Invalid date range: begin ({begin}) is after end ({end})")]
    InvalidRange { begin: DateValue, end: DateValue },

    /// One of the bounds is the "no date" sentinel.
    #[error("Date range bound is not set")]
    UnsetBound,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRange {
    begin: DateValue,
    end:   DateValue,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::UnsetBound` if either bound is the sentinel and
    /// `RangeError::InvalidRange` if begin > end.
    pub fn new(begin: DateValue, end: DateValue) -> Result<Self, RangeError> {
        if begin.is_none() || end.is_none() {
            return Err(RangeError::UnsetBound);
        }
        if begin > end {
            return Err(RangeError::InvalidRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Returns the first day of the range
    pub const fn begin(&self) -> DateValue {
        self.begin
    }

    /// Returns the last day of the range
    pub const fn end(&self) -> DateValue {
        self.end
    }

    /// Checks if the range contains a given date, bounds included
    pub fn contains(&self, date: &DateValue) -> bool {
        self.begin <= *date && *date <= self.end
    }
}

impl TryFrom<RawRange> for DateRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.begin, raw.end)
    }
}

impl From<DateRange> for RawRange {
    fn from(range: DateRange) -> Self {
        Self {
            begin: range.begin,
            end:   range.end,
        }
    }
}
