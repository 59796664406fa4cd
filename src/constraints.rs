use std::collections::BTreeSet;

use crate::{DateRange, DateValue, MAX_YEAR, MIN_YEAR, RangeError, Weekday, YearMonth};

/// Immutable rule set deciding which days a picker lets the user select.
///
/// Built once per picker session through [`ConstraintSetBuilder`], which
/// clamps the year bounds into `[MIN_YEAR, MAX_YEAR]` and rejects malformed
/// input. All queries are pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    min_year:          u16,
    max_year:          u16,
    disable_until:     Option<DateValue>,
    disable_since:     Option<DateValue>,
    disable_weekends:  bool,
    disabled_dates:    BTreeSet<DateValue>,
    enabled_dates:     BTreeSet<DateValue>,
    disabled_ranges:   Vec<DateRange>,
    first_day_of_week: Weekday,
}

/// Error raised when picker configuration is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `min_year` ends up above `max_year` once both are clamped.
    #[error("Invalid year bounds: min year {min} is after max year {max}")]
    InvalidYearBounds { min: u16, max: u16 },

    /// A disabled range is reversed or has an unset bound.
    #[error("Invalid disabled range: {0}")]
    InvalidRange(#[from] RangeError),

    /// A date list contains the "no date" sentinel.
    #[error("Unset date in {field}")]
    UnsetDate { field: &'static str },

    /// The display pattern cannot express a full date, or an unpadded `m`
    /// or `d` runs straight into another number.
    #[error(
        "Invalid date format {0:?}: needs year, month and day tokens, with a separator after `m` or `d`"
    )]
    InvalidDateFormat(String),
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            min_year:          MIN_YEAR,
            max_year:          MAX_YEAR,
            disable_until:     None,
            disable_since:     None,
            disable_weekends:  false,
            disabled_dates:    BTreeSet::new(),
            enabled_dates:     BTreeSet::new(),
            disabled_ranges:   Vec::new(),
            first_day_of_week: Weekday::Monday,
        }
    }
}

impl ConstraintSet {
    pub fn builder() -> ConstraintSetBuilder {
        ConstraintSetBuilder::default()
    }

    pub const fn min_year(&self) -> u16 {
        self.min_year
    }

    pub const fn max_year(&self) -> u16 {
        self.max_year
    }

    pub const fn disable_until(&self) -> Option<DateValue> {
        self.disable_until
    }

    pub const fn disable_since(&self) -> Option<DateValue> {
        self.disable_since
    }

    pub const fn disable_weekends(&self) -> bool {
        self.disable_weekends
    }

    pub const fn disabled_dates(&self) -> &BTreeSet<DateValue> {
        &self.disabled_dates
    }

    pub const fn enabled_dates(&self) -> &BTreeSet<DateValue> {
        &self.enabled_dates
    }

    pub fn disabled_ranges(&self) -> &[DateRange] {
        &self.disabled_ranges
    }

    pub const fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Whether `year` lies within the configured year bounds
    pub const fn is_year_in_bounds(&self, year: u16) -> bool {
        year >= self.min_year && year <= self.max_year
    }

    /// Decides whether `date` may be selected.
    ///
    /// The allow-list wins over every other rule, including the year bounds.
    /// Every remaining rule is sufficient on its own to disable a date. The
    /// sentinel is never selectable.
    pub fn is_selectable(&self, date: &DateValue) -> bool {
        if !date.is_valid() {
            return false;
        }
        if self.enabled_dates.contains(date) {
            return true;
        }
        if !self.is_year_in_bounds(date.year()) {
            return false;
        }
        if self.disable_until.is_some_and(|until| *date < until) {
            return false;
        }
        if self.disable_since.is_some_and(|since| *date > since) {
            return false;
        }
        if self.disable_weekends && date.weekday().is_some_and(Weekday::is_weekend) {
            return false;
        }
        if self.disabled_dates.contains(date) {
            return false;
        }
        !self.disabled_ranges.iter().any(|range| range.contains(date))
    }

    /// True iff the last day of `month` is still before `disable_until`
    pub fn is_month_entirely_before_disable_until(&self, month: YearMonth) -> bool {
        self.disable_until
            .is_some_and(|until| month.last_day() < until)
    }

    /// True iff the first day of `month` is already after `disable_since`
    pub fn is_month_entirely_after_disable_since(&self, month: YearMonth) -> bool {
        self.disable_since
            .is_some_and(|since| month.first_day() > since)
    }
}

/// Collects constraint configuration and validates it into a [`ConstraintSet`].
#[derive(Debug, Clone)]
pub struct ConstraintSetBuilder {
    min_year:          u16,
    max_year:          u16,
    disable_until:     DateValue,
    disable_since:     DateValue,
    disable_weekends:  bool,
    disabled_dates:    Vec<DateValue>,
    enabled_dates:     Vec<DateValue>,
    disabled_ranges:   Vec<(DateValue, DateValue)>,
    first_day_of_week: Weekday,
}

impl Default for ConstraintSetBuilder {
    fn default() -> Self {
        Self {
            min_year:          MIN_YEAR,
            max_year:          MAX_YEAR,
            disable_until:     DateValue::NONE,
            disable_since:     DateValue::NONE,
            disable_weekends:  false,
            disabled_dates:    Vec::new(),
            enabled_dates:     Vec::new(),
            disabled_ranges:   Vec::new(),
            first_day_of_week: Weekday::Monday,
        }
    }
}

impl ConstraintSetBuilder {
    #[must_use]
    pub const fn min_year(mut self, year: u16) -> Self {
        self.min_year = year;
        self
    }

    #[must_use]
    pub const fn max_year(mut self, year: u16) -> Self {
        self.max_year = year;
        self
    }

    /// Dates before `date` become unselectable; the sentinel clears the bound.
    #[must_use]
    pub const fn disable_until(mut self, date: DateValue) -> Self {
        self.disable_until = date;
        self
    }

    /// Dates after `date` become unselectable; the sentinel clears the bound.
    #[must_use]
    pub const fn disable_since(mut self, date: DateValue) -> Self {
        self.disable_since = date;
        self
    }

    #[must_use]
    pub const fn disable_weekends(mut self, disable: bool) -> Self {
        self.disable_weekends = disable;
        self
    }

    #[must_use]
    pub fn disabled_date(mut self, date: DateValue) -> Self {
        self.disabled_dates.push(date);
        self
    }

    #[must_use]
    pub fn disabled_dates(mut self, dates: impl IntoIterator<Item = DateValue>) -> Self {
        self.disabled_dates.extend(dates);
        self
    }

    #[must_use]
    pub fn enabled_date(mut self, date: DateValue) -> Self {
        self.enabled_dates.push(date);
        self
    }

    #[must_use]
    pub fn enabled_dates(mut self, dates: impl IntoIterator<Item = DateValue>) -> Self {
        self.enabled_dates.extend(dates);
        self
    }

    /// Adds an inclusive range; ordering is checked by [`Self::build`].
    #[must_use]
    pub fn disabled_range(mut self, begin: DateValue, end: DateValue) -> Self {
        self.disabled_ranges.push((begin, end));
        self
    }

    #[must_use]
    pub fn disabled_ranges(mut self, ranges: impl IntoIterator<Item = DateRange>) -> Self {
        self.disabled_ranges
            .extend(ranges.into_iter().map(|range| (range.begin(), range.end())));
        self
    }

    #[must_use]
    pub const fn first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = day;
        self
    }

    /// Validates the collected configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if a range is reversed or unset, a date list
    /// holds the sentinel, or the clamped year bounds are inverted.
    pub fn build(self) -> Result<ConstraintSet, ConfigError> {
        let min_year = clamp_year("min_year", self.min_year);
        let max_year = clamp_year("max_year", self.max_year);
        if min_year > max_year {
            return Err(ConfigError::InvalidYearBounds {
                min: min_year,
                max: max_year,
            });
        }

        let disabled_dates = collect_dates("disabled_dates", self.disabled_dates)?;
        let enabled_dates = collect_dates("enabled_dates", self.enabled_dates)?;
        let disabled_ranges = self
            .disabled_ranges
            .into_iter()
            .map(|(begin, end)| DateRange::new(begin, end))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConstraintSet {
            min_year,
            max_year,
            disable_until: (!self.disable_until.is_none()).then_some(self.disable_until),
            disable_since: (!self.disable_since.is_none()).then_some(self.disable_since),
            disable_weekends: self.disable_weekends,
            disabled_dates,
            enabled_dates,
            disabled_ranges,
            first_day_of_week: self.first_day_of_week,
        })
    }
}

fn clamp_year(field: &'static str, requested: u16) -> u16 {
    let clamped = requested.clamp(MIN_YEAR, MAX_YEAR);
    if clamped != requested {
        tracing::debug!(field, requested, clamped, "year bound clamped to library limits");
    }
    clamped
}

fn collect_dates(
    field: &'static str,
    dates: Vec<DateValue>,
) -> Result<BTreeSet<DateValue>, ConfigError> {
    if dates.iter().any(DateValue::is_none) {
        return Err(ConfigError::UnsetDate { field });
    }
    Ok(dates.into_iter().collect())
}
