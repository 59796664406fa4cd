//! Host-facing picker configuration.

use serde::{Deserialize, Serialize};

use crate::{
    ConfigError, ConstraintSet, DEFAULT_TODAY_BUTTON_TEXT, DateRange, DatePattern, DateValue,
    DayLabels, MAX_YEAR, MIN_YEAR, MonthLabels, Weekday,
};

/// Picker options as a host supplies them, typically deserialized from the
/// same camelCase object a web component would take.
///
/// Every key is optional. Keys this crate does not act on (styling,
/// placement, ARIA labels) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    pub day_labels:              DayLabels,
    pub month_labels:            MonthLabels,
    pub date_format:             DatePattern,
    pub show_today_btn:          bool,
    pub today_btn_txt:           String,
    pub first_day_of_week:       Weekday,
    pub mark_current_day:        bool,
    pub editable_month_and_year: bool,
    pub disable_header_buttons:  bool,
    pub show_week_numbers:       bool,
    pub disable_until:           DateValue,
    pub disable_since:           DateValue,
    pub disable_dates:           Vec<DateValue>,
    pub enable_dates:            Vec<DateValue>,
    pub disable_date_ranges:     Vec<DateRange>,
    pub disable_weekends:        bool,
    pub min_year:                u16,
    pub max_year:                u16,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            day_labels:              DayLabels::default(),
            month_labels:            MonthLabels::default(),
            date_format:             DatePattern::default(),
            show_today_btn:          true,
            today_btn_txt:           DEFAULT_TODAY_BUTTON_TEXT.to_owned(),
            first_day_of_week:       Weekday::Monday,
            mark_current_day:        true,
            editable_month_and_year: true,
            disable_header_buttons:  true,
            show_week_numbers:       false,
            disable_until:           DateValue::NONE,
            disable_since:           DateValue::NONE,
            disable_dates:           Vec::new(),
            enable_dates:            Vec::new(),
            disable_date_ranges:     Vec::new(),
            disable_weekends:        false,
            min_year:                MIN_YEAR,
            max_year:                MAX_YEAR,
        }
    }
}

impl PickerOptions {
    /// Validates the options into an immutable [`PickerConfig`].
    ///
    /// # Errors
    /// Returns `ConfigError` when the date format lacks a year, month or day
    /// token, or when the constraint fields are structurally invalid.
    pub fn build(self) -> Result<PickerConfig, ConfigError> {
        if !self.date_format.is_complete() {
            return Err(ConfigError::InvalidDateFormat(self.date_format.as_str().to_owned()));
        }

        let constraints = ConstraintSet::builder()
            .min_year(self.min_year)
            .max_year(self.max_year)
            .disable_until(self.disable_until)
            .disable_since(self.disable_since)
            .disable_weekends(self.disable_weekends)
            .disabled_dates(self.disable_dates)
            .enabled_dates(self.enable_dates)
            .disabled_ranges(self.disable_date_ranges)
            .first_day_of_week(self.first_day_of_week)
            .build()?;

        Ok(PickerConfig {
            constraints,
            date_format: self.date_format,
            month_labels: self.month_labels,
            day_labels: self.day_labels,
            show_today_btn: self.show_today_btn,
            today_btn_txt: self.today_btn_txt,
            mark_current_day: self.mark_current_day,
            editable_month_and_year: self.editable_month_and_year,
            disable_header_buttons: self.disable_header_buttons,
            show_week_numbers: self.show_week_numbers,
        })
    }
}

/// Validated picker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    constraints:             ConstraintSet,
    date_format:             DatePattern,
    month_labels:            MonthLabels,
    day_labels:              DayLabels,
    show_today_btn:          bool,
    today_btn_txt:           String,
    mark_current_day:        bool,
    editable_month_and_year: bool,
    disable_header_buttons:  bool,
    show_week_numbers:       bool,
}

impl PickerConfig {
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub const fn date_format(&self) -> &DatePattern {
        &self.date_format
    }

    pub const fn month_labels(&self) -> &MonthLabels {
        &self.month_labels
    }

    pub const fn day_labels(&self) -> &DayLabels {
        &self.day_labels
    }

    pub const fn show_today_btn(&self) -> bool {
        self.show_today_btn
    }

    pub fn today_btn_txt(&self) -> &str {
        &self.today_btn_txt
    }

    pub const fn mark_current_day(&self) -> bool {
        self.mark_current_day
    }

    pub const fn editable_month_and_year(&self) -> bool {
        self.editable_month_and_year
    }

    pub const fn disable_header_buttons(&self) -> bool {
        self.disable_header_buttons
    }

    /// Week numbers are only meaningful for Monday-first grids
    pub const fn show_week_numbers(&self) -> bool {
        self.show_week_numbers
            && matches!(self.constraints.first_day_of_week(), Weekday::Monday)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            constraints:             ConstraintSet::default(),
            date_format:             DatePattern::default(),
            month_labels:            MonthLabels::default(),
            day_labels:              DayLabels::default(),
            show_today_btn:          true,
            today_btn_txt:           DEFAULT_TODAY_BUTTON_TEXT.to_owned(),
            mark_current_day:        true,
            editable_month_and_year: true,
            disable_header_buttons:  true,
            show_week_numbers:       false,
        }
    }
}

impl TryFrom<PickerOptions> for PickerConfig {
    type Error = ConfigError;

    fn try_from(options: PickerOptions) -> Result<Self, Self::Error> {
        options.build()
    }
}
