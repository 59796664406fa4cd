//! A stateful picker session driven by host input.
//!
//! [`DatePicker`] owns the visible month, the selection and the text field
//! contents. Every operation mutates that state and hands back the events
//! the host should forward to its listeners; nothing is dispatched
//! internally.

use serde::Serialize;

use crate::{
    CalendarCell, CalendarGrid, Clock, DateChanged, DateValue, InputFieldChanged, MonthRelation,
    NavigationState, PickerConfig, PickerEvent, SystemClock, YearMonth, date_from_iso_prefix,
    epoch_millis, format_date, parse_date, parse_default_month, parse_month_label,
    parse_year_label, to_local_iso_string, weekday_labels,
};

/// Everything needed to render the open selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub grid:              CalendarGrid,
    pub navigation:        NavigationState,
    pub weekday_labels:    [String; 7],
    pub month_label:       String,
    pub year:              u16,
    pub show_today_btn:    bool,
    pub today_disabled:    bool,
    pub selected:          DateValue,
    pub show_week_numbers: bool,
    pub editing_month:     bool,
    pub editing_year:      bool,
}

/// Outcome of typing into the inline month or year editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEdit {
    /// The text names no month or year the picker can show; keep editing
    Invalid,
    /// Accepted, but it is the month or year already shown
    Unchanged,
    /// Accepted and the view moved
    Changed(PickerEvent),
}

/// A value the host model writes into the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValue {
    /// An ISO 8601 string; only the leading `YYYY-MM-DD` is read
    Text(String),
    Date(DateValue),
    Empty,
}

impl From<DateValue> for ModelValue {
    fn from(date: DateValue) -> Self {
        if date.is_none() {
            Self::Empty
        } else {
            Self::Date(date)
        }
    }
}

impl From<&str> for ModelValue {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_owned())
        }
    }
}

/// Selection state behind one date input field
#[derive(Debug, Clone)]
pub struct DatePicker<C: Clock = SystemClock> {
    config:        PickerConfig,
    clock:         C,
    visible:       YearMonth,
    selected:      DateValue,
    input_text:    String,
    editing_month: bool,
    editing_year:  bool,
}

impl DatePicker<SystemClock> {
    pub fn with_system_clock(config: PickerConfig) -> Self {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> DatePicker<C> {
    /// Starts with nothing selected, showing the current month
    pub fn new(config: PickerConfig, clock: C) -> Self {
        let visible = YearMonth::of(clock.today()).unwrap_or_default();
        Self {
            config,
            clock,
            visible,
            selected: DateValue::NONE,
            input_text: String::new(),
            editing_month: false,
            editing_year: false,
        }
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn selected(&self) -> DateValue {
        self.selected
    }

    pub const fn visible_month(&self) -> YearMonth {
        self.visible
    }

    /// Text currently in the input field
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub const fn is_editing_month(&self) -> bool {
        self.editing_month
    }

    pub const fn is_editing_year(&self) -> bool {
        self.editing_year
    }

    /// Opens the selector for the text in the field.
    ///
    /// A parsable, selectable `input_text` is selected and its month shown.
    /// Otherwise the selection is cleared and `default_month` (`yyyy-mm` or
    /// `mm-yyyy`) is shown, falling back to the current month.
    pub fn open(&mut self, input_text: &str, default_month: &str) -> PickerEvent {
        let date = self.parse(input_text);
        self.input_text = input_text.to_owned();
        self.reset_label_edit();
        self.selected = date;

        let visible = if date.is_valid() {
            YearMonth::of(date)
        } else {
            parse_default_month(default_month)
        };
        let visible = visible
            .or_else(|| YearMonth::of(self.clock.today()))
            .unwrap_or_default();

        tracing::debug!(month = %visible, selected = %self.selected, "picker opened");
        self.show(visible)
    }

    /// Grid for the visible month
    pub fn grid(&self) -> CalendarGrid {
        let today = if self.config.mark_current_day() {
            self.clock.today()
        } else {
            DateValue::NONE
        };
        CalendarGrid::build(
            self.visible.month,
            self.visible.year,
            self.config.constraints(),
            today,
        )
    }

    /// Header button flags for the visible month
    pub fn navigation(&self) -> NavigationState {
        let constraints = self.config.constraints();
        let (month, year) = (self.visible.month, self.visible.year);
        if self.config.disable_header_buttons() {
            NavigationState::new(month, year, constraints)
        } else {
            NavigationState::year_bounds_only(month, year, constraints)
        }
    }

    pub fn view(&self) -> CalendarView {
        let constraints = self.config.constraints();
        CalendarView {
            grid:              self.grid(),
            navigation:        self.navigation(),
            weekday_labels:    weekday_labels(
                constraints.first_day_of_week(),
                self.config.day_labels(),
            ),
            month_label:       self.config.month_labels().get(self.visible.month).to_owned(),
            year:              self.visible.year.get(),
            show_today_btn:    self.config.show_today_btn(),
            today_disabled:    !constraints.is_selectable(&self.clock.today()),
            selected:          self.selected,
            show_week_numbers: self.config.show_week_numbers(),
            editing_month:     self.editing_month,
            editing_year:      self.editing_year,
        }
    }

    pub fn prev_month(&mut self) -> Option<PickerEvent> {
        self.visible.prev().map(|target| self.show(target))
    }

    pub fn next_month(&mut self) -> Option<PickerEvent> {
        self.visible.next().map(|target| self.show(target))
    }

    pub fn prev_year(&mut self) -> Option<PickerEvent> {
        self.visible.prev_year().map(|target| self.show(target))
    }

    pub fn next_year(&mut self) -> Option<PickerEvent> {
        self.visible.next_year().map(|target| self.show(target))
    }

    /// Switches the month label into an editor. No-op when labels are not
    /// editable.
    pub fn begin_month_edit(&mut self) -> bool {
        self.editing_month = self.config.editable_month_and_year();
        self.editing_month
    }

    pub fn begin_year_edit(&mut self) -> bool {
        self.editing_year = self.config.editable_month_and_year();
        self.editing_year
    }

    pub const fn reset_label_edit(&mut self) {
        self.editing_month = false;
        self.editing_year = false;
    }

    /// Handles text typed into the month label editor
    pub fn edit_month_label(&mut self, text: &str) -> LabelEdit {
        let Some(month) = parse_month_label(text, self.config.month_labels()) else {
            return LabelEdit::Invalid;
        };
        self.editing_month = false;
        if month == self.visible.month {
            return LabelEdit::Unchanged;
        }
        LabelEdit::Changed(self.show(YearMonth { month, ..self.visible }))
    }

    /// Handles text typed into the year label editor
    pub fn edit_year_label(&mut self, text: &str) -> LabelEdit {
        let constraints = self.config.constraints();
        let Some(year) = parse_year_label(text, constraints.min_year(), constraints.max_year())
        else {
            return LabelEdit::Invalid;
        };
        self.editing_year = false;
        if year == self.visible.year {
            return LabelEdit::Unchanged;
        }
        LabelEdit::Changed(self.show(YearMonth { year, ..self.visible }))
    }

    /// Handles a click (or Enter/Space) on a grid cell.
    ///
    /// Leading and trailing cells page to their month; a current-month cell
    /// is selected. Disabled cells, and cells whose date the constraints
    /// rule out whatever their flag says, are ignored.
    pub fn activate_cell(&mut self, cell: &CalendarCell) -> Vec<PickerEvent> {
        if cell.disabled || !self.config.constraints().is_selectable(&cell.date) {
            tracing::debug!(date = %cell.date, "ignoring unselectable cell");
            return Vec::new();
        }
        self.reset_label_edit();
        match cell.relation {
            MonthRelation::Previous => self.prev_month().into_iter().collect(),
            MonthRelation::Next => self.next_month().into_iter().collect(),
            MonthRelation::Current => self.select(cell.date),
        }
    }

    /// Selects today, unless the constraints rule it out
    pub fn select_today(&mut self) -> Vec<PickerEvent> {
        let today = self.clock.today();
        if !self.config.constraints().is_selectable(&today) {
            tracing::debug!(%today, "today is not selectable");
            return Vec::new();
        }
        self.select(today)
    }

    /// Handles an edit of the text field.
    ///
    /// Valid text selects its date. Invalid text only produces events when
    /// it differs from what the field held before, so repeated key-ups on
    /// the same text stay quiet.
    pub fn input_changed(&mut self, text: &str) -> Vec<PickerEvent> {
        let date = self.parse(text);
        if date.is_valid() {
            let mut events = self.select(date);
            events.push(self.input_field_changed(self.input_text.clone(), true));
            return events;
        }
        if text == self.input_text {
            return Vec::new();
        }
        if text.is_empty() {
            return self.clear();
        }

        tracing::debug!(text, "input does not name a selectable date");
        self.selected = DateValue::NONE;
        self.input_text = text.to_owned();
        vec![
            PickerEvent::ModelChanged(String::new()),
            self.input_field_changed(text.to_owned(), false),
        ]
    }

    /// Drops the selection and empties the field
    pub fn clear(&mut self) -> Vec<PickerEvent> {
        tracing::debug!("selection cleared");
        self.selected = DateValue::NONE;
        self.input_text.clear();
        vec![
            PickerEvent::DateChanged(self.date_changed(DateValue::NONE)),
            self.input_field_changed(String::new(), false),
            PickerEvent::ModelChanged(String::new()),
        ]
    }

    /// Writes a value coming from the host model into the field.
    ///
    /// The value is not checked against the constraints; the model is the
    /// source of truth.
    pub fn write_value(&mut self, value: impl Into<ModelValue>) -> PickerEvent {
        let date = match value.into() {
            ModelValue::Text(text) => date_from_iso_prefix(&text),
            ModelValue::Date(date) => date,
            ModelValue::Empty => DateValue::NONE,
        };

        self.selected = if date.is_valid() { date } else { DateValue::NONE };
        self.input_text = self.format(self.selected);
        self.input_field_changed(self.input_text.clone(), self.selected.is_valid())
    }

    fn parse(&self, text: &str) -> DateValue {
        parse_date(
            text,
            self.config.date_format(),
            self.config.month_labels(),
            self.config.constraints(),
        )
    }

    fn format(&self, date: DateValue) -> String {
        format_date(&date, self.config.date_format(), self.config.month_labels())
    }

    fn show(&mut self, target: YearMonth) -> PickerEvent {
        tracing::debug!(from = %self.visible, to = %target, "calendar view changed");
        self.visible = target;
        PickerEvent::CalendarViewChanged(self.grid().view_changed())
    }

    fn select(&mut self, date: DateValue) -> Vec<PickerEvent> {
        tracing::debug!(%date, "date selected");
        self.selected = date;
        if let Some(month) = YearMonth::of(date) {
            self.visible = month;
        }
        let changed = self.date_changed(date);
        self.input_text.clone_from(&changed.formatted);
        let model = self
            .clock
            .offset_at(date)
            .and_then(|offset| to_local_iso_string(&date, offset))
            .unwrap_or_default();
        vec![PickerEvent::DateChanged(changed), PickerEvent::ModelChanged(model)]
    }

    fn date_changed(&self, date: DateValue) -> DateChanged {
        DateChanged {
            date,
            formatted: self.format(date),
            epoch_millis: self
                .clock
                .offset_at(date)
                .and_then(|offset| epoch_millis(&date, offset)),
        }
    }

    fn input_field_changed(&self, value: String, valid: bool) -> PickerEvent {
        PickerEvent::InputFieldChanged(InputFieldChanged {
            value,
            date_format: self.config.date_format().as_str().to_owned(),
            valid,
        })
    }
}
