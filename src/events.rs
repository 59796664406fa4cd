//! Notifications a picker session hands back to its host.

use serde::Serialize;

use crate::{DateValue, Weekday};

/// A new selection, or the sentinel when the selection was cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateChanged {
    pub date:         DateValue,
    /// The date rendered with the configured pattern, empty when cleared
    pub formatted:    String,
    /// Local midnight in epoch milliseconds
    pub epoch_millis: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOfMonth {
    pub number:  u8,
    pub weekday: Weekday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarViewChanged {
    pub year:  u16,
    pub month: u8,
    pub first: DayOfMonth,
    pub last:  DayOfMonth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFieldChanged {
    pub value:       String,
    pub date_format: String,
    pub valid:       bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PickerEvent {
    DateChanged(DateChanged),
    CalendarViewChanged(CalendarViewChanged),
    InputFieldChanged(InputFieldChanged),
    /// Value to write back into the host model: a local ISO string or empty
    ModelChanged(String),
}

impl PickerEvent {
    pub const fn as_date_changed(&self) -> Option<&DateChanged> {
        match self {
            Self::DateChanged(event) => Some(event),
            _ => None,
        }
    }

    pub const fn as_view_changed(&self) -> Option<&CalendarViewChanged> {
        match self {
            Self::CalendarViewChanged(event) => Some(event),
            _ => None,
        }
    }

    pub const fn as_input_changed(&self) -> Option<&InputFieldChanged> {
        match self {
            Self::InputFieldChanged(event) => Some(event),
            _ => None,
        }
    }

    pub fn as_model_changed(&self) -> Option<&str> {
        match self {
            Self::ModelChanged(value) => Some(value),
            _ => None,
        }
    }
}
