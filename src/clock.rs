//! Where "today" and the local UTC offset come from.

use chrono::{Datelike, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};

use crate::DateValue;

/// Source of the current date and of local offsets.
///
/// The picker never reads the system clock directly, so tests and hosts in
/// other time zones can supply their own.
pub trait Clock {
    /// Today's date in the host's local time zone
    fn today(&self) -> DateValue;

    /// UTC offset in effect at local midnight of `date`
    fn offset_at(&self, date: DateValue) -> Option<FixedOffset>;
}

/// Reads the operating system's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DateValue {
        let now = Local::now().date_naive();
        let month = u8::try_from(now.month()).unwrap_or_default();
        let day = u8::try_from(now.day()).unwrap_or_default();
        u16::try_from(now.year())
            .ok()
            .and_then(|year| DateValue::new(year, month, day).ok())
            .unwrap_or(DateValue::NONE)
    }

    fn offset_at(&self, date: DateValue) -> Option<FixedOffset> {
        let naive = NaiveDate::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )?
        .and_hms_opt(0, 0, 0)?;
        // A midnight skipped by a DST jump has no local time; use the next hour.
        Local
            .from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                naive
                    .checked_add_signed(chrono::Duration::hours(1))
                    .and_then(|later| Local.from_local_datetime(&later).earliest())
            })
            .map(|dt| *dt.offset())
    }
}

/// A clock frozen at one date and offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub today:  DateValue,
    pub offset: FixedOffset,
}

impl FixedClock {
    pub const fn new(today: DateValue, offset: FixedOffset) -> Self {
        Self { today, offset }
    }

    /// Frozen at `today` in UTC
    pub fn utc(today: DateValue) -> Self {
        Self {
            today,
            offset: Utc.fix(),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> DateValue {
        self.today
    }

    fn offset_at(&self, date: DateValue) -> Option<FixedOffset> {
        date.is_valid().then_some(self.offset)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> DateValue {
        (**self).today()
    }

    fn offset_at(&self, date: DateValue) -> Option<FixedOffset> {
        (**self).offset_at(date)
    }
}
