//! The 6×7 month grid shown by a picker.

use serde::Serialize;

use crate::consts::{DAYS_PER_WEEK, MAX_YEAR, MIN_DAY, WEEKS_PER_GRID};
use crate::types::{following_month, previous_month};
use crate::{
    CalendarViewChanged, ConstraintSet, DateValue, DayLabels, DayOfMonth, Month, Weekday, Year,
    YearMonth, days_in_month, iso_week_number, weekday_of,
};

/// Which month a cell belongs to, relative to the displayed one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthRelation {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date:     DateValue,
    pub relation: MonthRelation,
    pub weekday:  Weekday,
    pub is_today: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub cells:       [CalendarCell; DAYS_PER_WEEK],
    /// ISO 8601 week of the row; only set for Monday-first grids
    pub week_number: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    pub year:  Year,
    pub month: Month,
    pub weeks: [CalendarWeek; WEEKS_PER_GRID],
}

impl CalendarGrid {
    /// Lays out `month` of `year` as six full weeks.
    ///
    /// The first row starts with the trailing days of the previous month so
    /// that the 1st lands in its weekday column; rows after the last day are
    /// filled from the next month. Cell flags come from `constraints` and
    /// `today`.
    pub fn build(month: Month, year: Year, constraints: &ConstraintSet, today: DateValue) -> Self {
        let (y, m) = (year.get(), month.get());
        let first_day = constraints.first_day_of_week();
        let lead = weekday_of(y, m, MIN_DAY).column_from(first_day);
        let (prev_y, prev_m) = previous_month(y, m);
        let (next_y, next_m) = following_month(y, m);
        let days_prev = days_in_month(prev_y, prev_m);
        let days_this = days_in_month(y, m);

        tracing::trace!(year = y, month = m, lead, "building calendar grid");

        // Spill-over days beyond year 1 or MAX_YEAR are blank sentinel cells.
        let spill = |year: u16, month: u8, day: u8| {
            if (1..=MAX_YEAR).contains(&year) {
                DateValue::from_valid(year, month, day)
            } else {
                DateValue::NONE
            }
        };

        let mut dates = Vec::with_capacity(DAYS_PER_WEEK * WEEKS_PER_GRID);
        // lead < 7 <= days_prev, so this never underflows
        for day in (days_prev + 1 - lead as u8)..=days_prev {
            dates.push((spill(prev_y, prev_m, day), MonthRelation::Previous));
        }
        for day in MIN_DAY..=days_this {
            dates.push((DateValue::from_valid(y, m, day), MonthRelation::Current));
        }
        let mut day = MIN_DAY;
        while dates.len() < DAYS_PER_WEEK * WEEKS_PER_GRID {
            dates.push((spill(next_y, next_m, day), MonthRelation::Next));
            day += 1;
        }

        let weeks = std::array::from_fn(|w| {
            let cells: [CalendarCell; DAYS_PER_WEEK] = std::array::from_fn(|column| {
                let (date, relation) = dates[w * DAYS_PER_WEEK + column];
                CalendarCell {
                    date,
                    relation,
                    weekday: Weekday::from_index(first_day.index() + column),
                    is_today: relation == MonthRelation::Current && date == today,
                    disabled: !date.is_valid() || !constraints.is_selectable(&date),
                }
            });
            // Every cell of a Monday-first row shares one ISO week.
            let week_number = (first_day == Weekday::Monday)
                .then(|| cells.iter().find(|cell| cell.date.is_valid()))
                .flatten()
                .and_then(|cell| {
                    iso_week_number(cell.date.year(), cell.date.month(), cell.date.day())
                });
            CalendarWeek { cells, week_number }
        });

        Self { year, month, weeks }
    }

    pub const fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }

    /// All 42 cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|week| week.cells.iter())
    }

    /// Finds the cell showing `date`, preferring the current-month one.
    /// Blank cells are never found.
    pub fn find(&self, date: &DateValue) -> Option<&CalendarCell> {
        if date.is_none() {
            return None;
        }
        self.cells()
            .filter(|cell| cell.date == *date)
            .min_by_key(|cell| cell.relation != MonthRelation::Current)
    }

    /// Payload announcing that this month is now on screen
    pub fn view_changed(&self) -> CalendarViewChanged {
        let ym = self.year_month();
        let first = ym.first_day();
        let last = ym.last_day();
        CalendarViewChanged {
            year:  self.year.get(),
            month: self.month.get(),
            first: DayOfMonth {
                number:  first.day(),
                weekday: weekday_of(first.year(), first.month(), first.day()),
            },
            last:  DayOfMonth {
                number:  last.day(),
                weekday: weekday_of(last.year(), last.month(), last.day()),
            },
        }
    }
}

/// Column headers, starting at `first_day`
pub fn weekday_labels(first_day: Weekday, labels: &DayLabels) -> [String; DAYS_PER_WEEK] {
    std::array::from_fn(|column| {
        labels
            .get(Weekday::from_index(first_day.index() + column))
            .to_owned()
    })
}
