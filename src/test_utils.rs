//! Construction helpers shared by unit tests.

use crate::{ConstraintSet, DateRange, DateValue, Month, Year, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> DateValue {
    DateValue::new(year, month, day).expect("test date must be valid")
}

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year must be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month must be valid")
}

pub fn year_month(y: u16, m: u8) -> YearMonth {
    YearMonth::new(year(y), month(m))
}

pub fn range(begin: (u16, u8, u8), end: (u16, u8, u8)) -> DateRange {
    DateRange::new(date(begin.0, begin.1, begin.2), date(end.0, end.1, end.2))
        .expect("test range must be ordered")
}

pub fn unconstrained() -> ConstraintSet {
    ConstraintSet::default()
}
