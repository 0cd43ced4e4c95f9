//! Shorthand constructors for tests.

use crate::{CalendarDate, CutoffDay, Month, PeriodYear};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month should be valid")
}

pub fn cutoff(value: u8) -> CutoffDay {
    CutoffDay::new(value).expect("test cutoff should be valid")
}

pub fn period_year(value: u16) -> PeriodYear {
    PeriodYear::new(value).expect("test period year should be valid")
}
