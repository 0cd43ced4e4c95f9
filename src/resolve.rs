//! Turning a possibly nonexistent `year-month-day` into a real date.
//!
//! Cutoff days are applied to every month regardless of its length, so
//! `2023-02-30` or `2023-04-31` come up routinely. [`resolve_next`] pushes
//! such a day forward and is used for opening boundaries; [`resolve_prev`]
//! clamps it back into its own month and is used for closing boundaries.

use crate::consts::{MAX_DAYS_IN_MONTH, MIN_DAY};
use crate::types::is_valid_date;
use crate::{CalendarDate, Month, PeriodError, Year};

/// Resolves `year-month-day` to the nearest real date at or after it.
///
/// A valid date comes back unchanged. Otherwise `day` is treated as an offset
/// from the start of the following month (`first + (day - 1)`), and the step
/// repeats a month at a time until the month reached actually has `day`
/// days. For `2023-02-29` that is `2023-03-29`.
///
/// # Errors
/// - `PeriodError::InvalidMonth` if `month` is outside `1..=12`.
/// - `PeriodError::InvalidYear` if `year` is 0 or beyond `MAX_YEAR`.
/// - `PeriodError::InvalidDay` for day 0 or a day no month has.
///
/// December has 31 days, so resolving a day in `1..=31` never leaves the
/// calendar, even in year `MAX_YEAR`.
pub fn resolve_next(year: u16, month: u8, day: u8) -> Result<CalendarDate, PeriodError> {
    let (typed_year, typed_month) = checked_month(year, month)?;
    if !(MIN_DAY..=MAX_DAYS_IN_MONTH).contains(&day) {
        return Err(PeriodError::InvalidDay { year, month, day });
    }
    if is_valid_date(year, month, day) {
        return Ok(CalendarDate::new(year, month, day)?);
    }

    let offset = u32::from(day - MIN_DAY);
    let mut anchor = CalendarDate::first_of_month(typed_year, typed_month);
    // Terminates: a month shorter than 31 days is always followed within
    // two steps by one that has 31, and December is never short.
    loop {
        let candidate = anchor
            .first_of_next_month()
            .and_then(|first| first.add_days(offset))
            .ok_or(PeriodError::InvalidDay { year, month, day })?;
        if day <= candidate.month().length(candidate.year()) {
            return Ok(candidate);
        }
        anchor = candidate;
    }
}

/// Resolves `year-month-day` to the nearest real date at or before it
/// within the same month: a valid date comes back unchanged, an overflowing
/// day clamps to the month's last day.
///
/// # Errors
/// - `PeriodError::InvalidMonth` if `month` is outside `1..=12`.
/// - `PeriodError::InvalidYear` if `year` is 0 or beyond `MAX_YEAR`.
/// - `PeriodError::InvalidDay` for day 0.
pub fn resolve_prev(year: u16, month: u8, day: u8) -> Result<CalendarDate, PeriodError> {
    let (typed_year, typed_month) = checked_month(year, month)?;
    if day < MIN_DAY {
        return Err(PeriodError::InvalidDay { year, month, day });
    }
    if is_valid_date(year, month, day) {
        return Ok(CalendarDate::new(year, month, day)?);
    }

    Ok(CalendarDate::last_of_month(typed_year, typed_month))
}

fn checked_month(year: u16, month: u8) -> Result<(Year, Month), PeriodError> {
    let typed_month = Month::new(month).map_err(|_| PeriodError::InvalidMonth(month))?;
    let typed_year = Year::new(year).map_err(|_| PeriodError::InvalidYear(year.to_string()))?;
    Ok((typed_year, typed_month))
}
