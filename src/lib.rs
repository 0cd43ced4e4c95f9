//! Monthly billing periods anchored to a cutoff day of month.
//!
//! A period for month `m` runs from the cutoff day of month `m - 1` to the
//! cutoff day of month `m`. When the cutoff does not exist in a month, the
//! opening boundary rolls forward into the next month that has it and the
//! closing boundary clamps to the month's last day.
//!
//! ```
//! let periods = billing_periods::generate_periods(31, "2023")?;
//! let february = &periods[1];
//! assert_eq!(february.start_date().to_string(), "2023-01-31");
//! assert_eq!(february.end_date().to_string(), "2023-02-28");
//! assert_eq!(february.month().to_string(), "2023-02-01");
//! # Ok::<(), billing_periods::PeriodError>(())
//! ```

mod consts;
mod date;
mod period;
mod prelude;
mod resolve;
mod types;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use date::CalendarDate;
pub use period::{BillingPeriod, BillingPeriods, PeriodError, generate_periods};
pub use resolve::{resolve_next, resolve_prev};
pub use types::{CutoffDay, Day, Month, PeriodYear, Year, days_in_month, is_leap_year, is_valid_date};

use crate::prelude::*;

/// Failure building or parsing a single calendar date component.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                month: 2,
                day: 30,
                year: 2023
            }
            .to_string(),
            "Invalid day 30 for month 2023-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(MAX_CUTOFF_DAY, MAX_DAYS_IN_MONTH);
        assert_eq!(MONTHS_PER_YEAR, usize::from(MAX_MONTH));
        assert_eq!(
            DAYS_IN_MONTH.iter().copied().max(),
            Some(MAX_DAYS_IN_MONTH)
        );
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalendarDate>();
        assert_send_sync::<BillingPeriod>();
        assert_send_sync::<BillingPeriods>();
        assert_send_sync::<PeriodError>();
    }
}
