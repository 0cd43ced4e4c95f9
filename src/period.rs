use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DECEMBER, JANUARY, MAX_CUTOFF_DAY, MAX_MONTH, MIN_CUTOFF_DAY, PERIOD_SEPARATOR};
use crate::prelude::*;
use crate::resolve::{resolve_next, resolve_prev};
use crate::{CalendarDate, CutoffDay, Day, Month, ParseError, PeriodYear};

/// One billing month: from the cutoff day of the previous month to the
/// cutoff day of this one, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBillingPeriod")]
pub struct BillingPeriod {
    start_date: CalendarDate,
    end_date:   CalendarDate,
    month:      CalendarDate,
}

/// Error type for billing period generation and boundary resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Period year is not a four-digit numeral starting with 2, or a
    /// resolver was handed year 0.
    #[error("Invalid year: {0:?} (must be a four-digit year starting with 2)")]
    InvalidYear(String),

    /// Cutoff day outside the accepted range.
    #[error("Invalid cutoff day: {0} (must be {min}-{max})", min = MIN_CUTOFF_DAY, max = MAX_CUTOFF_DAY)]
    InvalidCutoff(i64),

    /// Cutoff day that is not an integer at all.
    #[error("Invalid cutoff day: {0:?} is not a number")]
    InvalidCutoffFormat(String),

    /// Month outside `1..=12` passed to a resolver.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day no month can resolve, passed to a resolver.
    #[error("Invalid day {day} for {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// Period whose start lies after its end.
    #[error("Invalid billing period: start ({start}) is after end ({end})")]
    InvalidPeriod { start: CalendarDate, end: CalendarDate },

    /// Period whose month tag is not the first day of a month.
    #[error("Invalid billing month: {0} is not the first day of a month")]
    InvalidMonthTag(CalendarDate),

    /// Error building a date component.
    #[error(transparent)]
    Date(#[from] ParseError),
}

impl BillingPeriod {
    /// # Errors
    /// - `PeriodError::InvalidPeriod` if `start_date > end_date`.
    /// - `PeriodError::InvalidMonthTag` if `month` is not a first of month.
    pub fn new(
        start_date: CalendarDate,
        end_date: CalendarDate,
        month: CalendarDate,
    ) -> Result<Self, PeriodError> {
        if start_date > end_date {
            return Err(PeriodError::InvalidPeriod {
                start: start_date,
                end:   end_date,
            });
        }
        if month.day() != Day::FIRST {
            return Err(PeriodError::InvalidMonthTag(month));
        }
        Ok(Self {
            start_date,
            end_date,
            month,
        })
    }

    /// Opening boundary of the period
    pub const fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    /// Closing boundary of the period
    pub const fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    /// First day of the billing month this period represents
    pub const fn month(&self) -> CalendarDate {
        self.month
    }

    /// Checks if the date lies within the period, boundaries included
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }

    /// Length of the period in days, counting both boundaries
    pub fn days(&self) -> u32 {
        self.end_date.day_number() - self.start_date.day_number() + 1
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PERIOD_SEPARATOR}{}", self.start_date, self.end_date)
    }
}

#[derive(Deserialize)]
struct RawBillingPeriod {
    start_date: CalendarDate,
    end_date:   CalendarDate,
    month:      CalendarDate,
}

impl TryFrom<RawBillingPeriod> for BillingPeriod {
    type Error = PeriodError;

    fn try_from(raw: RawBillingPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.end_date, raw.month)
    }
}

/// The twelve billing periods of a year, January first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Into, Serialize)]
#[serde(transparent)]
pub struct BillingPeriods(Vec<BillingPeriod>);

impl BillingPeriods {
    /// Builds the periods for `year` anchored on `cutoff`.
    ///
    /// # Errors
    /// Only if a boundary cannot be resolved, which validated inputs rule out.
    pub fn for_year(cutoff: CutoffDay, year: PeriodYear) -> Result<Self, PeriodError> {
        let day = cutoff.get();
        let end_year = year.get();

        (JANUARY..=DECEMBER)
            .map(|end_month| {
                let (start_year, start_month) = previous_month(end_year, end_month);
                let start_date = resolve_next(start_year, start_month, day)?;
                let end_date = resolve_prev(end_year, end_month, day)?;
                let month = CalendarDate::first_of_month(year.year(), Month::new(end_month)?);
                BillingPeriod::new(start_date, end_date, month)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// The period for a calendar month
    pub fn for_month(&self, month: Month) -> Option<&BillingPeriod> {
        self.0.get(usize::from(month.get() - 1))
    }

    /// The earliest period containing `date`. Adjacent periods share a
    /// boundary day; it belongs to the earlier period.
    pub fn period_containing(&self, date: &CalendarDate) -> Option<&BillingPeriod> {
        self.0.iter().find(|period| period.contains(date))
    }
}

impl IntoIterator for BillingPeriods {
    type Item = BillingPeriod;
    type IntoIter = std::vec::IntoIter<BillingPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BillingPeriods {
    type Item = &'a BillingPeriod;
    type IntoIter = std::slice::Iter<'a, BillingPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generates the twelve billing periods of `period_year` for `cutoff_date`.
///
/// `period_year` is taken by its decimal rendering, so `"2023"`, `2023_u16`
/// and `2023_i64` are equivalent; it must match `^2\d{3}$`. The year is
/// checked before the cutoff. No partial result is ever returned.
///
/// # Errors
/// - `PeriodError::InvalidYear` if the year numeral is malformed.
/// - `PeriodError::InvalidCutoff` if the cutoff is outside `1..=31`.
pub fn generate_periods(
    cutoff_date: impl Into<i64>,
    period_year: impl fmt::Display,
) -> Result<BillingPeriods, PeriodError> {
    let year = PeriodYear::from_numeral(period_year)?;
    let cutoff = CutoffDay::new(cutoff_date)?;
    BillingPeriods::for_year(cutoff, year)
}

// January's period opens in December of the previous year.
const fn previous_month(year: u16, month: u8) -> (u16, u8) {
    if month == JANUARY {
        (year.saturating_sub(1), DECEMBER)
    } else {
        (year, month - 1)
    }
}
