use std::str::FromStr;

use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MAX_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use crate::ParseError;

/// A concrete day of the proleptic Gregorian calendar.
///
/// Fields are ordered year, month, day so the derived ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// First day of the given month
    pub const fn first_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::FIRST,
        }
    }

    /// Last day of the given month
    pub fn last_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::last_of(year, month),
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Components as plain integers: (year, month, day)
    pub const fn ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// First day of the month this date falls in
    pub const fn start_of_month(&self) -> Self {
        Self::first_of_month(self.year, self.month)
    }

    /// Last day of the month this date falls in
    pub fn end_of_month(&self) -> Self {
        Self::last_of_month(self.year, self.month)
    }

    /// First day of the following month.
    /// Returns `None` past December of `MAX_YEAR`.
    pub fn first_of_next_month(&self) -> Option<Self> {
        let (year, month) = next_month(self.year.get(), self.month.get())?;
        Self::new(year, month, Day::FIRST.get()).ok()
    }

    /// The following day. Returns `None` past the last day of `MAX_YEAR`.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = self.ymd();
        if day < days_in_month(year, month) {
            Self::new(year, month, day + 1).ok()
        } else {
            self.first_of_next_month()
        }
    }

    /// Moves `days` forward, a month at a time where possible.
    /// Returns `None` if the result would pass `MAX_YEAR`.
    pub fn add_days(&self, days: u32) -> Option<Self> {
        let mut date = *self;
        let mut remaining = days;
        loop {
            let (year, month, day) = date.ymd();
            let left_in_month = u32::from(days_in_month(year, month) - day);
            if remaining <= left_in_month {
                // Fits in the current month: u8 arithmetic cannot overflow.
                let day = day + u8::try_from(remaining).ok()?;
                return Self::new(year, month, day).ok();
            }
            remaining -= left_in_month + 1;
            date = date.first_of_next_month()?;
        }
    }

    /// Days since 0001-01-01 (which is day 0).
    pub fn day_number(&self) -> u32 {
        let (year, month, day) = self.ymd();
        let prior_years = u32::from(year - 1);
        let year_days = prior_years * 365 + prior_years / 4 - prior_years / 100 + prior_years / 400;
        let month_days: u32 = (JANUARY..month)
            .map(|m| u32::from(days_in_month(year, m)))
            .sum();
        year_days + month_days + u32::from(day) - 1
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        i64::from(other.day_number()) - i64::from(self.day_number())
    }
}

// --- helpers for stepping ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    if month == DECEMBER {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses strict ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
                parts.len()
            )));
        };

        let year = parse_component::<u16>(year, 4)?;
        let month = parse_component::<u8>(month, 2)?;
        let day = parse_component::<u8>(day, 2)?;

        Self::new(year, month, day)
    }
}

/// Parses a fixed-width, all-digit date component.
fn parse_component<T: FromStr>(s: &str, width: usize) -> Result<T, ParseError> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
