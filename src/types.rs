use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_CUTOFF_DAY, MAX_MONTH, MAX_PERIOD_YEAR, MAX_YEAR, MIN_CUTOFF_DAY, MIN_DAY, MIN_PERIOD_YEAR,
    PERIOD_YEAR_DIGITS, PERIOD_YEAR_LEADING_DIGIT,
};
use crate::{ParseError, PeriodError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days this month has in the given year
    #[inline]
    pub const fn length(self, year: Year) -> u8 {
        days_in_month(year.get(), self.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        if !is_valid_date(year, month, value) {
            return Err(ParseError::InvalidDay {
                month,
                day: value,
                year,
            });
        }

        NonZeroU8::new(value).map(Self).ok_or(ParseError::InvalidDay {
            month,
            day: value,
            year,
        })
    }

    /// First day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Last day of the given month
    pub fn last_of(year: Year, month: Month) -> Self {
        // Month lengths are never zero.
        Self(NonZeroU8::new(month.length(year)).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// The day of month a billing cycle is anchored to, in `1..=31`.
///
/// A cutoff of 31 is legal even though most months are shorter; the period
/// generator resolves missing days per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CutoffDay(NonZeroU8);

impl CutoffDay {
    /// Creates a cutoff day from any integer.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidCutoff` if the value is outside `1..=31`.
    pub fn new(value: impl Into<i64>) -> Result<Self, PeriodError> {
        let value = value.into();
        u8::try_from(value)
            .ok()
            .filter(|day| (MIN_CUTOFF_DAY..=MAX_CUTOFF_DAY).contains(day))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(PeriodError::InvalidCutoff(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i64> for CutoffDay {
    type Error = PeriodError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for CutoffDay {
    type Error = PeriodError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CutoffDay> for u8 {
    fn from(cutoff: CutoffDay) -> Self {
        cutoff.get()
    }
}

impl FromStr for CutoffDay {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| PeriodError::InvalidCutoffFormat(s.to_owned()))?;
        Self::new(value)
    }
}

impl fmt::Display for CutoffDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A year billing periods can be generated for: a four-digit numeral
/// starting with `2`, i.e. `2000..=2999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct PeriodYear(Year);

impl PeriodYear {
    /// # Errors
    /// Returns `PeriodError::InvalidYear` if the value is outside `2000..=2999`.
    pub fn new(value: u16) -> Result<Self, PeriodError> {
        if !(MIN_PERIOD_YEAR..=MAX_PERIOD_YEAR).contains(&value) {
            return Err(PeriodError::InvalidYear(value.to_string()));
        }
        Ok(Self(Year::new(value)?))
    }

    /// Accepts anything whose decimal rendering is exactly four digits with a
    /// leading `2`: `"2023"` and `2023` pass, `" 2023"`, `"+2023"` and
    /// `"02023"` do not.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` carrying the rendered value.
    pub fn from_numeral(value: impl fmt::Display) -> Result<Self, PeriodError> {
        let rendered = value.to_string();
        let well_formed = rendered.len() == PERIOD_YEAR_DIGITS
            && rendered.starts_with(PERIOD_YEAR_LEADING_DIGIT)
            && rendered.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(PeriodError::InvalidYear(rendered));
        }
        rendered
            .parse::<u16>()
            .map_err(|_| PeriodError::InvalidYear(rendered.clone()))
            .and_then(Self::new)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    #[inline]
    pub const fn year(self) -> Year {
        self.0
    }
}

impl TryFrom<u16> for PeriodYear {
    type Error = PeriodError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PeriodYear> for u16 {
    fn from(year: PeriodYear) -> Self {
        year.get()
    }
}

impl FromStr for PeriodYear {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_numeral(s)
    }
}

impl fmt::Display for PeriodYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`. Months outside `1..=12` have 0 days.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Whether `year-month-day` names a real day of the proleptic Gregorian
/// calendar. Total over every input: out-of-range components are `false`.
pub const fn is_valid_date(year: u16, month: u8, day: u8) -> bool {
    if year == 0 || year > MAX_YEAR || month == 0 || month > MAX_MONTH {
        return false;
    }
    day >= MIN_DAY && day <= days_in_month(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_display_is_zero_padded() {
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
        assert_eq!(Year::new(999).unwrap().to_string(), "0999");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_display_and_length() {
        let feb = Month::new(2).unwrap();
        assert_eq!(feb.to_string(), "02");
        assert_eq!(feb.length(Year::new(2024).unwrap()), 29);
        assert_eq!(feb.length(Year::new(2023).unwrap()), 28);
    }

    #[test]
    fn test_day_new() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(ParseError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ParseError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
    }

    #[test]
    fn test_day_last_of() {
        let leap = Year::new(2024).unwrap();
        let plain = Year::new(2023).unwrap();
        assert_eq!(Day::last_of(leap, Month::new(2).unwrap()).get(), 29);
        assert_eq!(Day::last_of(plain, Month::new(2).unwrap()).get(), 28);
        assert_eq!(Day::last_of(plain, Month::new(4).unwrap()).get(), 30);
        assert_eq!(Day::last_of(plain, Month::new(12).unwrap()).get(), 31);
        assert_eq!(Day::FIRST.get(), 1);
    }

    #[test]
    fn test_cutoff_day_range() {
        for value in 1..=31_i64 {
            assert_eq!(i64::from(CutoffDay::new(value).unwrap().get()), value);
        }
        for value in [0_i64, -1, -10, 32, 50, 100, 256, i64::MAX, i64::MIN] {
            assert_eq!(
                CutoffDay::new(value),
                Err(PeriodError::InvalidCutoff(value)),
                "cutoff {value} should be rejected"
            );
        }
    }

    #[test]
    fn test_cutoff_day_from_str() {
        assert_eq!("15".parse::<CutoffDay>().unwrap().get(), 15);
        assert_eq!(" 7 ".parse::<CutoffDay>().unwrap().get(), 7);
        assert_eq!("0".parse::<CutoffDay>(), Err(PeriodError::InvalidCutoff(0)));
        assert!(matches!(
            "fifteen".parse::<CutoffDay>(),
            Err(PeriodError::InvalidCutoffFormat(_))
        ));
    }

    #[test]
    fn test_cutoff_day_serde() {
        let cutoff: CutoffDay = serde_json::from_str("31").unwrap();
        assert_eq!(cutoff.get(), 31);
        assert_eq!(serde_json::to_string(&cutoff).unwrap(), "31");
        assert!(serde_json::from_str::<CutoffDay>("32").is_err());
        assert!(serde_json::from_str::<CutoffDay>("-1").is_err());
    }

    #[test]
    fn test_period_year_numeral_cases() {
        struct TestCase {
            input: &'static str,
            valid: bool,
        }

        let cases = [
            TestCase { input: "2000", valid: true },
            TestCase { input: "2023", valid: true },
            TestCase { input: "2999", valid: true },
            TestCase { input: "1999", valid: false },
            TestCase { input: "3000", valid: false },
            TestCase { input: "1234", valid: false },
            TestCase { input: "23", valid: false },
            TestCase { input: "202", valid: false },
            TestCase { input: "20234", valid: false },
            TestCase { input: "abcd", valid: false },
            TestCase { input: "202a", valid: false },
            TestCase { input: "", valid: false },
            TestCase { input: " 2023", valid: false },
            TestCase { input: "2023 ", valid: false },
            TestCase { input: "+2023", valid: false },
            TestCase { input: "２０２３", valid: false },
        ];

        for case in &cases {
            let result = case.input.parse::<PeriodYear>();
            assert_eq!(
                result.is_ok(),
                case.valid,
                "year {:?}: expected valid={}",
                case.input,
                case.valid
            );
            if !case.valid {
                assert_eq!(result, Err(PeriodError::InvalidYear(case.input.to_owned())));
            }
        }
    }

    #[test]
    fn test_period_year_from_integers() {
        assert_eq!(PeriodYear::from_numeral(2023_u16).unwrap().get(), 2023);
        assert_eq!(PeriodYear::from_numeral(2000_i32).unwrap().get(), 2000);
        assert!(PeriodYear::from_numeral(-2023_i32).is_err());
        assert!(PeriodYear::from_numeral(1999_u32).is_err());
        assert!(PeriodYear::new(3000).is_err());
        assert_eq!(PeriodYear::try_from(2999_u16).unwrap().year(), Year::new(2999).unwrap());
    }

    #[test]
    fn test_period_year_serde() {
        let year: PeriodYear = serde_json::from_str("2024").unwrap();
        assert_eq!(year.get(), 2024);
        assert_eq!(serde_json::to_string(&year).unwrap(), "2024");
        assert!(serde_json::from_str::<PeriodYear>("1999").is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_all_months() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn test_days_in_month_out_of_range_is_zero() {
        for month in [0, 13, 14, 200, u8::MAX] {
            assert_eq!(days_in_month(2023, month), 0, "Month {month}");
            assert_eq!(days_in_month(2024, month), 0, "Month {month}");
        }
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(2023, 1, 31));
        assert!(is_valid_date(2024, 2, 29));
        assert!(!is_valid_date(2023, 2, 29));
        assert!(!is_valid_date(2023, 4, 31));
        assert!(!is_valid_date(2023, 1, 0));
        assert!(!is_valid_date(2023, 0, 15));
        assert!(!is_valid_date(2023, 13, 1));
        assert!(!is_valid_date(0, 1, 1));
        assert!(!is_valid_date(10000, 1, 1));
        assert!(!is_valid_date(2023, 255, 255));
    }
}
