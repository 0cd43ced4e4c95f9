/// Maximum valid calendar year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Earliest year a billing schedule may be generated for
pub const MIN_PERIOD_YEAR: u16 = 2000;
/// Latest year a billing schedule may be generated for (inclusive)
pub const MAX_PERIOD_YEAR: u16 = 2999;
/// Leading digit every period year numeral must start with
pub const PERIOD_YEAR_LEADING_DIGIT: char = '2';
/// Exact number of digits in a period year numeral
pub const PERIOD_YEAR_DIGITS: usize = 4;

/// Smallest accepted cutoff day
pub const MIN_CUTOFF_DAY: u8 = 1;
/// Largest accepted cutoff day
pub const MAX_CUTOFF_DAY: u8 = 31;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Number of billing periods generated per year
pub const MONTHS_PER_YEAR: usize = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Length of the longest month
pub const MAX_DAYS_IN_MONTH: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Interval separator between period boundaries (ISO 8601 format)
pub const PERIOD_SEPARATOR: char = '/';
