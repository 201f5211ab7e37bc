/// Minimum supported year (inclusive)
pub const MIN_YEAR: u16 = 1700;
/// Maximum supported year (inclusive)
pub const MAX_YEAR: u16 = 2500;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

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
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Zeller counts January and February as months 13 and 14 of the previous year
pub(crate) const ZELLER_JANUARY: i32 = 13;
pub(crate) const ZELLER_FEBRUARY: i32 = 14;

/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Date component separator (DD/MM/YYYY)
pub const DATE_SEPARATOR: char = '/';
