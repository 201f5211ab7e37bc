use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1700..=2500)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies within the supported range
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        if !(i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&value) {
            return Err(DateError::InvalidYear(value));
        }
        u16::try_from(value)
            .ok()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(DateError::InvalidYear(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns true if this year has a 29th of February
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get() as i32)
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is outside `1..=MAX_MONTH`.
    pub fn new(value: i32) -> Result<Self, DateError> {
        if !(i32::from(MIN_MONTH)..=i32::from(MAX_MONTH)).contains(&value) {
            return Err(DateError::InvalidMonth(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days this month has in `year`
    pub const fn length(self, year: Year) -> u8 {
        month_length(year.get() as i32, self.0.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of `month` in `year`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is below 1 or past the end of the month.
    pub fn new(value: i32, month: Month, year: Year) -> Result<Self, DateError> {
        let max_day = month.length(year);
        let invalid = || DateError::InvalidDay {
            day: value,
            month: month.get(),
            year: year.get(),
            max_day,
        };

        if !(i32::from(MIN_DAY)..=i32::from(max_day)).contains(&value) {
            return Err(invalid());
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No month context here, so only the widest month bound applies
        let max_day = DAYS_IN_MONTH[JANUARY as usize];
        match NonZeroU8::new(value) {
            Some(day) if value <= max_day => Ok(Self(day)),
            _ => Err(DateError::DayOutOfRange {
                day: i32::from(value),
                max_day,
            }),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap-year rule: every 4th year, except centuries not divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
pub fn days_in_month(month: i32, year: i32) -> Result<u8, DateError> {
    let month = Month::new(month)?;
    Ok(month_length(year, month.get()))
}

const fn month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(value: i32) -> Year {
        Year::new(value).unwrap()
    }

    fn month(value: i32) -> Month {
        Month::new(value).unwrap()
    }

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1700).is_ok());
        assert!(Year::new(2025).is_ok());
        assert!(Year::new(2500).is_ok());
    }

    #[test]
    fn test_year_new_out_of_range() {
        assert!(matches!(Year::new(1699), Err(DateError::InvalidYear(1699))));
        assert!(matches!(Year::new(2501), Err(DateError::InvalidYear(2501))));
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(Year::new(-2024), Err(DateError::InvalidYear(-2024))));
    }

    #[test]
    fn test_year_get_and_display() {
        let y = year(2024);
        assert_eq!(y.get(), 2024);
        assert_eq!(y.to_string(), "2024");
        assert!(y.is_leap());
        assert!(!year(2100).is_leap());
    }

    #[test]
    fn test_year_try_from_u16() {
        let y: Year = 2024u16.try_into().unwrap();
        assert_eq!(y.get(), 2024);

        let result: Result<Year, _> = 1000u16.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_serde() {
        let y = year(2024);
        let json = serde_json::to_string(&y).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(y, parsed);

        assert!(serde_json::from_str::<Year>("1600").is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(-1), Err(DateError::InvalidMonth(-1))));
        assert!(matches!(Month::new(256), Err(DateError::InvalidMonth(256))));
    }

    #[test]
    fn test_month_into_u8() {
        let value: u8 = month(8).into();
        assert_eq!(value, 8);
        assert_eq!(month(8).to_string(), "8");
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, month(1), year(2024)).is_ok());
        assert!(Day::new(31, month(1), year(2024)).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, month(2), year(2023)).is_ok());
        assert!(Day::new(29, month(2), year(2023)).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, month(2), year(2024)).is_ok());
        assert!(Day::new(30, month(2), year(2024)).is_err());

        // April - 30 days
        assert!(Day::new(30, month(4), year(2024)).is_ok());
        assert!(Day::new(31, month(4), year(2024)).is_err());
    }

    #[test]
    fn test_day_new_reports_max_day() {
        let result = Day::new(31, month(2), year(2025));
        assert_eq!(
            result,
            Err(DateError::InvalidDay {
                day: 31,
                month: 2,
                year: 2025,
                max_day: 28,
            })
        );

        let result = Day::new(0, month(1), year(2025));
        assert!(matches!(
            result,
            Err(DateError::InvalidDay { day: 0, max_day: 31, .. })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let d: Day = 15u8.try_into().unwrap();
        assert_eq!(d.get(), 15);

        let result: Result<Day, _> = 0u8.try_into();
        assert_eq!(result, Err(DateError::DayOutOfRange { day: 0, max_day: 31 }));

        let result: Result<Day, _> = 32u8.try_into();
        assert_eq!(result, Err(DateError::DayOutOfRange { day: 32, max_day: 31 }));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Day must be between 1 and 31, got 32"
        );
    }

    #[test]
    fn test_day_serde() {
        let d = Day::new(15, month(8), year(2024)).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        1700,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2400,
                is_leap:     true,
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
    fn test_days_in_month_31_day_months() {
        for m in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(m, 2024), Ok(31), "Month {m} should have 31 days");
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for m in [4, 6, 9, 11] {
            assert_eq!(days_in_month(m, 2025), Ok(30), "Month {m} should have 30 days");
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2, 2024), Ok(29));
        assert_eq!(days_in_month(2, 2000), Ok(29), "Century year divisible by 400");
        assert_eq!(days_in_month(2, 2023), Ok(28));
        assert_eq!(days_in_month(2, 1900), Ok(28), "Century year not divisible by 400");
    }

    #[test]
    fn test_days_in_month_invalid_month() {
        assert_eq!(days_in_month(0, 2024), Err(DateError::InvalidMonth(0)));
        assert_eq!(days_in_month(13, 2024), Err(DateError::InvalidMonth(13)));
    }
}
