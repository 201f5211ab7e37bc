mod consts;
mod prelude;
pub mod session;
mod types;
mod weekday;

pub use consts::*;
pub use session::{Report, evaluate, run_session};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use weekday::{Weekday, weekday_name};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A validated Gregorian calendar date within `MIN_YEAR..=MAX_YEAR`.
///
/// Fields are ordered year, month, day so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{}/{}", "day.get()", "month.get()", "year.get()")]
pub struct Date {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0} (expected DD/MM/YYYY with numbers)")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
    #[error("Year must be between {min} and {max}, got {0}", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),
    #[error("Month must be between {min} and {max}, got {0}", min = MIN_MONTH, max = MAX_MONTH)]
    InvalidMonth(i32),
    #[error("Day must be between {min} and {max_day} for {month}/{year}, got {day}", min = MIN_DAY)]
    InvalidDay {
        day:     i32,
        month:   u8,
        year:    u16,
        max_day: u8,
    },
    #[error("Day must be between {min} and {max_day}, got {day}", min = MIN_DAY)]
    DayOutOfRange { day: i32, max_day: u8 },
    #[error("Invalid day index calculated: {0}")]
    InvalidIndex(i32),
    #[error("I/O error: {0}")]
    Io(String),
}

impl DateError {
    /// True for errors caused by the shape of the input rather than the date it names
    pub const fn is_input_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_) | Self::EmptyInput)
    }

    /// True for range and calendar violations of an otherwise well-formed date
    pub const fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_)
                | Self::InvalidMonth(_)
                | Self::InvalidDay { .. }
                | Self::DayOutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for DateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl Date {
    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` does not exist in that month.
    /// A `Day` built via `TryFrom<u8>` was only checked against 31.
    pub fn new(day: Day, month: Month, year: Year) -> Result<Self, DateError> {
        let day = Day::new(i32::from(day.get()), month, year)?;
        Ok(Self { year, month, day })
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month number
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Day of the week this date falls on
    pub fn weekday(&self) -> Weekday {
        let index = compute_weekday(
            i32::from(self.day()),
            i32::from(self.month()),
            i32::from(self.year()),
        );
        // A validated date always lands in 0..=6
        Weekday::ALL[usize::from(index)]
    }

    /// Returns the components as (day, month, year)
    pub const fn to_dmy(&self) -> (u8, u8, u16) {
        (self.day.get(), self.month.get(), self.year.get())
    }
}

/// Validates a (day, month, year) triple, checking year, then month, then day.
///
/// # Errors
/// Returns the first violated constraint: `InvalidYear`, `InvalidMonth` or `InvalidDay`.
pub fn validate_date(day: i32, month: i32, year: i32) -> Result<Date, DateError> {
    let year = Year::new(year)?;
    let month = Month::new(month)?;
    let day = Day::new(day, month, year)?;
    Ok(Date { year, month, day })
}

/// Returns true if the triple names a supported date; otherwise logs why it doesn't.
pub fn is_valid_date(day: i32, month: i32, year: i32) -> bool {
    match validate_date(day, month, year) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(day, month, year, "{e}");
            false
        }
    }
}

/// Zeller's congruence with a Saturday-first result (0 = Saturday, 6 = Friday).
///
/// January and February count as months 13 and 14 of the previous year.
/// Meaningful for valid dates; any input still yields an index in `0..=6`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_weekday(day: i32, month: i32, year: i32) -> u8 {
    let (month, year) = if month == i32::from(JANUARY) {
        (ZELLER_JANUARY, i64::from(year) - 1)
    } else if month == i32::from(FEBRUARY) {
        (ZELLER_FEBRUARY, i64::from(year) - 1)
    } else {
        (month, i64::from(year))
    };
    let (day, month) = (i64::from(day), i64::from(month));

    let century = year / 100;
    let year_of_century = year % 100;

    // i64 holds every term for any i32 input
    let h = (day
        + (13 * (month + 1)) / 5
        + year_of_century
        + year_of_century / 4
        + century / 4
        + 5 * century)
        .rem_euclid(i64::from(DAYS_PER_WEEK));

    tracing::debug!(day, month, year, index = h, "computed weekday index");
    h as u8
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let day = parse_component(day, trimmed)?;
        let month = parse_component(month, trimmed)?;
        let year = parse_component(year, trimmed)?;

        validate_date(day, month, year)
    }
}

/// Parses one slash-separated field; any non-integer marks the whole input malformed
fn parse_component(part: &str, input: &str) -> Result<i32, DateError> {
    part.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(input.to_owned()))
}

impl TryFrom<(i32, i32, i32)> for Date {
    type Error = DateError;

    fn try_from((day, month, year): (i32, i32, i32)) -> Result<Self, Self::Error> {
        validate_date(day, month, year)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
