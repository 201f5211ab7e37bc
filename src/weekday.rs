use crate::{DAYS_PER_WEEK, DateError, prelude::*};
use serde::{Deserialize, Serialize};

/// Day of the week, numbered the way the congruence in [`crate::compute_weekday`] yields it.
///
/// The index starts at Saturday, not at Sunday or Monday:
///
/// | index | day       |
/// |-------|-----------|
/// | 0     | Saturday  |
/// | 1     | Sunday    |
/// | 2     | Monday    |
/// | 3     | Tuesday   |
/// | 4     | Wednesday |
/// | 5     | Thursday  |
/// | 6     | Friday    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    /// All weekdays in index order
    pub const ALL: [Self; DAYS_PER_WEEK as usize] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Position of this day in the Saturday-first sequence
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name of the day
    pub const fn name(self) -> &'static str {
        match self {
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }

    /// The following day, wrapping Friday back to Saturday
    pub const fn next(self) -> Self {
        Self::ALL[((self as u8 + 1) % DAYS_PER_WEEK) as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(DateError::InvalidIndex(i32::from(index)))
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.index()
    }
}

/// Name of the weekday at `index` in the Saturday-first sequence.
///
/// # Errors
/// Returns `DateError::InvalidIndex` if `index` is outside `0..=6`.
pub fn weekday_name(index: i32) -> Result<&'static str, DateError> {
    u8::try_from(index)
        .map_err(|_| DateError::InvalidIndex(index))
        .and_then(Weekday::try_from)
        .map(Weekday::name)
        .inspect_err(|e| tracing::error!("{e}"))
}
