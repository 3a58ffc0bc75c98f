use core::fmt;

use thiserror::Error;

/// A month of the gregorian calendar, numbered from 1 for january.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// # Panics
    ///
    /// If the number is not in `1..=12`.
    #[must_use]
    pub const fn from_number(number: usize) -> Self {
        Self::ALL[number - 1]
    }

    #[must_use]
    pub const fn number(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[self.number() % 12]
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.number() + 10) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.number().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a month, expected a number in 1..=12")]
pub struct InvalidMonth(pub usize);

impl TryFrom<usize> for Month {
    type Error = InvalidMonth;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(InvalidMonth(number))
    }
}
