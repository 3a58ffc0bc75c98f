use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::iter_const;
use crate::time::{Date, DateRange, Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(try_from = "usize")]
#[serde(into = "usize")]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make sense to got past this date.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    /// The last year that can be planned, later years are rejected when parsed.
    pub const MAX: Self = Self(9999);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.as_usize() % 4 == 0 && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// The number of days in this year that have passed at the end of each month.
    ///
    /// Index `0` is always `0`, index `12` is the number of days in the year.
    #[must_use]
    pub(super) const fn cumulative_days(&self) -> [usize; 13] {
        let mut result = [0; 13];

        iter_const!(for i in 1,..13 => {
            result[i] = result[i - 1] + self.number_of_days_in_month(Month::from_number(i));
        });

        result
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (_, _, day_ref, week_day_ref) = Self::BASE_DATE;

        let days = self.days_since_base_date()
            + self.cumulative_days()[month.number() - 1]
            + (day - day_ref);

        week_day_ref.add_days(days)
    }

    /// Returns the number of days between 0000-01-01 and the first day of this year.
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.as_usize();
        if year == 0 {
            return 0;
        }

        // the year 0 is a leap year, therefore the + 1
        let previous = year - 1;
        let leap_years = previous / 4 - previous / 100 + previous / 400 + 1;

        year * 365 + leap_years
    }

    pub(super) const fn from_days_since_base_date(days: usize) -> Self {
        // a year has at most 366 days, so this is a lower bound:
        let mut year = Year::new(days / 366);

        while year.next().days_since_base_date() <= days {
            year = year.next();
        }

        year
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn prev(&self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }

    /// January 1st of this year.
    #[must_use]
    pub const fn first_day(&self) -> Date {
        Date::first_day(*self, Month::January)
    }

    /// December 31st of this year.
    #[must_use]
    pub const fn last_day(&self) -> Date {
        Date::last_day(*self, Month::December)
    }

    /// Iterates over every date of this year in ascending order.
    pub fn dates(&self) -> DateRange {
        DateRange::new(self.first_day(), self.last_day())
    }

    /// Returns `true` if the date lies in this year.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the year {0} is after {max}", max = Year::MAX)]
pub struct InvalidYear(pub usize);

impl TryFrom<usize> for Year {
    type Error = InvalidYear;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value > Self::MAX.as_usize() {
            return Err(InvalidYear(value));
        }

        Ok(Self::new(value))
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_leap_year() {
        // from: https://www.calendar.best/leap-years.html
        macro_rules! assert_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should be a leap year")
                    );
                )*
            };
        }

        macro_rules! assert_not_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        !Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should not be a leap year")
                    );
                )*
            };
        }

        assert_leap_years![
            1904, 1908, 1912, 1916, 1920, 1924, 1928, 1932, 1936, 1940, 1944, 1948, 1952, 1956,
            1960, 1964, 1968, 1972, 1976, 1980, 1984, 1988, 1992, 1996, 2000, 2004, 2008, 2012,
            2016, 2020, 2024, 2028, 2032, 2036, 2040, 2044, 2048, 2052, 2056, 2060, 2064, 2068,
            2072, 2076, 2080, 2084, 2088, 2092, 2096, 2400
        ];

        assert_not_leap_years![
            1900, 1901, 1902, 1903, 1905, 1906, 1907, 1909, 1910, 1911, 1913, 1914, 1915, 1917,
            1918, 1919, 1921, 1922, 1923, 1925, 1926, 1927, 1929, 1930, 1931, 2023, 2025, 2100,
            2200, 2300, 2500, 2600, 2700, 2900, 3000
        ];
    }

    #[test]
    fn test_days() {
        for year in 1904..=3000 {
            let year = Year::new(year);
            if year.is_leap_year() {
                assert_eq!(year.days(), 366, "{} should have 366 days", year);
            } else {
                assert_eq!(year.days(), 365, "{} should have 365 days", year);
            }

            assert_eq!(year.cumulative_days()[12], year.days());
        }
    }

    #[test]
    fn test_days_since_base_date() {
        let mut elapsed_days = 0;
        for year in 0..=2030 {
            let year = Year::new(year);
            assert_eq!(year.days_since_base_date(), elapsed_days, "days until {}", year);
            elapsed_days += year.days();
        }
    }

    #[test]
    fn test_from_days_since_base_date() {
        for year in 0..=3000 {
            let year = Year::new(year);
            let days = year.days_since_base_date();

            assert_eq!(Year::from_days_since_base_date(days), year);
            assert_eq!(Year::from_days_since_base_date(days + year.days() - 1), year);
        }
    }

    #[test]
    fn test_week_day() {
        assert_eq!(Year::new(2000).week_day(Month::January, 1), WeekDay::Saturday);
        assert_eq!(Year::new(2000).week_day(Month::January, 2), WeekDay::Sunday);
        assert_eq!(Year::new(2000).week_day(Month::January, 3), WeekDay::Monday);
        assert_eq!(
            Year::new(2001).week_day(Month::January, 15),
            WeekDay::Monday
        );
        assert_eq!(Year::new(2002).week_day(Month::March, 10), WeekDay::Sunday);
        assert_eq!(
            Year::new(2021).week_day(Month::December, 24),
            WeekDay::Friday
        );
        assert_eq!(Year::new(2024).week_day(Month::January, 1), WeekDay::Monday);
        assert_eq!(Year::new(2024).week_day(Month::February, 29), WeekDay::Thursday);
        assert_eq!(
            Year::new(2024).week_day(Month::December, 31),
            WeekDay::Tuesday
        );
    }

    #[test]
    fn test_try_from_rejects_large_years() {
        assert_eq!(Year::try_from(2024), Ok(Year::new(2024)));
        assert_eq!(Year::try_from(9999), Ok(Year::MAX));
        assert_eq!(Year::try_from(10000), Err(InvalidYear(10000)));
        assert_eq!(
            Year::try_from(usize::MAX / 100),
            Err(InvalidYear(usize::MAX / 100))
        );

        assert_eq!(Year::MAX.last_day().week_day(), WeekDay::Friday);
    }

    #[test]
    fn test_dates() {
        let year = Year::new(2024);
        let dates = year.dates().collect::<Vec<_>>();

        assert_eq!(dates.len(), 366);
        assert_eq!(dates.first(), Some(&year.first_day()));
        assert_eq!(dates.last(), Some(&year.last_day()));
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
