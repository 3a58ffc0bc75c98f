use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{InvalidYear, Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        $crate::__private::const_assert!($year <= $crate::time::Year::MAX.as_usize());
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        $crate::__private::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::from_number($month);

        // validate the day
        $crate::__private::const_assert!($day != 0);
        $crate::__private::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: Year, month: Month, day: usize) -> Result<Self, InvalidDate> {
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// # Safety
    ///
    /// The day must exist in the given month of the given year.
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Returns the date of the last day as a date in the month.
    #[must_use]
    pub const fn last_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: year.number_of_days_in_month(month),
        }
    }

    /// The ordinal must be in `1..=year.days()`.
    #[must_use]
    const fn from_ordinal(year: Year, ordinal: usize) -> Self {
        let cumulative_days = year.cumulative_days();

        // this is in O(1) as the number of months is bounded by 12
        let mut current_month = Month::January;
        while !matches!(current_month, Month::December)
            && cumulative_days[current_month.number()] < ordinal
        {
            current_month = current_month.next();
        }

        let day = ordinal - cumulative_days[current_month.number() - 1];

        Self {
            year,
            month: current_month,
            day,
        }
    }

    #[must_use]
    const fn from_days_since_base_date(days: usize) -> Self {
        let year = Year::from_days_since_base_date(days);
        // NOTE: +1 because the ordinal of the first day of the year is 1 and not 0
        let ordinal = (days - year.days_since_base_date()) + 1;
        Self::from_ordinal(year, ordinal)
    }
}

impl Date {
    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    /// Returns `true` for saturdays and sundays.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.week_day().is_weekend()
    }

    /// The position of the date in its year, starting with 1 for january 1st.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        // -1 to get the index of the previous month
        // will not cause a panic, because the first month
        // (january) has the number 1
        self.year().cumulative_days()[self.month().number() - 1] + self.day()
    }

    #[must_use]
    const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of the year is 1, so 1 has to be subtracted
        self.year.days_since_base_date() + (self.ordinal() - 1)
    }

    /// Returns the following day.
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.day < self.year.number_of_days_in_month(self.month) {
            Self {
                day: self.day + 1,
                ..*self
            }
        } else if !matches!(self.month, Month::December) {
            Self::first_day(self.year, self.month.next())
        } else {
            Self::first_day(self.year.next(), Month::January)
        }
    }

    /// Returns the previous day or `None` for 0000-01-01.
    #[must_use]
    pub const fn prev(&self) -> Option<Self> {
        if self.day > 1 {
            return Some(Self {
                day: self.day - 1,
                ..*self
            });
        }

        if !matches!(self.month, Month::January) {
            return Some(Self::last_day(self.year, self.month.prev()));
        }

        match self.year.prev() {
            Some(year) => Some(Self::last_day(year, Month::December)),
            None => None,
        }
    }

    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        Self::from_days_since_base_date(self.days_since_base_date() + days)
    }

    /// Returns the date `days` before `self` or `None` if that would be before 0000-01-01.
    #[must_use]
    pub const fn checked_sub_days(self, days: usize) -> Option<Self> {
        let since_base = self.days_since_base_date();
        if since_base < days {
            return None;
        }

        Some(Self::from_days_since_base_date(since_base - days))
    }

    /// Moves the date into `year`, keeping the month and the day.
    ///
    /// February 29th becomes February 28th if `year` is not a leap year.
    #[must_use]
    pub const fn with_year(&self, year: Year) -> Self {
        let last_day = year.number_of_days_in_month(self.month);

        Self {
            year,
            month: self.month,
            day: if self.day > last_day {
                last_day
            } else {
                self.day
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
    #[error(transparent)]
    InvalidYear(#[from] InvalidYear),
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.number(),
            self.day
        )
    }
}

/// An inclusive range of dates, iterated in ascending order.
///
/// The range is empty if `start > end`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl DateRange {
    pub const fn new(start: Date, end: Date) -> Self {
        Self {
            next: Some(start),
            end,
        }
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = Some(current.next());
        Some(current)
    }
}

fn parse_or_err(input: &str, string: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: string.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.trim().split_exact::<3>("-") {
            let year = Year::try_from(parse_or_err(year, string)?)?;
            let month = Month::try_from(parse_or_err(month, string)?).map_err(|_| {
                InvalidDate::ParseDateError {
                    input: string.to_string(),
                }
            })?;
            let day = parse_or_err(day, string)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl TryFrom<toml::value::Date> for Date {
    type Error = InvalidDate;

    fn try_from(date: toml::value::Date) -> Result<Self, Self::Error> {
        let month =
            Month::try_from(date.month as usize).map_err(|_| InvalidDate::ParseDateError {
                input: date.to_string(),
            })?;

        Self::new(Year::try_from(usize::from(date.year))?, month, usize::from(date.day))
    }
}
