use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::time::{Date, Month, Year};

/// A named public holiday on a specific date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holiday {
    date: Date,
    name: &'static str,
}

impl Holiday {
    #[must_use]
    pub const fn new(date: Date, name: &'static str) -> Self {
        Self { date, name }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}

/// Returns the date of easter sunday in the given year.
///
/// The algorithm is based on <https://en.wikipedia.org/wiki/Date_of_Easter#Anonymous_Gregorian_algorithm>
#[must_use]
pub const fn easter_sunday(year: Year) -> Date {
    let year_number = year.as_usize();

    let a = year_number % 19;
    let b = year_number / 100;
    let c = year_number % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = (h + l - 7 * m + 114) / 31;
    let o = (h + l - 7 * m + 114) % 31;

    // SAFETY: the algorithm always results in a day in march or april
    unsafe { Date::new_unchecked(year, Month::from_number(n), o + 1) }
}

/// Built-in holiday rule sets that can be used instead of a list of national holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum HolidayPreset {
    /// The nationwide public holidays of germany.
    Germany,
    /// The nationwide holidays and the ones specific to Baden-Württemberg.
    BadenWuerttemberg,
}

impl HolidayPreset {
    const FIXED_NATIONWIDE: [(Month, usize, &'static str); 5] = [
        (Month::January, 1, "Neujahr"),
        (Month::May, 1, "Tag der Arbeit"),
        (Month::October, 3, "Tag der Deutschen Einheit"),
        (Month::December, 25, "1. Weihnachtsfeiertag"),
        (Month::December, 26, "2. Weihnachtsfeiertag"),
    ];

    const FIXED_BADEN_WUERTTEMBERG: [(Month, usize, &'static str); 2] = [
        (Month::January, 6, "Heilige Drei Könige"),
        (Month::November, 1, "Allerheiligen"),
    ];

    /// Holidays relative to easter sunday, the offset is added to easter sunday.
    const MOVABLE_NATIONWIDE: [(isize, &'static str); 4] = [
        (-2, "Karfreitag"),
        (1, "Ostermontag"),
        (39, "Christi Himmelfahrt"),
        (50, "Pfingstmontag"),
    ];

    const MOVABLE_BADEN_WUERTTEMBERG: [(isize, &'static str); 1] = [(60, "Fronleichnam")];

    /// Returns the holidays of the preset in the given year, sorted by date.
    #[must_use]
    pub fn holidays(&self, year: Year) -> Vec<Holiday> {
        let easter = easter_sunday(year);

        let mut fixed = Self::FIXED_NATIONWIDE.to_vec();
        let mut movable = Self::MOVABLE_NATIONWIDE.to_vec();

        if let Self::BadenWuerttemberg = self {
            fixed.extend(Self::FIXED_BADEN_WUERTTEMBERG);
            movable.extend(Self::MOVABLE_BADEN_WUERTTEMBERG);
        }

        let mut result = fixed
            .into_iter()
            .filter_map(|(month, day, name)| {
                Date::new(year, month, day)
                    .ok()
                    .map(|date| Holiday::new(date, name))
            })
            .chain(movable.into_iter().filter_map(|(offset, name)| {
                let date = if offset < 0 {
                    easter.checked_sub_days(offset.unsigned_abs())?
                } else {
                    easter.add_days(offset.unsigned_abs())
                };

                Some(Holiday::new(date, name))
            }))
            .collect::<Vec<_>>();

        result.sort_by_key(Holiday::date);
        result
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Germany => "germany",
            Self::BadenWuerttemberg => "baden-wuerttemberg",
        }
    }
}

impl fmt::Display for HolidayPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown holiday preset \"{input}\", expected one of: germany, baden-wuerttemberg")]
pub struct UnknownHolidayPreset {
    input: String,
}

impl FromStr for HolidayPreset {
    type Err = UnknownHolidayPreset;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_ascii_lowercase().as_str() {
            "germany" | "de" => Ok(Self::Germany),
            "baden-wuerttemberg" | "de-bw" => Ok(Self::BadenWuerttemberg),
            _ => Err(UnknownHolidayPreset {
                input: string.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for HolidayPreset {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}
