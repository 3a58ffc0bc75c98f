use std::collections::HashSet;

use serde::Serialize;

use crate::time::{Date, DateRange, Year};

/// How a single date of the planning year is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayStatus {
    Working,
    /// A saturday or sunday that has not been overridden to be a working day.
    OffWeekend,
    /// A national or custom holiday.
    OffHoliday,
}

impl DayStatus {
    /// Off days can never be spent as leave.
    #[must_use]
    pub const fn is_off(&self) -> bool {
        !matches!(self, Self::Working)
    }
}

/// The classified calendar of a single year.
///
/// National holidays usually come from an external source, custom holidays
/// are declared by the user. Weekend overrides turn a natural weekend day into
/// a working day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    year: Year,
    national_holidays: HashSet<Date>,
    custom_holidays: HashSet<Date>,
    weekend_overrides: HashSet<Date>,
}

impl Calendar {
    /// A calendar where only saturdays and sundays are off.
    #[must_use]
    pub fn new(year: Year) -> Self {
        Self {
            year,
            national_holidays: HashSet::new(),
            custom_holidays: HashSet::new(),
            weekend_overrides: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_national_holidays(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.national_holidays.extend(dates);
        self
    }

    #[must_use]
    pub fn with_custom_holidays(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.custom_holidays.extend(dates);
        self
    }

    #[must_use]
    pub fn with_weekend_overrides(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.weekend_overrides.extend(dates);
        self
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn national_holidays(&self) -> &HashSet<Date> {
        &self.national_holidays
    }

    #[must_use]
    pub fn custom_holidays(&self) -> &HashSet<Date> {
        &self.custom_holidays
    }

    #[must_use]
    pub fn weekend_overrides(&self) -> &HashSet<Date> {
        &self.weekend_overrides
    }

    #[must_use]
    pub fn is_holiday(&self, date: Date) -> bool {
        self.national_holidays.contains(&date) || self.custom_holidays.contains(&date)
    }

    #[must_use]
    pub fn classify(&self, date: Date) -> DayStatus {
        if self.is_holiday(date) {
            DayStatus::OffHoliday
        } else if date.is_weekend() && !self.weekend_overrides.contains(&date) {
            DayStatus::OffWeekend
        } else {
            DayStatus::Working
        }
    }

    #[must_use]
    pub fn is_off(&self, date: Date) -> bool {
        self.classify(date).is_off()
    }

    #[must_use]
    pub fn is_working(&self, date: Date) -> bool {
        !self.is_off(date)
    }

    /// Iterates over all dates of the year.
    pub fn dates(&self) -> DateRange {
        self.year.dates()
    }
}
