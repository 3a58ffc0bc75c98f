use core::fmt;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::planner::Calendar;
use crate::time::{Date, Year};

/// Summary of a plan over the whole year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    year: Year,
    days_in_year: usize,
    allocated_leaves: usize,
    used_leaves: usize,
    national_holidays: usize,
    custom_holidays: usize,
    total_days_off: usize,
    working_days: usize,
    efficiency: f64,
}

impl Statistics {
    #[must_use]
    pub fn new(calendar: &Calendar, leave_dates: &BTreeSet<Date>, allocated_leaves: usize) -> Self {
        let year = calendar.year();

        let mut total_days_off = 0;
        let mut weekends_and_holidays = 0;
        for date in calendar.dates() {
            if calendar.is_off(date) {
                weekends_and_holidays += 1;
                total_days_off += 1;
            } else if leave_dates.contains(&date) {
                total_days_off += 1;
            }
        }

        let used_leaves = leave_dates.len();
        let efficiency = if used_leaves == 0 {
            0.0
        } else {
            (total_days_off - weekends_and_holidays) as f64 / used_leaves as f64
        };

        Self {
            year,
            days_in_year: year.days(),
            allocated_leaves,
            used_leaves,
            national_holidays: calendar.national_holidays().len(),
            custom_holidays: calendar.custom_holidays().len(),
            total_days_off,
            working_days: year.days() - total_days_off,
            efficiency,
        }
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn days_in_year(&self) -> usize {
        self.days_in_year
    }

    #[must_use]
    pub const fn allocated_leaves(&self) -> usize {
        self.allocated_leaves
    }

    #[must_use]
    pub const fn used_leaves(&self) -> usize {
        self.used_leaves
    }

    #[must_use]
    pub const fn national_holidays(&self) -> usize {
        self.national_holidays
    }

    #[must_use]
    pub const fn custom_holidays(&self) -> usize {
        self.custom_holidays
    }

    /// Days in the year that are either off or planned as leave.
    #[must_use]
    pub const fn total_days_off(&self) -> usize {
        self.total_days_off
    }

    #[must_use]
    pub const fn working_days(&self) -> usize {
        self.working_days
    }

    /// The share of the year that is off, in percent.
    #[must_use]
    pub fn days_off_percentage(&self) -> f64 {
        self.total_days_off as f64 / self.days_in_year as f64 * 100.0
    }

    /// The days off gained through leave per used leave.
    ///
    /// Leave dates are always working days, so this is `1.0` for any
    /// non-empty plan and `0.0` otherwise.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Statistics for {}: Paid Leaves Used: {}/{} | National Holidays: {} | Custom Holidays: {} | Total Days Off: {} ({:.1}%) | Working Days: {} | Efficiency: {:.2} extra days per leave",
            self.year,
            self.used_leaves,
            self.allocated_leaves,
            self.national_holidays,
            self.custom_holidays,
            self.total_days_off,
            self.days_off_percentage(),
            self.working_days,
            self.efficiency,
        )
    }
}
