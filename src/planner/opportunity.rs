use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use crate::planner::{Calendar, Constraints};
use crate::time::{Date, DateRange};

/// The longest amount of paid leaves that will be considered for a single
/// opportunity.
pub const MAX_LEAVE_LENGTH: usize = 20;

/// A candidate block of paid leaves and the continuous time off it results in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveOpportunity {
    anchor: Date,
    leave_dates: Vec<Date>,
    total_days_off: usize,
}

impl LeaveOpportunity {
    /// Evaluates taking `length` paid leaves, starting on `start` and
    /// skipping over any off days.
    ///
    /// Returns `None` if the year ends before `length` working days have
    /// been collected.
    #[must_use]
    pub fn evaluate(calendar: &Calendar, start: Date, length: usize) -> Option<Self> {
        let year = calendar.year();

        let mut leave_dates = Vec::with_capacity(length);
        let mut current = start;
        while leave_dates.len() < length {
            if !year.contains(current) {
                return None;
            }

            if calendar.is_working(current) {
                leave_dates.push(current);
            }

            current = current.next();
        }

        // the time off starts with the off days directly before the first leave
        let mut anchor = start;
        while let Some(previous) = anchor
            .prev()
            .filter(|date| year.contains(*date) && calendar.is_off(*date))
        {
            anchor = previous;
        }

        let total_days_off = DateRange::new(anchor, year.last_day())
            .take_while(|date| calendar.is_off(*date) || leave_dates.binary_search(date).is_ok())
            .count();

        if total_days_off == 0 {
            return None;
        }

        Some(Self {
            anchor,
            leave_dates,
            total_days_off,
        })
    }

    /// The first day of the continuous time off.
    #[must_use]
    pub const fn anchor(&self) -> Date {
        self.anchor
    }

    /// The dates that have to be taken as paid leave, sorted ascending.
    #[must_use]
    pub fn leave_dates(&self) -> &[Date] {
        &self.leave_dates
    }

    #[must_use]
    pub fn required_leaves(&self) -> usize {
        self.leave_dates.len()
    }

    #[must_use]
    pub const fn total_days_off(&self) -> usize {
        self.total_days_off
    }

    /// The number of days off gained per paid leave.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.total_days_off as f64 / self.required_leaves() as f64
    }

    /// Returns `true` if any of the leave dates is in `used`.
    #[must_use]
    pub fn overlaps(&self, used: &HashSet<Date>) -> bool {
        self.leave_dates.iter().any(|date| used.contains(date))
    }

    /// The last day of the continuous time off.
    #[must_use]
    pub fn last_day_off(&self) -> Date {
        self.anchor.add_days(self.total_days_off - 1)
    }
}

/// Enumerates every opportunity that starts on a working day in `window`.
///
/// The candidate lengths range from `1` (or the minimum length required by
/// the constraints) up to the smaller of `paid_leaves` and
/// [`MAX_LEAVE_LENGTH`]. The result is ordered by start date, then by length.
#[must_use]
pub fn generate_opportunities(
    calendar: &Calendar,
    window: DateRange,
    paid_leaves: usize,
    constraints: &Constraints,
) -> Vec<LeaveOpportunity> {
    let longest = paid_leaves.min(MAX_LEAVE_LENGTH);
    let shortest = constraints.min_leave_length().max(1);

    let mut result = Vec::new();
    for start in window.filter(|date| calendar.is_working(*date)) {
        result.extend(
            (shortest..=longest)
                .filter_map(|length| LeaveOpportunity::evaluate(calendar, start, length)),
        );
    }

    debug!(
        "generated {} opportunities with lengths {}..={}",
        result.len(),
        shortest,
        longest
    );

    result
}
