//! This module turns a classified calendar and a budget of paid leaves into
//! the set of dates that should be taken off.
//!
//! The pipeline is: generate every [`LeaveOpportunity`] in the planning
//! window, drop the ones violating the [`Constraints`], rank the rest by
//! efficiency and greedily commit them until the budget is spent.

mod calendar;
mod constraints;
mod opportunity;
mod paid_run;
mod selector;
mod statistics;

pub use calendar::*;
pub use constraints::*;
pub use opportunity::*;
pub use paid_run::*;
pub use selector::*;
pub use statistics::*;

use std::collections::BTreeSet;

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::time::{Date, DateRange, Year};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("invalid amount of paid leaves \"{input}\", expected a non-negative whole number")]
    InvalidBudget { input: String },
    #[error("cannot satisfy constraint: need {threshold} paid leaves in a row")]
    UnsatisfiableMandatoryConstraint { threshold: usize },
}

impl PlanError {
    /// Returns `true` if the plan was aborted, because the mandatory paid run
    /// could not be satisfied.
    #[must_use]
    pub const fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::UnsatisfiableMandatoryConstraint { .. })
    }

    /// The length of the paid run that could not be satisfied.
    #[must_use]
    pub const fn threshold(&self) -> Option<usize> {
        match self {
            Self::UnsatisfiableMandatoryConstraint { threshold } => Some(*threshold),
            Self::InvalidBudget { .. } => None,
        }
    }
}

/// Parses a textual amount of paid leaves.
///
/// Negative, fractional and non-numeric values are rejected.
pub fn parse_budget(input: &str) -> Result<usize, PlanError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| PlanError::InvalidBudget {
            input: input.to_string(),
        })
}

/// Options that configure a single run of the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlannerOptions {
    /// The first date that can be taken off, defaults to the first day of
    /// the year.
    pub start: Option<Date>,
    /// The amount of paid leaves that can be spent.
    pub paid_leaves: usize,
    pub constraints: Constraints,
}

impl PlannerOptions {
    #[must_use]
    pub fn new(paid_leaves: usize) -> Self {
        Self {
            paid_leaves,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub const fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// The start date moved into the given year.
    #[must_use]
    pub fn start_in(&self, year: Year) -> Date {
        match self.start {
            Some(start) if year.contains(start) => start,
            Some(start) => start.with_year(year),
            None => year.first_day(),
        }
    }
}

/// The result of a successful planner run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    leave_dates: BTreeSet<Date>,
    committed: Vec<LeaveOpportunity>,
    statistics: Statistics,
}

impl Plan {
    /// All dates that should be taken as paid leave, sorted ascending.
    #[must_use]
    pub fn leave_dates(&self) -> &BTreeSet<Date> {
        &self.leave_dates
    }

    /// The opportunities in the order they have been committed.
    #[must_use]
    pub fn committed(&self) -> &[LeaveOpportunity] {
        &self.committed
    }

    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Plans the paid leaves for the year of the `calendar`.
///
/// A budget of zero or an empty window result in an empty plan. The only
/// failure is a mandatory paid run that no opportunity can satisfy.
pub fn plan_leaves(calendar: &Calendar, options: &PlannerOptions) -> Result<Plan, PlanError> {
    let year = calendar.year();
    let start = options.start_in(year);
    let window = DateRange::new(start, year.last_day());

    debug!(
        "planning {} paid leave(s) from {} until {}",
        options.paid_leaves,
        start,
        year.last_day()
    );

    let opportunities = generate_opportunities(
        calendar,
        window,
        options.paid_leaves,
        &options.constraints,
    );
    let opportunities = options.constraints.filter(opportunities);

    let selection = select_leaves(
        calendar,
        opportunities,
        options.paid_leaves,
        &options.constraints,
    )?;

    let leave_dates = selection.leave_dates();
    let statistics = Statistics::new(calendar, &leave_dates, options.paid_leaves);

    info!(
        "planned {} of {} paid leave(s) for {} days off in {}",
        statistics.used_leaves(),
        statistics.allocated_leaves(),
        statistics.total_days_off(),
        year
    );

    Ok(Plan {
        leave_dates,
        committed: selection.committed().to_vec(),
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("20"), Ok(20));
        assert_eq!(parse_budget(" 0 "), Ok(0));

        for input in ["-1", "2.5", "ten", ""] {
            assert_eq!(
                parse_budget(input),
                Err(PlanError::InvalidBudget {
                    input: input.to_string()
                })
            );
        }
    }

    #[test]
    fn test_error_message() {
        let error = PlanError::UnsatisfiableMandatoryConstraint { threshold: 10 };

        assert_eq!(
            error.to_string(),
            "cannot satisfy constraint: need 10 paid leaves in a row"
        );
        assert!(error.is_unsatisfiable());
        assert_eq!(error.threshold(), Some(10));
    }

    #[test]
    fn test_start_is_clamped_into_year() {
        let year = Year::new(2024);

        assert_eq!(PlannerOptions::new(1).start_in(year), date!(2024:01:01));
        assert_eq!(
            PlannerOptions::new(1)
                .with_start(date!(2024:03:04))
                .start_in(year),
            date!(2024:03:04)
        );
        assert_eq!(
            PlannerOptions::new(1)
                .with_start(date!(2023:06:15))
                .start_in(year),
            date!(2024:06:15)
        );
        assert_eq!(
            PlannerOptions::new(1)
                .with_start(date!(2024:02:29))
                .start_in(Year::new(2025)),
            date!(2025:02:28)
        );
    }

    #[test]
    fn test_start_limits_window() {
        let calendar = Calendar::new(Year::new(2024));
        let options = PlannerOptions::new(1).with_start(date!(2024:01:08));

        let plan = plan_leaves(&calendar, &options).unwrap();

        // the monday after the first weekend is as good as the friday before
        // the second weekend, but comes first
        assert_eq!(plan.leave_dates(), &BTreeSet::from([date!(2024:01:08)]));
    }

    #[test]
    fn test_empty_window() {
        let calendar = Calendar::new(Year::new(2024));
        // the last day of 2024 is a tuesday, the start is on a sunday
        let calendar = calendar.with_national_holidays([date!(2024:12:30), date!(2024:12:31)]);
        let options = PlannerOptions::new(5).with_start(date!(2024:12:29));

        let plan = plan_leaves(&calendar, &options).unwrap();

        assert!(plan.leave_dates().is_empty());
        assert!(plan.committed().is_empty());
        assert_eq!(plan.statistics().used_leaves(), 0);
        assert_eq!(plan.statistics().allocated_leaves(), 5);
    }
}
