use log::debug;

use crate::planner::LeaveOpportunity;

/// The optional restrictions on the shape of the planned leaves.
///
/// When both the `5` and the `10` variant of a constraint are set, the
/// stricter one wins: `10` for the minimums and `5` for the maximums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    /// Only consider opportunities with at least 5 paid leaves.
    pub min_days_off_5: bool,
    /// Only consider opportunities with at least 10 paid leaves.
    pub min_days_off_10: bool,
    /// The plan has to contain a run of at least 5 paid leaves.
    pub min_paid_run_5: bool,
    /// The plan has to contain a run of at least 10 paid leaves.
    pub min_paid_run_10: bool,
    /// Drop opportunities with more than 5 total days off.
    pub max_days_off_5: bool,
    /// Drop opportunities with more than 10 total days off.
    pub max_days_off_10: bool,
    /// Drop opportunities and commits with more than 5 paid leaves (in a row).
    pub max_paid_run_5: bool,
    /// Drop opportunities and commits with more than 10 paid leaves (in a row).
    pub max_paid_run_10: bool,
}

impl Constraints {
    /// The smallest amount of paid leaves an opportunity should have.
    #[must_use]
    pub const fn min_leave_length(&self) -> usize {
        if self.min_days_off_10 {
            10
        } else if self.min_days_off_5 {
            5
        } else {
            1
        }
    }

    /// The length of the paid run that must be part of every plan.
    #[must_use]
    pub const fn mandatory_paid_run(&self) -> Option<usize> {
        if self.min_paid_run_10 {
            Some(10)
        } else if self.min_paid_run_5 {
            Some(5)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn max_days_off(&self) -> Option<usize> {
        if self.max_days_off_5 {
            Some(5)
        } else if self.max_days_off_10 {
            Some(10)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn max_paid_run(&self) -> Option<usize> {
        if self.max_paid_run_5 {
            Some(5)
        } else if self.max_paid_run_10 {
            Some(10)
        } else {
            None
        }
    }

    /// Returns `true` if one of the minimum constraints is set.
    ///
    /// Plans with a minimum are not topped up with single leave days.
    #[must_use]
    pub const fn has_minimum(&self) -> bool {
        self.min_days_off_5 || self.min_days_off_10 || self.min_paid_run_5 || self.min_paid_run_10
    }

    /// Checks the maximum constraints against a single opportunity.
    #[must_use]
    pub fn allows(&self, opportunity: &LeaveOpportunity) -> bool {
        if let Some(limit) = self.max_days_off() {
            if opportunity.total_days_off() > limit {
                return false;
            }
        }

        if let Some(limit) = self.max_paid_run() {
            if opportunity.required_leaves() > limit {
                return false;
            }
        }

        true
    }

    /// Removes every opportunity that violates a maximum constraint.
    #[must_use]
    pub fn filter(&self, opportunities: Vec<LeaveOpportunity>) -> Vec<LeaveOpportunity> {
        let before = opportunities.len();
        let result = opportunities
            .into_iter()
            .filter(|opportunity| self.allows(opportunity))
            .collect::<Vec<_>>();

        debug!(
            "{} of {} opportunities satisfy the constraints",
            result.len(),
            before
        );

        result
    }
}
