use std::collections::{BTreeSet, HashSet};

use log::{debug, info, warn};

use crate::planner::{longest_paid_run, Calendar, Constraints, LeaveOpportunity, PlanError};
use crate::time::Date;

/// The opportunities that have been committed to and the dates they use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    committed: Vec<LeaveOpportunity>,
    used: HashSet<Date>,
    remaining: usize,
}

impl Selection {
    fn new(paid_leaves: usize) -> Self {
        Self {
            committed: Vec::new(),
            used: HashSet::new(),
            remaining: paid_leaves,
        }
    }

    fn can_commit(&self, opportunity: &LeaveOpportunity) -> bool {
        opportunity.required_leaves() <= self.remaining && !opportunity.overlaps(&self.used)
    }

    fn commit(&mut self, opportunity: &LeaveOpportunity) {
        info!(
            "taking {} paid leave(s) from {} for {} days off",
            opportunity.required_leaves(),
            opportunity.anchor(),
            opportunity.total_days_off()
        );

        self.used.extend(opportunity.leave_dates().iter().copied());
        self.remaining -= opportunity.required_leaves();
        self.committed.push(opportunity.clone());
    }

    /// The committed opportunities in the order they were selected.
    #[must_use]
    pub fn committed(&self) -> &[LeaveOpportunity] {
        &self.committed
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn leave_dates(&self) -> BTreeSet<Date> {
        self.used.iter().copied().collect()
    }
}

/// Sorts the opportunities by descending efficiency, ties are broken by the
/// larger amount of total days off.
///
/// The sort is stable, so opportunities that are still equal keep their
/// generation order.
pub fn rank_opportunities(opportunities: &mut [LeaveOpportunity]) {
    opportunities.sort_by(|a, b| {
        b.efficiency()
            .total_cmp(&a.efficiency())
            .then_with(|| b.total_days_off().cmp(&a.total_days_off()))
    });
}

/// Greedily picks non-overlapping opportunities until the paid leaves are
/// exhausted.
///
/// If a mandatory paid run is required, the best ranked opportunity that
/// satisfies it is committed first. Without a minimum constraint, leftover
/// paid leaves are spent on the best remaining single days.
pub fn select_leaves(
    calendar: &Calendar,
    mut opportunities: Vec<LeaveOpportunity>,
    paid_leaves: usize,
    constraints: &Constraints,
) -> Result<Selection, PlanError> {
    rank_opportunities(&mut opportunities);

    let mut selection = Selection::new(paid_leaves);

    if let Some(threshold) = constraints.mandatory_paid_run() {
        let mandatory = opportunities.iter().find(|opportunity| {
            opportunity.required_leaves() <= selection.remaining()
                && longest_paid_run(calendar, opportunity.leave_dates()) >= threshold
        });

        match mandatory {
            Some(opportunity) => selection.commit(opportunity),
            None => {
                warn!("no opportunity has a run of {} paid leaves", threshold);
                return Err(PlanError::UnsatisfiableMandatoryConstraint { threshold });
            }
        }
    }

    for opportunity in &opportunities {
        if selection.remaining() == 0 {
            break;
        }

        if !selection.can_commit(opportunity) {
            continue;
        }

        if let Some(limit) = constraints.max_paid_run() {
            if longest_paid_run(calendar, opportunity.leave_dates()) > limit {
                continue;
            }
        }

        selection.commit(opportunity);
    }

    if selection.remaining() > 0 && !constraints.has_minimum() {
        debug!(
            "topping up {} remaining paid leave(s) with single days",
            selection.remaining()
        );

        for opportunity in &opportunities {
            if selection.remaining() == 0 {
                break;
            }

            if opportunity.required_leaves() == 1 && selection.can_commit(opportunity) {
                selection.commit(opportunity);
            }
        }
    }

    Ok(selection)
}
