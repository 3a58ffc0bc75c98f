mod utils;

pub mod input;
pub mod planner;
pub mod time;

pub use planner::{plan_leaves, Plan, PlanError, PlannerOptions};

#[doc(hidden)]
pub mod __private {
    pub use static_assertions::const_assert;
}
