use serde::Deserialize;

use crate::planner::{self, PlanError};
use crate::time::{Date, Year};
use crate::utils::serde_toml_local_date;

/// The budget as written in the plan file, validated in [`General::paid_leaves`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum BudgetInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    year: Year,
    #[serde(default, deserialize_with = "serde_toml_local_date::deserialize_option")]
    start: Option<Date>,
    paid_leaves: BudgetInput,
}

impl General {
    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub fn start(&self) -> Option<Date> {
        self.start
    }

    /// The amount of paid leaves, which must be a non-negative whole number.
    pub fn paid_leaves(&self) -> Result<usize, PlanError> {
        match &self.paid_leaves {
            BudgetInput::Integer(amount) => planner::parse_budget(&amount.to_string()),
            BudgetInput::Float(amount) => Err(PlanError::InvalidBudget {
                input: amount.to_string(),
            }),
            BudgetInput::Text(amount) => planner::parse_budget(amount),
        }
    }
}
