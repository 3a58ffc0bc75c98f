use serde::Deserialize;

use crate::input::toml_input::{Constraints, General, Holidays};

/// The contents of a plan file.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    general: General,
    #[serde(default)]
    constraints: Constraints,
    #[serde(default)]
    holidays: Holidays,
}

impl PlanFile {
    #[must_use]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn holidays(&self) -> &Holidays {
        &self.holidays
    }
}
