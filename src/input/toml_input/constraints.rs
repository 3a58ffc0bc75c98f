use serde::Deserialize;
use thiserror::Error;

use crate::planner;

/// The only values a constraint can be set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "usize")]
pub enum Threshold {
    Five,
    Ten,
}

impl Threshold {
    #[must_use]
    pub const fn as_usize(&self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid threshold {0}, expected 5 or 10")]
pub struct InvalidThreshold(usize);

impl TryFrom<usize> for Threshold {
    type Error = InvalidThreshold;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            _ => Err(InvalidThreshold(value)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Constraints {
    minimum_days_off: Option<Threshold>,
    minimum_paid_leaves_in_row: Option<Threshold>,
    maximum_days_off: Option<Threshold>,
    maximum_paid_leaves_in_row: Option<Threshold>,
}

impl Constraints {
    #[must_use]
    pub fn to_constraints(&self) -> planner::Constraints {
        let is = |value: Option<Threshold>, threshold: Threshold| value == Some(threshold);

        planner::Constraints {
            min_days_off_5: is(self.minimum_days_off, Threshold::Five),
            min_days_off_10: is(self.minimum_days_off, Threshold::Ten),
            min_paid_run_5: is(self.minimum_paid_leaves_in_row, Threshold::Five),
            min_paid_run_10: is(self.minimum_paid_leaves_in_row, Threshold::Ten),
            max_days_off_5: is(self.maximum_days_off, Threshold::Five),
            max_days_off_10: is(self.maximum_days_off, Threshold::Ten),
            max_paid_run_5: is(self.maximum_paid_leaves_in_row, Threshold::Five),
            max_paid_run_10: is(self.maximum_paid_leaves_in_row, Threshold::Ten),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_threshold() {
        assert_eq!(Threshold::try_from(5), Ok(Threshold::Five));
        assert_eq!(Threshold::try_from(10), Ok(Threshold::Ten));
        assert_eq!(Threshold::try_from(7), Err(InvalidThreshold(7)));
        assert_eq!(Threshold::Ten.as_usize(), 10);
    }

    #[test]
    fn test_to_constraints() {
        let constraints: Constraints = toml::from_str(concat!(
            //
            "minimum_paid_leaves_in_row = 10\n",
            "maximum_days_off = 5\n",
        ))
        .expect("toml should be valid");

        assert_eq!(
            constraints.to_constraints(),
            planner::Constraints {
                min_paid_run_10: true,
                max_days_off_5: true,
                ..planner::Constraints::default()
            }
        );
    }

    #[test]
    fn test_rejects_other_values() {
        assert!(toml::from_str::<Constraints>("maximum_days_off = 7").is_err());
    }
}
