use std::path::Path;

use anyhow::Context;
use log::debug;
use thiserror::Error;

use crate::input::toml_input::PlanFile;
use crate::planner::{self, Calendar, Plan, PlanError, PlannerOptions};
use crate::time::{Date, HolidayPreset, Year};
use crate::utils;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the {kind} {date} is not in the planned year {year}")]
    DateOutsideYear {
        kind: &'static str,
        date: Date,
        year: Year,
    },
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// A validated plan file, ready to be handed to the planner.
#[derive(Debug, Clone)]
pub struct Config {
    calendar: Calendar,
    options: PlannerOptions,
    preset: Option<HolidayPreset>,
}

pub struct ConfigBuilder {
    plan: PlanFile,
    paid_leaves: Option<usize>,
    start: Option<Date>,
}

impl ConfigBuilder {
    fn new(plan: PlanFile) -> Self {
        Self {
            plan,
            paid_leaves: None,
            start: None,
        }
    }

    /// Overrides the amount of paid leaves from the plan file.
    pub fn paid_leaves(&mut self, paid_leaves: usize) -> &mut Self {
        self.paid_leaves = Some(paid_leaves);
        self
    }

    /// Overrides the start date from the plan file.
    pub fn start(&mut self, start: Date) -> &mut Self {
        self.start = Some(start);
        self
    }

    fn validate_dates(
        year: Year,
        kind: &'static str,
        dates: impl Iterator<Item = Date>,
    ) -> Result<Vec<Date>, ConfigError> {
        dates
            .map(|date| {
                if year.contains(date) {
                    Ok(date)
                } else {
                    Err(ConfigError::DateOutsideYear { kind, date, year })
                }
            })
            .collect()
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let general = self.plan.general();
        let holidays = self.plan.holidays();
        let year = general.year();

        let paid_leaves = match self.paid_leaves {
            Some(paid_leaves) => paid_leaves,
            None => general.paid_leaves()?,
        };

        let national = Self::validate_dates(year, "national holiday", holidays.national())?;
        let custom = Self::validate_dates(year, "custom holiday", holidays.custom())?;
        let weekend_overrides =
            Self::validate_dates(year, "weekend override", holidays.weekend_overrides())?;

        let preset = holidays.preset();
        let preset_holidays = preset
            .map(|preset| preset.holidays(year))
            .unwrap_or_default();

        debug!(
            "{} holidays from the preset, {} national and {} custom holidays",
            preset_holidays.len(),
            national.len(),
            custom.len()
        );

        let calendar = Calendar::new(year)
            .with_national_holidays(preset_holidays.iter().map(|holiday| holiday.date()))
            .with_national_holidays(national)
            .with_custom_holidays(custom)
            .with_weekend_overrides(weekend_overrides);

        let mut options = PlannerOptions::new(paid_leaves)
            .with_constraints(self.plan.constraints().to_constraints());
        if let Some(start) = self.start.or(general.start()) {
            options = options.with_start(start.with_year(year));
        }

        Ok(Config {
            calendar,
            options,
            preset,
        })
    }
}

impl Config {
    #[must_use]
    pub fn try_from_toml(plan: PlanFile) -> ConfigBuilder {
        ConfigBuilder::new(plan)
    }

    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let plan: PlanFile = utils::toml_from_file(path.as_ref())
            .with_context(|| format!("failed to parse `{}`", path.as_ref().display()))?;

        Ok(Self::try_from_toml(plan))
    }

    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    #[must_use]
    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    #[must_use]
    pub fn preset(&self) -> Option<HolidayPreset> {
        self.preset
    }

    pub fn plan(&self) -> Result<Plan, PlanError> {
        planner::plan_leaves(&self.calendar, &self.options)
    }
}
