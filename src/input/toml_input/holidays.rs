use serde::Deserialize;

use crate::time::{Date, HolidayPreset};
use crate::utils::serde_toml_local_date;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Holidays {
    preset: Option<HolidayPreset>,
    #[serde(default, deserialize_with = "serde_toml_local_date::deserialize_vec")]
    national: Vec<Date>,
    #[serde(default, deserialize_with = "serde_toml_local_date::deserialize_vec")]
    custom: Vec<Date>,
    #[serde(default, deserialize_with = "serde_toml_local_date::deserialize_vec")]
    weekend_overrides: Vec<Date>,
}

impl Holidays {
    #[must_use]
    pub fn preset(&self) -> Option<HolidayPreset> {
        self.preset
    }

    pub fn national(&self) -> impl Iterator<Item = Date> + '_ {
        self.national.iter().copied()
    }

    pub fn custom(&self) -> impl Iterator<Item = Date> + '_ {
        self.custom.iter().copied()
    }

    pub fn weekend_overrides(&self) -> impl Iterator<Item = Date> + '_ {
        self.weekend_overrides.iter().copied()
    }
}
