use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::trace;
use serde::de::DeserializeOwned;

mod macros;

pub fn toml_from_file<T>(path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    trace!("reading from: {}", path.as_ref().display());
    toml_from_reader(File::open(path)?)
}

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(4 * 1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

pub mod serde_toml_local_date {
    use core::fmt;

    use toml::value::{Date, Datetime};

    use serde::de::{self, Deserialize};

    // NOTE: `toml::value::Datetime` is used, because
    // `toml::value::Date` does not implement `Deserialize`

    fn to_local_date<T, E>(datetime: Datetime) -> Result<T, E>
    where
        T: TryFrom<Date>,
        T::Error: fmt::Display,
        E: de::Error,
    {
        let date = datetime
            .date
            .ok_or_else(|| de::Error::custom("expected a date"))?;

        if datetime.time.is_some() || datetime.offset.is_some() {
            return Err(de::Error::custom(format!(
                "expected a local date without a time, but got `{}`",
                datetime
            )));
        }

        T::try_from(date).map_err(de::Error::custom)
    }

    pub fn deserialize_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: de::Deserializer<'de>,
        T: TryFrom<Date>,
        T::Error: fmt::Display,
    {
        Option::<Datetime>::deserialize(deserializer)?
            .map(to_local_date)
            .transpose()
    }

    pub fn deserialize_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: de::Deserializer<'de>,
        T: TryFrom<Date>,
        T::Error: fmt::Display,
    {
        Vec::<Datetime>::deserialize(deserializer)?
            .into_iter()
            .map(to_local_date)
            .collect()
    }
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}
