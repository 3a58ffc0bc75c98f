//! Calendar primitives: years, months, week days and dates.

mod date;
pub use date::*;
mod holiday;
pub use holiday::*;
mod month;
pub use month::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
