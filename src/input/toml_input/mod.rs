mod constraints;
mod general;
mod holidays;
mod plan;

pub use constraints::*;
pub use general::*;
pub use holidays::*;
pub use plan::*;
