//! Request-scoped value types: the calendar date a caller asks about and the
//! Julian Day it maps to.

pub mod date;
pub mod time;

pub use date::{DateSpec, DateSpecError, MISSING_DATE_PARAMETERS};
pub use time::JulianDay;
