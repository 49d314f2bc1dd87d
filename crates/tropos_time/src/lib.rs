//! Calendar ↔ Julian Date conversions and the engine's UTC instant type.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Julian-century arguments measured from J2000.0
//! - A `UtcTime` type with validation and `chrono` interop
//!
//! The engine treats the supplied UTC instant directly as the time argument
//! of the solar series; the TT−UTC offset (≈70 s) is an order of magnitude
//! below the series' precision class and is not modelled.

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    calendar_to_jd, centuries_to_jd, jd_to_calendar, jd_to_centuries, DAYS_PER_JULIAN_CENTURY,
    J2000_JD, SECONDS_PER_DAY,
};
pub use utc_time::UtcTime;
