//! Apparent solar ecliptic longitude from a truncated periodic-term series.
//!
//! This crate provides:
//! - Evaluation of the Sun's geometric mean longitude, equation of center,
//!   truncated nutation in longitude, and aberration correction
//! - Calendar-instant and Julian-date entry points returning longitudes
//!   normalized to [0, 360)
//! - A finite-difference estimate of the Sun's angular speed
//!
//! All functions are pure and reentrant; root-finding layers call them
//! millions of times with no shared state.

pub mod position;
pub mod series;

pub use position::{solar_longitude, solar_longitude_at_jd, solar_speed_deg_per_day};
pub use series::{
    apparent_longitude_deg, equation_of_center_deg, mean_anomaly_deg, mean_longitude_deg,
    nutation_in_longitude_arcsec, ABERRATION_ARCSEC,
};
