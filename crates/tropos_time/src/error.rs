//! Error types for instant validation and time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from validating a supplied instant.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    FieldOutOfRange { field: &'static str, value: i64 },
    /// Seconds value is NaN or infinite.
    NonFiniteSeconds(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldOutOfRange { field, value } => {
                write!(f, "calendar field {field} out of range: {value}")
            }
            Self::NonFiniteSeconds(v) => write!(f, "seconds value is not finite: {v}"),
        }
    }
}

impl Error for TimeError {}
