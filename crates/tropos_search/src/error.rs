//! Error types for solar event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tropos_time::TimeError;

/// Errors from ingress and cardinal-point search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A refinement loop exhausted its iteration cap above tolerance.
    ///
    /// Deterministic and reproducible; retrying without changing the
    /// search configuration cannot succeed.
    NoConvergence {
        context: &'static str,
        last_estimate_jd: f64,
        iterations: u32,
    },
    /// The search configuration failed validation.
    InvalidConfig(&'static str),
    /// The supplied instant was rejected before any search ran.
    Time(TimeError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConvergence {
                context,
                last_estimate_jd,
                iterations,
            } => write!(
                f,
                "no convergence ({context}): last estimate JD {last_estimate_jd:.6} after {iterations} iterations"
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid search config: {msg}"),
            Self::Time(e) => write!(f, "invalid instant: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
