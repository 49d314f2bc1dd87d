//! Error types for calendar construction and queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tropos_search::SearchError;
use tropos_time::TimeError;

/// Errors from building, caching, or querying annual calendars.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// The supplied instant was rejected before any computation.
    Time(TimeError),
    /// An ingress or cardinal search failed; no partial calendar is kept.
    Search(SearchError),
    /// The year search produced a wrong number of ingresses.
    IncompleteCalendar { year: i32, count: usize },
    /// A caller-supplied reference longitude was not finite.
    NonFiniteLongitude(f64),
}

impl Display for AlmanacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "invalid instant: {e}"),
            Self::Search(e) => write!(f, "calendar build failed: {e}"),
            Self::IncompleteCalendar { year, count } => {
                write!(f, "calendar for {year} has {count} ingresses, expected 12")
            }
            Self::NonFiniteLongitude(v) => write!(f, "reference longitude is not finite: {v}"),
        }
    }
}

impl Error for AlmanacError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for AlmanacError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<SearchError> for AlmanacError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
