//! Annual calendar construction: the 12 linked sign-ingress entries of a
//! calendar year.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use tropos_search::{next_ingress, search_ingresses, SearchConfig};
use tropos_time::UtcTime;
use tropos_zodiac::Sign;

use crate::error::AlmanacError;

/// Every calendar year contains exactly 12 sign ingresses.
pub const ENTRIES_PER_YEAR: usize = 12;

/// One sign's reign within an annual calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalendarEntry {
    /// The sign entered at `ingress`.
    pub sign: Sign,
    /// When the Sun entered this sign.
    pub ingress: UtcTime,
    /// Julian Date of `ingress`.
    pub ingress_jd: f64,
    /// When the Sun leaves for the next sign.
    pub next_ingress: UtcTime,
    /// Julian Date of `next_ingress`.
    pub next_ingress_jd: f64,
}

impl CalendarEntry {
    /// Days this sign lasts; varies with orbital eccentricity
    /// (~29.4 near perihelion to ~31.5 near aphelion).
    pub fn duration_days(&self) -> f64 {
        self.next_ingress_jd - self.ingress_jd
    }
}

/// The 12 sign ingresses of one calendar year, chronologically ordered and
/// linked. Immutable once built; rebuilt wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualCalendar {
    pub year: i32,
    pub entries: Vec<CalendarEntry>,
    pub built_at: DateTime<Utc>,
}

impl AnnualCalendar {
    /// The entry whose span `[ingress, next_ingress)` contains `jd`.
    pub fn entry_containing(&self, jd: f64) -> Option<&CalendarEntry> {
        self.entries
            .iter()
            .find(|e| jd >= e.ingress_jd && jd < e.next_ingress_jd)
    }

    /// The first entry whose ingress is strictly after `jd`.
    pub fn next_entry_after(&self, jd: f64) -> Option<&CalendarEntry> {
        self.entries.iter().find(|e| e.ingress_jd > jd)
    }
}

/// Build the annual calendar for a year.
///
/// Fails atomically: if any of the 13 boundary searches (12 ingresses plus
/// the wrap into the following year) does not converge, no calendar is
/// produced.
pub fn build_calendar(
    year: i32,
    config: &SearchConfig,
    built_at: DateTime<Utc>,
) -> Result<AnnualCalendar, AlmanacError> {
    let start = UtcTime::new(year, 1, 1, 0, 0, 0.0);
    let end = UtcTime::new(year + 1, 1, 1, 0, 0, 0.0);

    let events = search_ingresses(&start, &end, config)?;
    if events.len() != ENTRIES_PER_YEAR {
        return Err(AlmanacError::IncompleteCalendar {
            year,
            count: events.len(),
        });
    }

    // The twelfth entry wraps to the first ingress of the following year.
    // Scan from half a day inside the sign so boundary jitter cannot
    // re-detect the ingress just found.
    let last = events[ENTRIES_PER_YEAR - 1];
    let wrap_scan_from = UtcTime::from_jd(last.jd + 0.5);
    let wrap = next_ingress(&wrap_scan_from, config)?.ok_or(AlmanacError::IncompleteCalendar {
        year,
        count: ENTRIES_PER_YEAR,
    })?;

    let mut entries = Vec::with_capacity(ENTRIES_PER_YEAR);
    for (i, event) in events.iter().enumerate() {
        let (next_utc, next_jd) = if i + 1 < ENTRIES_PER_YEAR {
            (events[i + 1].utc, events[i + 1].jd)
        } else {
            (wrap.utc, wrap.jd)
        };
        entries.push(CalendarEntry {
            sign: event.sign,
            ingress: event.utc,
            ingress_jd: event.jd,
            next_ingress: next_utc,
            next_ingress_jd: next_jd,
        });
    }

    debug!(year, "built annual calendar");

    Ok(AnnualCalendar {
        year,
        entries,
        built_at,
    })
}
