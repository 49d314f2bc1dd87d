//! Point-in-time queries: zodiac position, current period, diagnostics.

use serde::Serialize;
use tropos_solar::{solar_longitude, solar_speed_deg_per_day};
use tropos_time::UtcTime;
use tropos_zodiac::{resolve_position, Sign, ZodiacPosition};

use crate::cache::CalendarCache;
use crate::error::AlmanacError;

/// The upcoming sign change relative to a queried instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NextIngress {
    pub sign: Sign,
    pub instant: UtcTime,
    pub jd: f64,
    pub days_until: f64,
}

/// Full answer to "what period is this instant in".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentPeriod {
    /// Sign and decan placement of the instant.
    pub position: ZodiacPosition,
    /// The next sign change after the instant.
    pub next_ingress: NextIngress,
    /// Instantaneous solar angular speed, degrees/day. Reported as a
    /// diagnostic of orbital velocity variability.
    pub solar_speed_deg_per_day: f64,
}

/// Nominal precision of the longitude series and the features it covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    pub precision_class: &'static str,
    pub features: &'static [&'static str],
}

/// Resolve an instant to its zodiac sign and decan.
pub fn resolve_zodiac_position(utc: &UtcTime) -> Result<ZodiacPosition, AlmanacError> {
    let longitude = solar_longitude(utc)?;
    Ok(resolve_position(longitude))
}

/// Resolve an instant to its full current period.
///
/// Consults the instant's calendar year; when the instant falls after the
/// December Capricorn ingress, the next ingress comes from the following
/// year's calendar.
pub fn current_period(
    cache: &CalendarCache,
    utc: &UtcTime,
) -> Result<CurrentPeriod, AlmanacError> {
    let longitude = solar_longitude(utc)?;
    let position = resolve_position(longitude);
    let jd = utc.to_jd();

    let calendar = cache.get_or_build(utc.year)?;
    let next = match calendar.next_entry_after(jd) {
        Some(entry) => NextIngress {
            sign: entry.sign,
            instant: entry.ingress,
            jd: entry.ingress_jd,
            days_until: entry.ingress_jd - jd,
        },
        None => {
            let following = cache.get_or_build(utc.year + 1)?;
            let Some(first) = following.entries.first() else {
                return Err(AlmanacError::IncompleteCalendar {
                    year: utc.year + 1,
                    count: 0,
                });
            };
            NextIngress {
                sign: first.sign,
                instant: first.ingress,
                jd: first.ingress_jd,
                days_until: first.ingress_jd - jd,
            }
        }
    };

    Ok(CurrentPeriod {
        position,
        next_ingress: next,
        solar_speed_deg_per_day: solar_speed_deg_per_day(jd),
    })
}

/// Nominal accuracy of the engine (fixed by the series truncation).
pub fn accuracy_metrics() -> AccuracyMetrics {
    AccuracyMetrics {
        precision_class: "±0.01°",
        features: &[
            "geometric mean longitude",
            "equation of center (3 terms)",
            "nutation in longitude (4 terms)",
            "aberration",
        ],
    }
}

/// Signed smallest angular difference between this engine's longitude and
/// a cruder reference calculation, degrees. For validation/regression use.
pub fn compare_accuracy(
    utc: &UtcTime,
    reference_longitude_deg: f64,
) -> Result<f64, AlmanacError> {
    if !reference_longitude_deg.is_finite() {
        return Err(AlmanacError::NonFiniteLongitude(reference_longitude_deg));
    }
    let longitude = solar_longitude(utc)?;
    Ok(normalize_to_pm180(longitude - reference_longitude_deg))
}

/// Normalize an angle to [-180, +180].
fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}
