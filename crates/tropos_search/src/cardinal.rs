//! Equinox and solstice determination.
//!
//! The four cardinal points are the Aries, Cancer, Libra, and Capricorn
//! ingresses of a calendar year. Each search is seeded from the known
//! approximate calendar window for that crossing and refined with the
//! shared bisection machinery.

use tracing::warn;
use tropos_solar::solar_longitude_at_jd;
use tropos_time::{calendar_to_jd, UtcTime};
use tropos_zodiac::ALL_SIGNS;

use crate::error::SearchError;
use crate::ingress_types::{CardinalPoints, IngressEvent, SearchConfig};
use crate::search_util::{bisect_crossing, is_genuine_crossing, normalize_to_pm180, RootFind};

/// Scan seeds: (month, day, target longitude, entered sign index).
///
/// Each window opens several days before the earliest historical date of
/// the crossing; `CARDINAL_WINDOW_DAYS` closes it after the latest.
#[rustfmt::skip]
const CARDINAL_SEEDS: [(u32, u32, f64, u8); 4] = [
    // month day  target  sign
    (  3,    14,    0.0,   0), // spring equinox -> Aries
    (  6,    15,   90.0,   3), // summer solstice -> Cancer
    (  9,    16,  180.0,   6), // autumn equinox -> Libra
    ( 12,    15,  270.0,   9), // winter solstice -> Capricorn
];

/// Width of each cardinal scan window, days.
const CARDINAL_WINDOW_DAYS: f64 = 12.0;

/// Locate one cardinal crossing within its seeded window.
fn find_cardinal(
    year: i32,
    month: u32,
    day: u32,
    target_deg: f64,
    sign_index: u8,
    config: &SearchConfig,
) -> Result<IngressEvent, SearchError> {
    let residual = |t: f64| normalize_to_pm180(solar_longitude_at_jd(t) - target_deg);

    let jd_start = calendar_to_jd(year, month, day as f64);
    let steps = (CARDINAL_WINDOW_DAYS / config.scan_step_days).ceil() as usize;

    let mut t_prev = jd_start;
    let mut f_prev = residual(t_prev);

    for _ in 0..steps {
        let t_curr = t_prev + config.scan_step_days;
        let f_curr = residual(t_curr);

        if is_genuine_crossing(f_prev, f_curr) {
            return match bisect_crossing(
                &residual,
                t_prev,
                t_curr,
                config.tolerance_deg,
                config.max_iterations,
            ) {
                RootFind::Converged { jd, .. } => Ok(IngressEvent {
                    sign: ALL_SIGNS[sign_index as usize],
                    sign_index,
                    jd,
                    utc: UtcTime::from_jd(jd),
                    longitude_deg: solar_longitude_at_jd(jd),
                }),
                RootFind::Failed {
                    last_estimate_jd,
                    iterations,
                } => {
                    warn!(
                        target_deg,
                        last_estimate_jd, iterations, "cardinal refinement failed to converge"
                    );
                    Err(SearchError::NoConvergence {
                        context: "cardinal point",
                        last_estimate_jd,
                        iterations,
                    })
                }
            };
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Err(SearchError::NoConvergence {
        context: "cardinal scan window exhausted",
        last_estimate_jd: t_prev,
        iterations: 0,
    })
}

/// Compute the four cardinal points (two equinoxes, two solstices) of a
/// calendar year.
pub fn cardinal_points(year: i32, config: &SearchConfig) -> Result<CardinalPoints, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let [spring, summer, autumn, winter] = CARDINAL_SEEDS;

    Ok(CardinalPoints {
        year,
        spring_equinox: find_cardinal(year, spring.0, spring.1, spring.2, spring.3, config)?,
        summer_solstice: find_cardinal(year, summer.0, summer.1, summer.2, summer.3, config)?,
        autumn_equinox: find_cardinal(year, autumn.0, autumn.1, autumn.2, autumn.3, config)?,
        winter_solstice: find_cardinal(year, winter.0, winter.1, winter.2, winter.3, config)?,
    })
}
