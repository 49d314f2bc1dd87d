//! Sign-ingress search: when the Sun crosses a 30-degree sign boundary.
//!
//! Coarse daily scan of the sign index, then bisection on the longitude
//! residual against the boundary that was crossed.

use tracing::warn;
use tropos_solar::solar_longitude_at_jd;
use tropos_time::UtcTime;
use tropos_zodiac::{ALL_SIGNS, SIGN_SPAN_DEG};

use crate::error::SearchError;
use crate::ingress_types::{IngressEvent, SearchConfig};
use crate::search_util::{bisect_crossing, normalize_to_pm180, RootFind};

/// Maximum forward/backward scan for a single ingress, days.
///
/// The longest sign (Cancer) lasts ~31.5 days, so the next boundary is
/// always inside this window.
const MAX_SCAN_DAYS: f64 = 40.0;

/// Sign index (0..12) of the solar longitude at a Julian Date.
fn sign_index_at(jd: f64) -> u8 {
    let idx = (solar_longitude_at_jd(jd) / SIGN_SPAN_DEG).floor() as u8;
    idx.min(11)
}

/// Refine a bracketed boundary crossing into an ingress event.
fn refine_boundary(
    t_a: f64,
    t_b: f64,
    entered_index: u8,
    config: &SearchConfig,
) -> Result<IngressEvent, SearchError> {
    let target = entered_index as f64 * SIGN_SPAN_DEG;
    let residual = |t: f64| normalize_to_pm180(solar_longitude_at_jd(t) - target);

    match bisect_crossing(&residual, t_a, t_b, config.tolerance_deg, config.max_iterations) {
        RootFind::Converged { jd, .. } => Ok(IngressEvent {
            sign: ALL_SIGNS[entered_index as usize],
            sign_index: entered_index,
            jd,
            utc: UtcTime::from_jd(jd),
            longitude_deg: solar_longitude_at_jd(jd),
        }),
        RootFind::Failed {
            last_estimate_jd,
            iterations,
        } => {
            warn!(
                target_deg = target,
                last_estimate_jd, iterations, "ingress refinement failed to converge"
            );
            Err(SearchError::NoConvergence {
                context: "sign ingress",
                last_estimate_jd,
                iterations,
            })
        }
    }
}

/// Scan from `jd_start` in `step`-signed increments until the sign index
/// changes, then refine. Returns `None` if no change occurs within
/// `max_days`.
fn scan_for_ingress(
    jd_start: f64,
    step: f64,
    max_days: f64,
    config: &SearchConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    let max_steps = (max_days / step.abs()).ceil() as usize;
    let mut t_prev = jd_start;
    let mut idx_prev = sign_index_at(t_prev);

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let idx_curr = sign_index_at(t_curr);

        if idx_curr != idx_prev {
            // Forward scan enters idx_curr; backward scan leaves idx_prev.
            let entered = if step > 0.0 { idx_curr } else { idx_prev };
            let (t_a, t_b) = if t_prev < t_curr {
                (t_prev, t_curr)
            } else {
                (t_curr, t_prev)
            };
            return refine_boundary(t_a, t_b, entered, config).map(Some);
        }

        t_prev = t_curr;
        idx_prev = idx_curr;
    }

    Ok(None)
}

/// Find the next sign ingress strictly after `after`.
pub fn next_ingress(
    after: &UtcTime,
    config: &SearchConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    after.validate()?;
    scan_for_ingress(after.to_jd(), config.scan_step_days, MAX_SCAN_DAYS, config)
}

/// Find the most recent sign ingress at or before `before`.
pub fn prev_ingress(
    before: &UtcTime,
    config: &SearchConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    before.validate()?;
    scan_for_ingress(before.to_jd(), -config.scan_step_days, MAX_SCAN_DAYS, config)
}

/// Find every sign ingress in `[start, end)`, in chronological order.
pub fn search_ingresses(
    start: &UtcTime,
    end: &UtcTime,
    config: &SearchConfig,
) -> Result<Vec<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    start.validate()?;
    end.validate()?;

    let jd_start = start.to_jd();
    let jd_end = end.to_jd();
    if jd_end <= jd_start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }

    let mut events = Vec::new();
    let mut t_prev = jd_start;
    let mut idx_prev = sign_index_at(t_prev);

    loop {
        let t_curr = (t_prev + config.scan_step_days).min(jd_end);
        let idx_curr = sign_index_at(t_curr);

        if idx_curr != idx_prev {
            let event = refine_boundary(t_prev, t_curr, idx_curr, config)?;
            if event.jd >= jd_start && event.jd < jd_end {
                events.push(event);
            }
        }

        if t_curr >= jd_end {
            break;
        }

        t_prev = t_curr;
        idx_prev = idx_curr;
    }

    Ok(events)
}
