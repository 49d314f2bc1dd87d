//! Shared numerical utilities for longitude boundary search.

/// Normalize an angle to [-180, +180].
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Check if a sign change is a genuine zero crossing vs a wrap-around
/// discontinuity.
///
/// When the normalized function jumps from ~+180 to ~-180 (or vice versa),
/// the product is negative but it's not a real zero crossing. A genuine
/// crossing has both values relatively small in magnitude.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Outcome of a bounded refinement loop.
///
/// Non-convergence is an expected, testable value here, not an exception:
/// the caller decides whether a `Failed` bracket is an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootFind {
    /// The residual dropped below tolerance.
    Converged {
        jd: f64,
        residual_deg: f64,
        iterations: u32,
    },
    /// The iteration cap was reached first.
    Failed {
        last_estimate_jd: f64,
        iterations: u32,
    },
}

/// Bisect a bracketing interval until the residual falls inside
/// `[0, tolerance_deg]`.
///
/// `f` must be rising over the bracket (`f(t_a) < 0 < f(t_b)`), which is
/// always the case for solar longitude against a boundary: the Sun's
/// longitude only increases. Converging on the non-negative side means the
/// returned instant lies just inside the entered span, so resolving the
/// instant recovers the entered sign rather than the one being left. The
/// loop is bounded by `max_iterations`; it never returns an unverified
/// estimate as converged.
pub(crate) fn bisect_crossing(
    f: &dyn Fn(f64) -> f64,
    mut t_a: f64,
    mut t_b: f64,
    tolerance_deg: f64,
    max_iterations: u32,
) -> RootFind {
    let mut f_a = f(t_a);

    for iteration in 1..=max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(t_mid);

        if (0.0..=tolerance_deg).contains(&f_mid) {
            return RootFind::Converged {
                jd: t_mid,
                residual_deg: f_mid,
                iterations: iteration,
            };
        }

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    RootFind::Failed {
        last_estimate_jd: 0.5 * (t_a + t_b),
        iterations: max_iterations,
    }
}
