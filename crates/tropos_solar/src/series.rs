//! Truncated solar longitude series.
//!
//! Geometric mean longitude and equation of center follow the classical
//! truncated solar theory (Meeus, *Astronomical Algorithms*, 2nd ed.,
//! ch. 25). Nutation in longitude keeps the four largest lunisolar terms
//! of the IAU series; aberration is the standard constant correction.
//! Public domain formulas.
//!
//! Truncation is fixed deliberately: the retained terms bound the error of
//! the apparent longitude to about ±0.01° within ±2 centuries of J2000.0.

/// Annual aberration in ecliptic longitude, arcseconds.
pub const ABERRATION_ARCSEC: f64 = -20.4898;

/// Sun's geometric mean longitude in degrees, normalized to [0, 360).
///
/// `t` = Julian centuries from J2000.0.
pub fn mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Sun's mean anomaly in degrees, normalized to [0, 360).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t)
}

/// Equation of center in degrees.
///
/// Three periodic terms in the mean anomaly with secular amplitude drift;
/// peak magnitude ~1.92° near the orbit's quadrature points.
pub fn equation_of_center_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Truncated lunisolar nutation term coefficients.
///
/// Each row: `[nL, nL', nΩ, amplitude]` where L is the Sun's mean
/// longitude, L' the Moon's mean longitude, Ω the longitude of the Moon's
/// ascending node, and the amplitude is in arcseconds for Δψ.
///
/// The four largest terms of the IAU nutation-in-longitude series.
#[rustfmt::skip]
static NUTATION_TERMS: [(i8, i8, i8, f64); 4] = [
    // nL  nL'  nΩ   amplitude (arcsec)
    (  0,   0,   1, -17.1996),
    (  2,   0,   0,  -1.3187),
    (  0,   2,   0,  -0.2274),
    (  0,   0,   2,   0.2062),
];

/// Nutation in ecliptic longitude (Δψ) in arcseconds.
///
/// Truncated to the terms in [`NUTATION_TERMS`]; accuracy ~0.5″, ample for
/// the ±0.01° longitude error bound.
pub fn nutation_in_longitude_arcsec(t: f64) -> f64 {
    // Mean longitude of the Sun, mean longitude of the Moon, and longitude
    // of the Moon's ascending node, in radians.
    let l = mean_longitude_deg(t).to_radians();
    let lp = normalize_360(218.316_5 + 481_267.881_3 * t).to_radians();
    let om = normalize_360(125.044_52 - 1_934.136_261 * t).to_radians();

    let mut dpsi = 0.0;
    for &(nl, nlp, nom, amp) in &NUTATION_TERMS {
        let arg = nl as f64 * l + nlp as f64 * lp + nom as f64 * om;
        dpsi += amp * arg.sin();
    }
    dpsi
}

/// Apparent ecliptic longitude of the Sun in degrees, normalized to [0, 360).
///
/// Sum of the geometric mean longitude, equation of center, nutation in
/// longitude, and aberration.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let geometric = mean_longitude_deg(t) + equation_of_center_deg(t);
    let corrections = (nutation_in_longitude_arcsec(t) + ABERRATION_ARCSEC) / 3600.0;
    normalize_360(geometric + corrections)
}

/// Normalize an angle to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn mean_longitude_at_epoch() {
        assert_abs_diff_eq!(mean_longitude_deg(0.0), 280.466_46, epsilon = 1e-9);
    }

    #[test]
    fn mean_anomaly_at_epoch() {
        assert_abs_diff_eq!(mean_anomaly_deg(0.0), 357.529_11, epsilon = 1e-9);
    }

    #[test]
    fn equation_of_center_bounded() {
        // Peak magnitude is ~1.92 deg; sweep a full orbit.
        for i in 0..400 {
            let t = i as f64 / 400.0 * 0.01;
            let c = equation_of_center_deg(t);
            assert!(c.abs() < 2.0, "c({t}) = {c}");
        }
    }

    #[test]
    fn nutation_magnitude() {
        // Dominant term is 17.2 arcsec; the sum stays under ~19 arcsec.
        for i in 0..100 {
            let t = -1.0 + i as f64 * 0.02;
            let dpsi = nutation_in_longitude_arcsec(t);
            assert!(dpsi.abs() < 19.5, "dpsi({t}) = {dpsi}");
        }
    }

    #[test]
    fn nutation_near_node_cycle_2024() {
        // The 18.6-year node cycle was near a descending node through 2024;
        // Δψ should be distinctly negative there.
        let t = (2_460_310.5 - 2_451_545.0) / 36_525.0;
        let dpsi = nutation_in_longitude_arcsec(t);
        assert!(dpsi < 0.0, "dpsi = {dpsi}");
    }

    #[test]
    fn apparent_longitude_at_epoch() {
        // Sun's apparent longitude at J2000.0 is ~280.37 deg.
        let lon = apparent_longitude_deg(0.0);
        assert!((lon - 280.37).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn apparent_longitude_normalized() {
        for i in 0..500 {
            let t = -2.0 + i as f64 * 0.008;
            let lon = apparent_longitude_deg(t);
            assert!((0.0..360.0).contains(&lon), "lon({t}) = {lon}");
        }
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-12);
    }
}
