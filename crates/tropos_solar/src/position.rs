//! Calendar-instant entry points for the solar longitude series.

use tropos_time::{jd_to_centuries, TimeError, UtcTime};

use crate::series::apparent_longitude_deg;

/// Half-width of the central-difference window for speed estimation, days.
const SPEED_STEP_DAYS: f64 = 0.25;

/// Apparent solar ecliptic longitude at a Julian Date, degrees in [0, 360).
///
/// The primitive the root-finding layers iterate on. Infallible for
/// finite input.
pub fn solar_longitude_at_jd(jd: f64) -> f64 {
    apparent_longitude_deg(jd_to_centuries(jd))
}

/// Apparent solar ecliptic longitude for a UTC instant.
///
/// Validates the instant before computing; an invalid or non-finite
/// instant is rejected, never evaluated.
pub fn solar_longitude(utc: &UtcTime) -> Result<f64, TimeError> {
    utc.validate()?;
    Ok(solar_longitude_at_jd(utc.to_jd()))
}

/// Instantaneous solar angular speed in degrees/day.
///
/// Central finite difference over a half-day window; wraps correctly
/// across the 0°/360° boundary. Varies between ~0.953 °/day near aphelion
/// and ~1.019 °/day near perihelion.
pub fn solar_speed_deg_per_day(jd: f64) -> f64 {
    let before = solar_longitude_at_jd(jd - SPEED_STEP_DAYS);
    let after = solar_longitude_at_jd(jd + SPEED_STEP_DAYS);
    let mut delta = after - before;
    if delta < 0.0 {
        delta += 360.0;
    }
    delta / (2.0 * SPEED_STEP_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_in_range_over_a_century() {
        let base = UtcTime::new(1975, 1, 1, 0, 0, 0.0).to_jd();
        for i in 0..1000 {
            let jd = base + i as f64 * 36.6;
            let lon = solar_longitude_at_jd(jd);
            assert!((0.0..360.0).contains(&lon), "lon at jd {jd} = {lon}");
        }
    }

    #[test]
    fn rejects_invalid_instant() {
        let bad = UtcTime::new(2024, 13, 1, 0, 0, 0.0);
        assert!(solar_longitude(&bad).is_err());
        let nan = UtcTime::new(2024, 6, 1, 0, 0, f64::NAN);
        assert!(solar_longitude(&nan).is_err());
    }

    #[test]
    fn speed_within_orbital_bounds() {
        let base = UtcTime::new(2024, 1, 1, 0, 0, 0.0).to_jd();
        for i in 0..366 {
            let speed = solar_speed_deg_per_day(base + i as f64);
            assert!(
                (0.94..1.03).contains(&speed),
                "speed at day {i} = {speed}"
            );
        }
    }

    #[test]
    fn faster_at_perihelion_than_aphelion() {
        // Perihelion is in early January, aphelion in early July.
        let jan = UtcTime::new(2024, 1, 4, 0, 0, 0.0).to_jd();
        let jul = UtcTime::new(2024, 7, 4, 0, 0, 0.0).to_jd();
        let v_jan = solar_speed_deg_per_day(jan);
        let v_jul = solar_speed_deg_per_day(jul);
        assert!(
            v_jan > v_jul + 0.04,
            "perihelion {v_jan} vs aphelion {v_jul}"
        );
    }

    #[test]
    fn speed_wraps_across_aries_point() {
        // Late March: longitude crosses 360 -> 0; speed must stay positive.
        let jd = UtcTime::new(2024, 3, 20, 3, 0, 0.0).to_jd();
        let speed = solar_speed_deg_per_day(jd);
        assert!((0.94..1.03).contains(&speed), "speed = {speed}");
    }
}
