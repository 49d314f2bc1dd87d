//! Configuration and event types for ingress and cardinal-point search.

use serde::Serialize;
use tropos_time::UtcTime;
use tropos_zodiac::Sign;

/// Tuning knobs for the boundary search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Coarse scan step in days. The Sun needs ~30 days per sign, so any
    /// step below half a sign cannot skip a boundary.
    pub scan_step_days: f64,
    /// Convergence tolerance on the longitude residual, degrees.
    /// The default 1e-4 deg corresponds to ~9 seconds of time.
    pub tolerance_deg: f64,
    /// Bisection iteration cap; guarantees termination.
    pub max_iterations: u32,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.scan_step_days.is_finite() || self.scan_step_days <= 0.0 {
            return Err("scan_step_days must be positive");
        }
        if self.scan_step_days > 14.0 {
            return Err("scan_step_days must not exceed 14 days");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than zero");
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scan_step_days: 1.0,
            tolerance_deg: 1e-4,
            max_iterations: 50,
        }
    }
}

/// The Sun crossing into a new zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IngressEvent {
    /// The sign being entered.
    pub sign: Sign,
    /// 0-based index of the entered sign.
    pub sign_index: u8,
    /// Julian Date of the crossing.
    pub jd: f64,
    /// UTC calendar time of the crossing.
    pub utc: UtcTime,
    /// Apparent solar longitude at the refined instant, degrees.
    pub longitude_deg: f64,
}

/// The four season-changing instants of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardinalPoints {
    pub year: i32,
    /// Sun at 0 deg (Aries ingress).
    pub spring_equinox: IngressEvent,
    /// Sun at 90 deg (Cancer ingress).
    pub summer_solstice: IngressEvent,
    /// Sun at 180 deg (Libra ingress).
    pub autumn_equinox: IngressEvent,
    /// Sun at 270 deg (Capricorn ingress).
    pub winter_solstice: IngressEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let c = SearchConfig::default();
        assert!(c.validate().is_ok());
        assert!((c.tolerance_deg - 1e-4).abs() < 1e-12);
        assert_eq!(c.max_iterations, 50);
    }

    #[test]
    fn config_rejects_zero_step() {
        let mut c = SearchConfig::default();
        c.scan_step_days = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_huge_step() {
        let mut c = SearchConfig::default();
        c.scan_step_days = 20.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_iterations() {
        let mut c = SearchConfig::default();
        c.max_iterations = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn config_rejects_nan_tolerance() {
        let mut c = SearchConfig::default();
        c.tolerance_deg = f64::NAN;
        assert!(c.validate().is_err());
    }
}
