//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the canonical instant representation used throughout the
//! engine. Conversion to/from Julian Date is direct; wall-clock access and
//! RFC 3339 interop go through `chrono`.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Construct and validate in one step.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let t = Self::new(year, month, day, hour, minute, second);
        t.validate()?;
        Ok(t)
    }

    /// Reject non-finite or out-of-range calendar fields.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !self.second.is_finite() {
            return Err(TimeError::NonFiniteSeconds(self.second));
        }
        if self.month < 1 || self.month > 12 {
            return Err(TimeError::FieldOutOfRange {
                field: "month",
                value: self.month as i64,
            });
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::FieldOutOfRange {
                field: "day",
                value: self.day as i64,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::FieldOutOfRange {
                field: "hour",
                value: self.hour as i64,
            });
        }
        if self.minute > 59 {
            return Err(TimeError::FieldOutOfRange {
                field: "minute",
                value: self.minute as i64,
            });
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::FieldOutOfRange {
                field: "second",
                value: self.second as i64,
            });
        }
        Ok(())
    }

    /// Convert to a Julian Date.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a Julian Date back to a UTC calendar time.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let frac = day_frac.fract();
        let total_seconds = frac * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// The current wall-clock instant.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Convert from a `chrono` UTC datetime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn j2000_jd() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.to_jd() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip() {
        let t = UtcTime::new(2025, 6, 21, 2, 42, 0.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!(back.year, 2025);
        assert_eq!(back.month, 6);
        assert_eq!(back.day, 21);
        assert_eq!(back.hour, 2);
        assert_eq!(back.minute, 42);
        assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn validate_accepts_leap_day() {
        assert!(UtcTime::new(2024, 2, 29, 0, 0, 0.0).validate().is_ok());
        assert!(UtcTime::new(2023, 2, 29, 0, 0, 0.0).validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert!(UtcTime::new(2024, 13, 1, 0, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2024, 4, 31, 0, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2024, 1, 1, 24, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2024, 1, 1, 0, 60, 0.0).validate().is_err());
        assert!(UtcTime::new(2024, 1, 1, 0, 0, 61.0).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_seconds() {
        let err = UtcTime::new(2024, 1, 1, 0, 0, f64::NAN).validate();
        assert!(matches!(err, Err(TimeError::NonFiniteSeconds(_))));
        let err = UtcTime::new(2024, 1, 1, 0, 0, f64::INFINITY).validate();
        assert!(matches!(err, Err(TimeError::NonFiniteSeconds(_))));
    }

    #[test]
    fn from_datetime_matches_fields() {
        let dt = "2025-03-20T09:01:30Z".parse::<DateTime<Utc>>().unwrap();
        let t = UtcTime::from(dt);
        assert_eq!(t.year, 2025);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 9);
        assert_eq!(t.minute, 1);
        assert!((t.second - 30.0).abs() < 1e-9);
    }
}
