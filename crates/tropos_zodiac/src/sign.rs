//! Zodiac sign and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at the vernal equinox point (0 deg). Given an
//! ecliptic longitude, we identify which sign the point falls in and
//! express the position as degrees-minutes-seconds within that sign.
//!
//! Sign spans are half-open: a longitude of exactly 30 deg belongs to
//! Taurus, not Aries.

use serde::{Deserialize, Serialize};

use crate::decan::Planet;

/// Width of one zodiac sign in degrees.
pub const SIGN_SPAN_DEG: f64 = 30.0;

/// The 12 tropical zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Classical element of the sign (fire/earth/air/water triplicities).
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Traditional ruling planet of the sign.
    pub const fn ruling_planet(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }

    /// Descriptive keywords for the sign.
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Aries => &["initiative", "courage", "drive"],
            Self::Taurus => &["stability", "patience", "sensuality"],
            Self::Gemini => &["curiosity", "communication", "versatility"],
            Self::Cancer => &["nurture", "memory", "protection"],
            Self::Leo => &["vitality", "expression", "generosity"],
            Self::Virgo => &["analysis", "craft", "service"],
            Self::Libra => &["balance", "partnership", "harmony"],
            Self::Scorpio => &["intensity", "transformation", "depth"],
            Self::Sagittarius => &["exploration", "optimism", "philosophy"],
            Self::Capricorn => &["discipline", "ambition", "endurance"],
            Self::Aquarius => &["innovation", "community", "independence"],
            Self::Pisces => &["imagination", "empathy", "dissolution"],
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full sign position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignPosition {
    /// The zodiac sign.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Normalize longitude to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Determine the sign from an ecliptic longitude in degrees.
///
/// Upstream producers guarantee normalized input, but the longitude is
/// still reduced modulo 360 here rather than trusted. Each sign spans
/// exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(longitude_deg: f64) -> SignPosition {
    let lon = normalize_360(longitude_deg);
    let sign_idx = (lon / SIGN_SPAN_DEG).floor() as u8;
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let sign_idx = sign_idx.min(11);
    let degrees_in_sign = lon - (sign_idx as f64) * SIGN_SPAN_DEG;
    let sign = ALL_SIGNS[sign_idx as usize];
    let dms = deg_to_dms(degrees_in_sign);

    SignPosition {
        sign,
        sign_index: sign_idx,
        degrees_in_sign,
        dms,
    }
}
