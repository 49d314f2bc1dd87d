//! Zodiac reference data and the longitude → sign/decan resolver.
//!
//! This crate provides:
//! - The 12 tropical zodiac signs with elements, rulers, and keywords
//! - Decan subdivision with the fixed Chaldean-rotation ruler table
//! - Pure resolvers from ecliptic longitude to sign and decan positions
//!
//! All reference data is immutable static tables; nothing is derived at
//! runtime.

pub mod decan;
pub mod sign;

pub use decan::{
    decan_from_longitude, resolve_position, DecanInfo, Planet, ZodiacPosition, CHALDEAN_ORDER,
    DECANS_PER_SIGN, DECAN_SPAN_DEG,
};
pub use sign::{
    deg_to_dms, dms_to_deg, sign_from_longitude, Dms, Element, Sign, SignPosition, ALL_SIGNS,
    SIGN_SPAN_DEG,
};
