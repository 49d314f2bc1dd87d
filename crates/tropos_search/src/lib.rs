//! Solar event search engine: sign ingresses and cardinal points.
//!
//! This crate provides:
//! - Bounded, wrap-aware zero-crossing refinement over the solar
//!   longitude function
//! - Sign-ingress search (next/previous/range scan)
//! - Equinox and solstice (cardinal point) determination per year
//!
//! Algorithm: coarse scan + bisection on f(t) = normalize(longitude(t) -
//! target). The normalize function wraps to [-180, +180] so zero-crossings
//! correspond to the target boundary. Bisection is bracketed, so the Sun's
//! variable angular speed from orbital eccentricity cannot stall it.

pub mod cardinal;
pub mod error;
pub mod ingress;
pub mod ingress_types;
pub(crate) mod search_util;

pub use cardinal::cardinal_points;
pub use error::SearchError;
pub use ingress::{next_ingress, prev_ingress, search_ingresses};
pub use ingress_types::{CardinalPoints, IngressEvent, SearchConfig};
pub use search_util::RootFind;
