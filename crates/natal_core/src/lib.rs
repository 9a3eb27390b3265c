//! Mean-longitude position engine for natal chart bodies.
//!
//! This crate provides:
//! - The fixed 11-entry body catalog (Sun through Pluto plus the mean
//!   lunar North Node) with its quadratic mean-longitude series
//! - Ecliptic longitude, placeholder latitude, and a finite-difference
//!   retrograde flag for any catalog body at a [`JulianDay`]
//!
//! This is not a precision ephemeris: no perturbations, no light time, no
//! true velocities.

pub mod body;
pub mod error;
pub mod position;

pub use body::{ALL_BODIES, Body, MeanLongitude};
pub use error::CoreError;
pub use position::{
    BodyPosition, DEFAULT_RETROGRADE_BASELINE_CENTURIES, PositionConfig, all_body_positions,
    body_position, body_position_with, ecliptic_latitude_deg, is_retrograde, mean_longitude_deg,
};

// Re-export the time axis so downstream crates can name it from here.
pub use natal_time::JulianDay;
