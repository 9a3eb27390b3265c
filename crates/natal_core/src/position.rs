//! Ecliptic position of a catalog body at a Julian Day.
//!
//! Longitude: the body's mean-longitude polynomial reduced to [0, 360).
//!
//! Latitude: `sin(T) × latitude_scale`. This is a placeholder that keeps
//! chart output stable against existing fixtures; it is not an orbital
//! latitude and must not be "improved" silently.
//!
//! Retrograde: one backward finite difference over a fixed baseline in
//! centuries. The body is flagged when the current longitude sits below the
//! earlier one by less than 180°; a larger drop is a forward crossing of
//! 360°→0° and is not flagged. The earlier longitude is reduced with a
//! truncating remainder, so a raw series value below zero stays negative
//! and never compares above the current longitude. The default baseline is
//! a whole Julian year, so fast movers can alias: Venus reads as
//! retrograde at some epochs (e.g. T = 0.24) for that reason alone.

use natal_time::{JulianDay, normalize_360};
use serde::{Deserialize, Serialize};

use crate::body::{ALL_BODIES, Body};
use crate::error::CoreError;

/// Default retrograde baseline: 0.01 Julian centuries (365.25 days).
pub const DEFAULT_RETROGRADE_BASELINE_CENTURIES: f64 = 0.01;

/// Tunables for the position engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionConfig {
    /// Finite-difference baseline for the retrograde test, in centuries.
    pub retrograde_baseline_centuries: f64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            retrograde_baseline_centuries: DEFAULT_RETROGRADE_BASELINE_CENTURIES,
        }
    }
}

impl PositionConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        let b = self.retrograde_baseline_centuries;
        if !b.is_finite() || b <= 0.0 {
            return Err(CoreError::InvalidConfig(
                "retrograde baseline must be a positive finite number of centuries",
            ));
        }
        Ok(())
    }
}

/// Derived state of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Placeholder ecliptic latitude in degrees (signed).
    pub latitude_deg: f64,
    /// Backward-difference retrograde flag.
    pub retrograde: bool,
}

/// Mean ecliptic longitude in degrees [0, 360) at `t` centuries from J2000.0.
pub fn mean_longitude_deg(body: Body, t: f64) -> f64 {
    normalize_360(body.mean_longitude_series().evaluate(t))
}

/// Placeholder ecliptic latitude in degrees at `t` centuries from J2000.0.
pub fn ecliptic_latitude_deg(body: Body, t: f64) -> f64 {
    t.sin() * body.latitude_scale()
}

/// Earlier longitude for the retrograde test: truncating remainder, sign
/// follows the raw series value.
fn earlier_longitude_deg(body: Body, t: f64) -> f64 {
    body.mean_longitude_series().evaluate(t) % 360.0
}

/// A genuine backward step: `curr` below `prev` by less than half a turn.
fn stepped_back(prev: f64, curr: f64) -> bool {
    curr < prev && prev - curr < 180.0
}

/// Whether the body's longitude went backwards over the last `baseline`
/// centuries before `t`.
pub fn is_retrograde(body: Body, t: f64, baseline_centuries: f64) -> bool {
    let curr = mean_longitude_deg(body, t);
    let prev = earlier_longitude_deg(body, t - baseline_centuries);
    stepped_back(prev, curr)
}

/// Position of `body` at `jd` with the default configuration.
pub fn body_position(body: Body, jd: JulianDay) -> BodyPosition {
    body_position_with(body, jd, &PositionConfig::default())
}

/// Position of `body` at `jd`.
pub fn body_position_with(body: Body, jd: JulianDay, config: &PositionConfig) -> BodyPosition {
    let t = jd.centuries_since_j2000();
    BodyPosition {
        longitude_deg: mean_longitude_deg(body, t),
        latitude_deg: ecliptic_latitude_deg(body, t),
        retrograde: is_retrograde(body, t, config.retrograde_baseline_centuries),
    }
}

/// Positions of all 11 catalog bodies, indexed by [`Body::index`].
pub fn all_body_positions(jd: JulianDay, config: &PositionConfig) -> [(Body, BodyPosition); 11] {
    ALL_BODIES.map(|b| (b, body_position_with(b, jd, config)))
}
