//! Observer location on Earth's surface.

use crate::error::HouseError;

/// Latitudes within this distance of ±90° count as polar.
pub const POLAR_LATITUDE_EPSILON_DEG: f64 = 1e-9;

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Whether the observer sits on (or numerically at) a pole.
    pub fn is_polar(&self) -> bool {
        90.0 - self.latitude_deg.abs() < POLAR_LATITUDE_EPSILON_DEG
    }

    /// Check ranges. A polar latitude passes here; the house engine
    /// reports it separately as a degenerate geometry.
    pub fn validate(&self) -> Result<(), HouseError> {
        if !self.latitude_deg.is_finite() || !self.longitude_deg.is_finite() {
            return Err(HouseError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(HouseError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(HouseError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }
}
