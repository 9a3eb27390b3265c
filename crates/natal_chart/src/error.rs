//! Error types for house, chart, and configuration computation.

use natal_core::CoreError;
use natal_time::TimeError;
use thiserror::Error;

/// Errors from the house cusp engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HouseError {
    /// Observer coordinates are not usable at all.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Observer is at a geographic pole; the latitude tangent term diverges.
    #[error("latitude {latitude_deg} is polar; house cusps are undefined")]
    DegenerateLatitude { latitude_deg: f64 },
    /// The cusp formula produced NaN or infinity.
    #[error("house {house} cusp is not finite")]
    NonFiniteCusp { house: u8 },
}

impl HouseError {
    /// Whether this is a geometry degeneracy rather than bad input.
    pub const fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::DegenerateLatitude { .. } | Self::NonFiniteCusp { .. }
        )
    }
}

/// Errors from loading or validating a [`crate::ChartConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

impl From<CoreError> for ConfigError {
    fn from(e: CoreError) -> Self {
        Self::InvalidValue(e.to_string())
    }
}

/// Coarse classification used at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller sent missing or malformed input.
    ClientInput,
    /// Input was well-formed but the geometry is undefined (polar observer).
    DegenerateGeometry,
    /// Anything else; never shown to users in detail.
    ComputationFailed,
}

/// Errors from natal chart computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A required input field is absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// A coordinate is not a finite number.
    #[error("{field} is not a number: {value:?}")]
    MalformedCoordinate { field: &'static str, value: String },
    /// Date, time, or timezone parsing failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// House cusp computation failed.
    #[error(transparent)]
    House(#[from] HouseError),
    /// The chart configuration is invalid.
    #[error("invalid chart config: {0}")]
    InvalidConfig(String),
    /// The assembled chart contains NaN or infinity.
    #[error("non-finite value in chart: {0}")]
    NonFiniteResult(&'static str),
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField(_) | Self::MalformedCoordinate { .. } | Self::Time(_) => {
                ErrorKind::ClientInput
            }
            Self::House(e) if e.is_degenerate() => ErrorKind::DegenerateGeometry,
            Self::House(_) => ErrorKind::ClientInput,
            Self::InvalidConfig(_) | Self::NonFiniteResult(_) => ErrorKind::ComputationFailed,
        }
    }
}
