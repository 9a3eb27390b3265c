//! House cusps, zodiac mapping, aspects and natal chart assembly.
//!
//! This crate provides:
//! - Twelve house cusps from local sidereal time and observer latitude
//! - Tropical sign and in-sign degree lookup
//! - Pairwise aspect detection with configurable orbs
//! - Chart assembly from raw birth data, with warnings for lenient inputs
//! - A serializable report and a status-coded request boundary
//!
//! All computation is pure: the same input and config always give the
//! same chart.

pub mod aspect;
pub mod aspect_types;
pub mod chart;
pub mod chart_types;
pub mod config;
pub mod error;
pub mod geo;
pub mod house;
pub mod house_types;
pub mod report;
pub mod request;
pub mod zodiac;

pub use aspect::{angular_separation, find_aspects};
pub use aspect_types::{ALL_ASPECT_KINDS, Aspect, AspectKind, OrbTable};
pub use chart::compute_chart;
pub use chart_types::{Chart, ChartInput, ChartWarning, House, PlacedBody};
pub use config::{ChartConfig, Locale};
pub use error::{ChartError, ConfigError, ErrorKind, HouseError};
pub use geo::{GeoLocation, POLAR_LATITUDE_EPSILON_DEG};
pub use house::{cusps_from_lst, house_cusps, mean_obliquity_deg};
pub use house_types::HouseCusps;
pub use report::{AspectReport, ChartReport, HouseReport, PlanetReport, WarningReport};
pub use request::{ChartRequest, Coordinate, ErrorResponse, handle_request};
pub use zodiac::{
    ALL_SIGNS, Dms, SignPosition, ZodiacSign, deg_to_dms, degree_in_sign, sign_from_longitude,
    sign_position,
};
