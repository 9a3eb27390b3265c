//! Input and output records for a natal chart.

use natal_core::Body;
use natal_time::{CivilDate, ClockTime, JulianDay, OffsetSource, UtcOffset};

use crate::aspect_types::Aspect;
use crate::geo::GeoLocation;
use crate::zodiac::ZodiacSign;

/// Fully parsed birth data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub date: CivilDate,
    pub time: ClockTime,
    pub offset: UtcOffset,
    /// Whether `offset` was read from the input or fell back to UTC+0.
    pub offset_source: OffsetSource,
    /// The timezone string as given, kept for the fallback warning.
    pub raw_timezone: String,
    pub location: GeoLocation,
}

/// A catalog body placed in the zodiac and the houses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBody {
    pub body: Body,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub sign: ZodiacSign,
    /// Degrees within `sign`, [0, 30).
    pub degrees_in_sign: f64,
    pub retrograde: bool,
    /// House number 1-12.
    pub house: u8,
}

/// One house with its starting cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct House {
    /// 1-12.
    pub number: u8,
    pub cusp_deg: f64,
    pub sign: ZodiacSign,
}

/// Non-fatal conditions noticed while building a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartWarning {
    /// The timezone string was not `UTC±N`; UTC+0 was used.
    TimezoneDefaulted { raw: String },
    /// The cusps do not go once around the circle, so houses overlap.
    /// Happens inside the polar circles.
    IrregularHouseCusps,
}

impl ChartWarning {
    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TimezoneDefaulted { .. } => "timezone_defaulted",
            Self::IrregularHouseCusps => "irregular_house_cusps",
        }
    }
}

impl std::fmt::Display for ChartWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimezoneDefaulted { raw } => {
                write!(f, "timezone {raw:?} not understood, used UTC+0")
            }
            Self::IrregularHouseCusps => {
                f.write_str("house cusps are not in circular order; houses overlap")
            }
        }
    }
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub julian_day: JulianDay,
    /// All 11 catalog bodies in catalog order.
    pub bodies: Vec<PlacedBody>,
    /// Houses 1-12 in order.
    pub houses: Vec<House>,
    /// Tightest orb first.
    pub aspects: Vec<Aspect>,
    pub warnings: Vec<ChartWarning>,
}

impl Chart {
    /// Placement of `body`.
    pub fn body(&self, body: Body) -> Option<&PlacedBody> {
        self.bodies.iter().find(|p| p.body == body)
    }

    /// The Ascendant, i.e. the cusp of house 1.
    pub fn ascendant_deg(&self) -> Option<f64> {
        self.houses.first().map(|h| h.cusp_deg)
    }
}
