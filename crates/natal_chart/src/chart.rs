//! Natal chart assembly.
//!
//! Time conversion, body positions and house cusps are computed
//! independently from the same Julian Day, then combined: each body gets a
//! sign, an in-sign degree and a house, each cusp gets a sign, and the body
//! longitudes go through aspect detection. The result is a pure function of
//! the input and config.

use natal_core::{Body, all_body_positions};
use natal_time::{CivilDate, ClockTime, JulianDay, OffsetSource, UtcOffset, julian_day};
use tracing::{debug, debug_span, warn};

use crate::aspect::find_aspects;
use crate::chart_types::{Chart, ChartInput, ChartWarning, House, PlacedBody};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::geo::GeoLocation;
use crate::house::house_cusps;
use crate::zodiac::{degree_in_sign, sign_from_longitude};

/// Parse a coordinate string. Blank is missing; anything that is not a
/// finite decimal number is malformed.
pub(crate) fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, ChartError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ChartError::MissingField(field));
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ChartError::MalformedCoordinate {
            field,
            value: raw.to_string(),
        }),
    }
}

fn require<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, ChartError> {
    let s = raw.trim();
    if s.is_empty() {
        Err(ChartError::MissingField(field))
    } else {
        Ok(s)
    }
}

impl ChartInput {
    /// Build an input from already-typed parts.
    pub fn new(date: CivilDate, time: ClockTime, offset: UtcOffset, location: GeoLocation) -> Self {
        Self {
            date,
            time,
            offset,
            offset_source: OffsetSource::Parsed,
            raw_timezone: offset.to_string(),
            location,
        }
    }

    /// Parse the five raw birth-data strings.
    ///
    /// Every field is required. Date and time must parse completely and be
    /// in range; coordinates must be finite numbers. The timezone is the
    /// one lenient field: an unreadable offset becomes UTC+0 and is
    /// recorded in `offset_source`.
    pub fn parse(
        date: &str,
        time: &str,
        timezone: &str,
        latitude: &str,
        longitude: &str,
    ) -> Result<Self, ChartError> {
        require("date", date)?;
        require("time", time)?;
        require("timezone", timezone)?;
        let latitude_deg = parse_coordinate("latitude", latitude)?;
        let longitude_deg = parse_coordinate("longitude", longitude)?;
        Self::with_coordinates(date, time, timezone, latitude_deg, longitude_deg)
    }

    /// Like [`ChartInput::parse`] for callers that already hold numeric
    /// coordinates.
    pub fn with_coordinates(
        date: &str,
        time: &str,
        timezone: &str,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        let date: CivilDate = require("date", date)?.parse()?;
        let time: ClockTime = require("time", time)?.parse()?;
        let raw_tz = require("timezone", timezone)?;

        let (offset, offset_source) = UtcOffset::parse_lenient(raw_tz);
        let location = GeoLocation::new(latitude_deg, longitude_deg);
        location.validate()?;

        Ok(Self {
            date,
            time,
            offset,
            offset_source,
            raw_timezone: raw_tz.to_string(),
            location,
        })
    }

    /// Julian Day of the birth instant.
    pub fn julian_day(&self) -> JulianDay {
        julian_day(self.date, self.time, self.offset)
    }
}

/// Compute the full chart for `input`.
pub fn compute_chart(input: &ChartInput, config: &ChartConfig) -> Result<Chart, ChartError> {
    config
        .validate()
        .map_err(|e| ChartError::InvalidConfig(e.to_string()))?;

    let jd = input.julian_day();
    let span = debug_span!("compute_chart", jd = jd.value());
    let _enter = span.enter();

    let mut warnings = Vec::new();
    if input.offset_source == OffsetSource::Defaulted {
        warnings.push(ChartWarning::TimezoneDefaulted {
            raw: input.raw_timezone.clone(),
        });
    }

    let positions = all_body_positions(jd, &config.position);
    let cusps = house_cusps(jd, &input.location)?;
    if !cusps.is_circular_sequence() {
        warn!(
            latitude = input.location.latitude_deg,
            "house cusps are not in circular order"
        );
        warnings.push(ChartWarning::IrregularHouseCusps);
    }

    let bodies: Vec<PlacedBody> = positions
        .iter()
        .map(|&(body, pos)| PlacedBody {
            body,
            longitude_deg: pos.longitude_deg,
            latitude_deg: pos.latitude_deg,
            sign: sign_from_longitude(pos.longitude_deg),
            degrees_in_sign: degree_in_sign(pos.longitude_deg),
            retrograde: pos.retrograde,
            house: cusps.house_of(pos.longitude_deg),
        })
        .collect();

    let houses: Vec<House> = cusps
        .as_array()
        .iter()
        .enumerate()
        .map(|(i, &cusp)| House {
            number: i as u8 + 1,
            cusp_deg: cusp,
            sign: sign_from_longitude(cusp),
        })
        .collect();

    let longitudes: Vec<(Body, f64)> = bodies.iter().map(|p| (p.body, p.longitude_deg)).collect();
    let aspects = find_aspects(&longitudes, &config.orbs);

    let chart = Chart {
        julian_day: jd,
        bodies,
        houses,
        aspects,
        warnings,
    };
    check_finite(&chart)?;
    debug!(
        bodies = chart.bodies.len(),
        aspects = chart.aspects.len(),
        warnings = chart.warnings.len(),
        "chart computed"
    );
    Ok(chart)
}

fn check_finite(chart: &Chart) -> Result<(), ChartError> {
    if !chart.julian_day.value().is_finite() {
        return Err(ChartError::NonFiniteResult("julian day"));
    }
    for b in &chart.bodies {
        if !b.longitude_deg.is_finite() {
            return Err(ChartError::NonFiniteResult("body longitude"));
        }
        if !b.latitude_deg.is_finite() {
            return Err(ChartError::NonFiniteResult("body latitude"));
        }
        if !b.degrees_in_sign.is_finite() {
            return Err(ChartError::NonFiniteResult("degree in sign"));
        }
    }
    if chart.houses.iter().any(|h| !h.cusp_deg.is_finite()) {
        return Err(ChartError::NonFiniteResult("house cusp"));
    }
    for a in &chart.aspects {
        if !a.separation_deg.is_finite() || !a.orb_deg.is_finite() {
            return Err(ChartError::NonFiniteResult("aspect orb"));
        }
    }
    Ok(())
}
