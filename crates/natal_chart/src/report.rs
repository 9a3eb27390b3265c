//! Serializable chart report with localized names.
//!
//! Field names follow the established response shape consumed by chart
//! front ends: `planets`, `houses` and `aspects`, with `julianDay` and
//! `warnings` alongside.

use natal_core::Body;
use serde::Serialize;

use crate::aspect_types::AspectKind;
use crate::chart_types::{Chart, ChartWarning};
use crate::config::Locale;
use crate::zodiac::ZodiacSign;

fn body_name(body: Body, locale: Locale) -> &'static str {
    match locale {
        Locale::English => body.name(),
        Locale::French => body.french_name(),
    }
}

fn sign_name(sign: ZodiacSign, locale: Locale) -> &'static str {
    match locale {
        Locale::English => sign.name(),
        Locale::French => sign.french_name(),
    }
}

fn aspect_name(kind: AspectKind, locale: Locale) -> &'static str {
    match locale {
        Locale::English => kind.name(),
        Locale::French => kind.french_name(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetReport {
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    pub sign: &'static str,
    pub degree: f64,
    pub retrograde: bool,
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseReport {
    pub number: u8,
    pub longitude: f64,
    pub sign: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectReport {
    pub planet1: &'static str,
    pub planet2: &'static str,
    pub aspect: &'static str,
    pub angle: f64,
    pub orb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarningReport {
    pub code: &'static str,
    pub message: String,
}

impl From<&ChartWarning> for WarningReport {
    fn from(w: &ChartWarning) -> Self {
        Self {
            code: w.code(),
            message: w.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub julian_day: f64,
    pub planets: Vec<PlanetReport>,
    pub houses: Vec<HouseReport>,
    pub aspects: Vec<AspectReport>,
    pub warnings: Vec<WarningReport>,
}

impl ChartReport {
    /// Render `chart` with names in `locale`.
    pub fn new(chart: &Chart, locale: Locale) -> Self {
        let planets = chart
            .bodies
            .iter()
            .map(|b| PlanetReport {
                name: body_name(b.body, locale),
                longitude: b.longitude_deg,
                latitude: b.latitude_deg,
                sign: sign_name(b.sign, locale),
                degree: b.degrees_in_sign,
                retrograde: b.retrograde,
                house: b.house,
            })
            .collect();
        let houses = chart
            .houses
            .iter()
            .map(|h| HouseReport {
                number: h.number,
                longitude: h.cusp_deg,
                sign: sign_name(h.sign, locale),
            })
            .collect();
        let aspects = chart
            .aspects
            .iter()
            .map(|a| AspectReport {
                planet1: body_name(a.first, locale),
                planet2: body_name(a.second, locale),
                aspect: aspect_name(a.kind, locale),
                angle: a.angle_deg(),
                orb: a.orb_deg,
            })
            .collect();
        Self {
            julian_day: chart.julian_day.value(),
            planets,
            houses,
            aspects,
            warnings: chart.warnings.iter().map(WarningReport::from).collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
