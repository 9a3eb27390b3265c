//! Request boundary: raw JSON body in, report or status-coded error out.
//!
//! Status mapping:
//! - 400 for missing or malformed fields
//! - 422 when the geometry is degenerate (polar observer)
//! - 500 for anything else, with a fixed message and no internal detail

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::chart::{compute_chart, parse_coordinate};
use crate::chart_types::ChartInput;
use crate::config::{ChartConfig, Locale};
use crate::error::{ChartError, ErrorKind};
use crate::report::ChartReport;

/// A coordinate as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn resolve(&self, field: &'static str) -> Result<f64, ChartError> {
        match self {
            Self::Number(v) if v.is_finite() => Ok(*v),
            Self::Number(v) => Err(ChartError::MalformedCoordinate {
                field,
                value: v.to_string(),
            }),
            Self::Text(s) => parse_coordinate(field, s),
        }
    }
}

/// Raw chart request body. Every field is optional at the serde level so
/// that absence is reported as a client error, not a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<Coordinate>,
    pub longitude: Option<Coordinate>,
}

fn present<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ChartError> {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ChartError::MissingField(field)),
    }
}

impl ChartRequest {
    /// Check presence of all five fields and parse them.
    ///
    /// Absent or blank fields are missing. A numeric `0` coordinate is a
    /// real value, not a missing one.
    pub fn validate(&self) -> Result<ChartInput, ChartError> {
        let date = present("date", &self.date)?;
        let time = present("time", &self.time)?;
        let timezone = present("timezone", &self.timezone)?;
        let latitude = self
            .latitude
            .as_ref()
            .ok_or(ChartError::MissingField("latitude"))?
            .resolve("latitude")?;
        let longitude = self
            .longitude
            .as_ref()
            .ok_or(ChartError::MissingField("longitude"))?
            .resolve("longitude")?;
        ChartInput::with_coordinates(date, time, timezone, latitude, longitude)
    }
}

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP-style status code.
    #[serde(skip)]
    pub status: u16,
    pub error: String,
}

impl ErrorResponse {
    /// Map a chart error to a status and a client-facing message.
    pub fn from_chart_error(err: &ChartError, locale: Locale) -> Self {
        match err.kind() {
            ErrorKind::ClientInput => {
                let error = match (err, locale) {
                    (ChartError::MissingField(_), Locale::French) => {
                        "Tous les champs sont requis".to_string()
                    }
                    (ChartError::MissingField(field), Locale::English) => {
                        format!("All fields are required (missing {field})")
                    }
                    _ => err.to_string(),
                };
                Self { status: 400, error }
            }
            ErrorKind::DegenerateGeometry => Self {
                status: 422,
                error: match locale {
                    Locale::English => {
                        "Houses are undefined at the poles; choose a non-polar latitude".into()
                    }
                    Locale::French => {
                        "Les maisons sont indéfinies aux pôles ; choisissez une latitude non polaire"
                            .into()
                    }
                },
            },
            ErrorKind::ComputationFailed => Self {
                status: 500,
                error: match locale {
                    Locale::English => "Chart calculation failed".into(),
                    Locale::French => "Erreur lors du calcul du thème astral".into(),
                },
            },
        }
    }
}

/// Validate, compute and render one request.
pub fn handle_request(
    request: &ChartRequest,
    config: &ChartConfig,
) -> Result<ChartReport, ErrorResponse> {
    let result = request
        .validate()
        .and_then(|input| compute_chart(&input, config));
    match result {
        Ok(chart) => Ok(ChartReport::new(&chart, config.locale)),
        Err(e) => {
            let response = ErrorResponse::from_chart_error(&e, config.locale);
            if response.status >= 500 {
                error!(error = %e, "chart calculation failed");
            } else {
                warn!(error = %e, status = response.status, "chart request rejected");
            }
            Err(response)
        }
    }
}
