//! Chart configuration: output locale, orb tolerances, position tunables.
//!
//! All fields are optional in JSON; anything missing takes the compiled
//! default, which reproduces the reference chart constants.

use std::path::Path;

use natal_core::PositionConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aspect_types::OrbTable;
use crate::error::ConfigError;

/// Language used for body, sign and aspect names in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    French,
}

impl Locale {
    /// Parse a short language tag (`en`, `fr`) or full name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "fr" | "french" | "français" | "francais" => Some(Self::French),
            _ => None,
        }
    }
}

/// Everything that tunes chart computation and rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub locale: Locale,
    pub orbs: OrbTable,
    pub position: PositionConfig,
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.orbs.validate()?;
        self.position.validate()?;
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(?path, "loading chart config");
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
