//! Aspect kinds, orb tolerances, and detected aspect records.

use natal_core::Body;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The five canonical (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspect kinds in the order they are tested.
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Canonical separation in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Default orb tolerance in degrees.
    pub const fn default_orb_deg(self) -> f64 {
        match self {
            Self::Sextile => 6.0,
            Self::Conjunction | Self::Square | Self::Trine | Self::Opposition => 8.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }

    pub const fn french_name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjonction",
            Self::Sextile => "Sextile",
            Self::Square => "Carré",
            Self::Trine => "Trigone",
            Self::Opposition => "Opposition",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind orb tolerances in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbTable {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            conjunction: AspectKind::Conjunction.default_orb_deg(),
            sextile: AspectKind::Sextile.default_orb_deg(),
            square: AspectKind::Square.default_orb_deg(),
            trine: AspectKind::Trine.default_orb_deg(),
            opposition: AspectKind::Opposition.default_orb_deg(),
        }
    }
}

impl OrbTable {
    /// Tolerance for `kind`.
    pub const fn orb_for(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }

    /// Every orb must be finite and within [0, 180].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in ALL_ASPECT_KINDS {
            let orb = self.orb_for(kind);
            if !orb.is_finite() || !(0.0..=180.0).contains(&orb) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} orb must be within [0, 180], got {orb}",
                    kind.name()
                )));
            }
        }
        Ok(())
    }
}

/// One detected aspect between two catalog bodies.
///
/// `first` always precedes `second` in catalog order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Angular separation of the two longitudes, [0, 180].
    pub separation_deg: f64,
    /// `|separation − canonical angle|`.
    pub orb_deg: f64,
}

impl Aspect {
    /// Canonical angle of the aspect kind.
    pub const fn angle_deg(&self) -> f64 {
        self.kind.angle_deg()
    }
}
