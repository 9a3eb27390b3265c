//! Body catalog: the eleven chart points and their mean-longitude series.
//!
//! Coefficients are first-order mean longitudes (degrees, T in Julian
//! centuries from J2000.0). Sun and Moon follow Meeus Ch. 25 and 47, the
//! planets follow the Standish mean elements, and the node is the mean
//! ascending node of the Moon. No perturbation terms are applied.

/// Chart bodies in fixed catalog order (index 0 = Sun .. 10 = North Node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Mean ascending node of the Moon.
    NorthNode,
}

/// All 11 bodies in catalog order.
pub const ALL_BODIES: [Body; 11] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
];

/// Quadratic mean-longitude polynomial `L(T) = l0 + l1·T + l2·T²`, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLongitude {
    pub l0: f64,
    pub l1: f64,
    pub l2: f64,
}

impl MeanLongitude {
    /// Evaluate the series at `t` Julian centuries, without reduction.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.l0 + self.l1 * t + self.l2 * t * t
    }
}

#[rustfmt::skip]
const SERIES: [MeanLongitude; 11] = [
    MeanLongitude { l0: 280.46646,    l1: 36_000.769_83,      l2:  0.000_303_2 },
    MeanLongitude { l0: 218.316_447_7, l1: 481_267.881_234_21, l2: -0.001_578_6 },
    MeanLongitude { l0: 252.250_323_5, l1: 149_472.674_111_75, l2:  0.000_005_35 },
    MeanLongitude { l0: 181.979_099_5, l1: 58_517.815_387_29,  l2:  0.000_001_65 },
    MeanLongitude { l0: 355.432_999_58, l1: 19_140.302_684_99, l2:  0.000_002_61 },
    MeanLongitude { l0: 34.396_440_51, l1: 3_034.746_127_75,   l2:  0.000_223_3 },
    MeanLongitude { l0: 49.954_244_23, l1: 1_222.493_622_01,   l2: -0.000_252 },
    MeanLongitude { l0: 313.238_104_51, l1: 428.482_027_85,    l2:  0.000_303_9 },
    MeanLongitude { l0: 304.880_034,   l1: 218.459_453_25,     l2:  0.000_004_8 },
    MeanLongitude { l0: 238.929_038_33, l1: 145.207_805_15,    l2:  0.0 },
    MeanLongitude { l0: 125.044_52,    l1: -1_934.136_261,     l2:  0.002_070_8 },
];

/// Mean inclination of the lunar orbit, used as the Moon's latitude scale.
const MOON_LATITUDE_SCALE: f64 = 5.14;

/// Per-index latitude scale for every body other than the Moon.
const LATITUDE_SCALE_PER_INDEX: f64 = 0.8;

impl Body {
    /// 0-based catalog index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Body at a catalog index, or `None` past the end of the catalog.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALL_BODIES.len() {
            Some(ALL_BODIES[index])
        } else {
            None
        }
    }

    /// All 11 bodies in catalog order.
    pub const fn all() -> &'static [Body; 11] {
        &ALL_BODIES
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
        }
    }

    /// French display name.
    pub const fn french_name(self) -> &'static str {
        match self {
            Self::Sun => "Soleil",
            Self::Moon => "Lune",
            Self::Mercury => "Mercure",
            Self::Venus => "Vénus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturne",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluton",
            Self::NorthNode => "Nœud Nord",
        }
    }

    /// Look up a body by English or French name, ignoring case, spaces,
    /// hyphens and underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = fold_name(name);
        ALL_BODIES.iter().copied().find(|b| {
            fold_name(b.name()) == wanted || fold_name(b.french_name()) == wanted
        })
    }

    /// Mean-longitude polynomial for this body.
    pub const fn mean_longitude_series(self) -> MeanLongitude {
        SERIES[self.index()]
    }

    /// Scale applied to `sin(T)` for the placeholder ecliptic latitude.
    ///
    /// Moon: its mean orbital inclination. Everything else: `index × 0.8`.
    /// This is not a physical model.
    pub fn latitude_scale(self) -> f64 {
        match self {
            Self::Moon => MOON_LATITUDE_SCALE,
            other => other.index() as f64 * LATITUDE_SCALE_PER_INDEX,
        }
    }
}

fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
