//! Tropical zodiac sign and DMS (degrees-minutes-seconds) lookup.
//!
//! The ecliptic is divided into 12 equal signs of 30° each, starting with
//! Aries at 0°. A longitude maps to `floor(L / 30) mod 12` and to a degree
//! within that sign of `L mod 30`.

use natal_time::normalize_360;

/// The 12 tropical zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in angular order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// French name.
    pub const fn french_name(self) -> &'static str {
        match self {
            Self::Aries => "Bélier",
            Self::Taurus => "Taureau",
            Self::Gemini => "Gémeaux",
            Self::Cancer => "Cancer",
            Self::Leo => "Lion",
            Self::Virgo => "Vierge",
            Self::Libra => "Balance",
            Self::Scorpio => "Scorpion",
            Self::Sagittarius => "Sagittaire",
            Self::Capricorn => "Capricorne",
            Self::Aquarius => "Verseau",
            Self::Pisces => "Poissons",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An angle split into whole degrees, arc-minutes and tenths of an
/// arc-second.
///
/// Built by rounding to the nearest tenth of a second, so the seconds
/// field never shows 60.0: a value that rounds up carries into the minutes
/// and from there into the degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u16,
    /// 0..=59.
    pub minutes: u8,
    /// Seconds in tenths, 0..=599.
    pub tenths_of_second: u16,
}

const TENTHS_PER_MINUTE: u64 = 600;
const TENTHS_PER_DEGREE: u64 = 60 * TENTHS_PER_MINUTE;

impl Dms {
    /// Arc-seconds as a decimal value, [0, 60).
    pub fn seconds(&self) -> f64 {
        f64::from(self.tenths_of_second) / 10.0
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}.{}\"",
            self.degrees,
            self.minutes,
            self.tenths_of_second / 10,
            self.tenths_of_second % 10
        )
    }
}

/// Split decimal degrees into degrees, minutes and seconds.
///
/// The sign of `deg` is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let tenths = (deg.abs() * TENTHS_PER_DEGREE as f64).round() as u64;
    let in_degree = tenths % TENTHS_PER_DEGREE;
    Dms {
        degrees: u16::try_from(tenths / TENTHS_PER_DEGREE).unwrap_or(u16::MAX),
        minutes: (in_degree / TENTHS_PER_MINUTE) as u8,
        tenths_of_second: (in_degree % TENTHS_PER_MINUTE) as u16,
    }
}

/// Sign containing ecliptic longitude `lon_deg`.
pub fn sign_from_longitude(lon_deg: f64) -> ZodiacSign {
    let idx = (normalize_360(lon_deg) / 30.0).floor() as u8;
    ZodiacSign::from_index(idx)
}

/// Degrees into the sign, [0, 30).
pub fn degree_in_sign(lon_deg: f64) -> f64 {
    normalize_360(lon_deg) % 30.0
}

/// Full sign position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    pub dms: Dms,
}

/// Sign, index, in-sign degrees and DMS for `lon_deg`.
pub fn sign_position(lon_deg: f64) -> SignPosition {
    let sign = sign_from_longitude(lon_deg);
    let degrees_in_sign = degree_in_sign(lon_deg);
    SignPosition {
        sign,
        sign_index: sign.index(),
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(ZodiacSign::from_index(i as u8), *s);
        }
    }

    #[test]
    fn names_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
            assert!(!s.french_name().is_empty());
        }
        assert_eq!(ZodiacSign::Aries.french_name(), "Bélier");
        assert_eq!(ZodiacSign::Pisces.french_name(), "Poissons");
    }

    #[test]
    fn boundaries() {
        for i in 0..12u8 {
            let lon = f64::from(i) * 30.0;
            assert_eq!(sign_from_longitude(lon).index(), i, "boundary at {lon}");
            assert_eq!(degree_in_sign(lon), 0.0);
        }
    }

    #[test]
    fn mid_sign() {
        let p = sign_position(45.5);
        assert_eq!(p.sign, ZodiacSign::Taurus);
        assert_eq!(p.sign_index, 1);
        assert!((p.degrees_in_sign - 15.5).abs() < 1e-12);
        assert_eq!(p.dms.degrees, 15);
        assert_eq!(p.dms.minutes, 30);
    }

    #[test]
    fn wrap_around() {
        assert_eq!(sign_from_longitude(365.0), ZodiacSign::Aries);
        assert_eq!(sign_from_longitude(-1.0), ZodiacSign::Pisces);
        assert!((degree_in_sign(-1.0) - 29.0).abs() < 1e-12);
    }

    #[test]
    fn just_below_360_is_pisces() {
        assert_eq!(sign_from_longitude(359.999_999), ZodiacSign::Pisces);
    }

    #[test]
    fn dms_parts() {
        // 0.853° is 51.18', and 0.18' is 10.8".
        let d = deg_to_dms(23.853);
        assert_eq!((d.degrees, d.minutes, d.tenths_of_second), (23, 51, 108));
        assert!((d.seconds() - 10.8).abs() < 1e-12);
        assert_eq!(deg_to_dms(-23.853), d);
    }

    #[test]
    fn dms_display() {
        assert_eq!(deg_to_dms(10.5).to_string(), "10°30'00.0\"");
        assert_eq!(deg_to_dms(0.0).to_string(), "0°00'00.0\"");
    }

    #[test]
    fn dms_rounding_carries() {
        // 10.999999° is 10° 59' 59.9964", which rounds up to a whole degree.
        let d = deg_to_dms(10.999_999);
        assert_eq!(d.to_string(), "11°00'00.0\"");
        // Just under one arc-minute.
        assert_eq!(deg_to_dms(1.0 / 60.0 - 1e-7).to_string(), "0°01'00.0\"");
        // 59.94" stays below the carry.
        assert_eq!(deg_to_dms(59.94 / 3600.0).to_string(), "0°00'59.9\"");
    }

    #[test]
    fn dms_seconds_never_reach_sixty() {
        for i in 0..36_000 {
            let d = deg_to_dms(f64::from(i) / 1000.0 + 0.000_277_7);
            assert!(d.tenths_of_second < 600, "{d}");
            assert!(d.minutes < 60, "{d}");
            assert!(!d.to_string().contains("'60"), "{d}");
        }
    }
}
