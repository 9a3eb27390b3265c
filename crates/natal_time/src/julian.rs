//! Gregorian calendar → Julian Day conversion.
//!
//! Standard integer Julian Day Number algorithm (Fliegel & Van Flandern
//! form, floor-based month/year shift so March is month 0). The Julian Day
//! starts at 12:00 UTC, hence the `(decimal_hours - 12) / 24` fraction.

use crate::civil::{CivilDate, ClockTime};
use crate::offset::UtcOffset;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Integer Julian Day Number for a Gregorian calendar date.
///
/// Uses `div_euclid` throughout so the floor semantics hold for years
/// before the algorithm's -4800 origin as well.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let a = (14 - month).div_euclid(12);
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;

    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Julian Day for a civil date and clock time observed at `offset`.
///
/// The offset is subtracted from the local hour to get UTC decimal hours;
/// no day roll-over is needed because the fraction may fall outside [0, 1).
pub fn julian_day(date: CivilDate, time: ClockTime, offset: UtcOffset) -> JulianDay {
    let jdn = julian_day_number(date.year, date.month, date.day);
    let utc_hours = time.decimal_hours() - f64::from(offset.hours());
    JulianDay::from_value(jdn as f64 + (utc_hours - 12.0) / 24.0)
}

/// A point on the continuous Julian Day time axis.
///
/// This is the single time type consumed by the position and house
/// engines. It wraps an `f64` and is immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// The J2000.0 reference epoch.
    pub const J2000: Self = Self(J2000_JD);

    /// Wrap a raw Julian Day value.
    pub const fn from_value(jd: f64) -> Self {
        Self(jd)
    }

    /// Raw Julian Day value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000_JD
    }

    /// Julian centuries since J2000.0 (`T` in the series expansions).
    pub fn centuries_since_j2000(self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    /// This instant shifted by `dt` Julian centuries (negative is earlier).
    pub fn offset_centuries(self, dt: f64) -> Self {
        Self(self.0 + dt * DAYS_PER_CENTURY)
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}
