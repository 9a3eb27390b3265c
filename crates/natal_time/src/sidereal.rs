//! Greenwich Mean Sidereal Time and Local Sidereal Time, in degrees.
//!
//! GMST uses the classic cubic polynomial (Meeus, *Astronomical Algorithms*
//! 2nd ed., Eq. 12.4) directly on the Julian Day, without a UT1 correction.

use crate::angle::normalize_360;
use crate::julian::JulianDay;

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
/// where d = JD − 2451545.0 and T = d / 36525.
pub fn gmst_deg(jd: JulianDay) -> f64 {
    let d = jd.days_since_j2000();
    let t = jd.centuries_since_j2000();
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_360(gmst)
}

/// Local Sidereal Time in degrees, [0, 360), for an east-positive longitude.
pub fn local_sidereal_time_deg(jd: JulianDay, east_longitude_deg: f64) -> f64 {
    normalize_360(gmst_deg(jd) + east_longitude_deg)
}
