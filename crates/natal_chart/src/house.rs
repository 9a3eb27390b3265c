//! House cusp computation.
//!
//! Every cusp uses the same ascendant formula, evaluated at the local
//! sidereal time advanced by 30° per house:
//!
//! `cusp_i = atan2(cos θ, −sin θ·cos ε − tan φ·sin ε)`, θ = LST + 30°·i
//!
//! Cusp 1 is the true Ascendant. The other eleven are the ascendants that
//! would rise 2h, 4h, ... of sidereal time later. This is the implemented
//! convention; it is not Placidus, Koch, or any other named system, and it
//! coincides with none of them except at cusp 1.
//!
//! Sources: Meeus, *Astronomical Algorithms* (2nd ed), Ch. 13 (ascendant),
//! Ch. 22 (linear mean obliquity term).

use natal_time::{JulianDay, local_sidereal_time_deg, normalize_360};
use tracing::{debug, warn};

use crate::error::HouseError;
use crate::geo::GeoLocation;
use crate::house_types::HouseCusps;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
const OBLIQUITY_J2000_DEG: f64 = 23.439_291;

/// Linear obliquity rate, degrees per Julian century.
const OBLIQUITY_RATE_DEG: f64 = 0.013_004_2;

/// Mean obliquity of the ecliptic in degrees, `t` in centuries from J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG - OBLIQUITY_RATE_DEG * t
}

/// Ecliptic longitude of the ascendant for a sidereal angle, in degrees.
fn ascendant_deg(theta_deg: f64, tan_lat: f64, sin_eps: f64, cos_eps: f64) -> f64 {
    let theta = theta_deg.to_radians();
    let asc = f64::atan2(theta.cos(), -theta.sin() * cos_eps - tan_lat * sin_eps);
    normalize_360(asc.to_degrees())
}

/// The twelve cusps for a given LST, latitude and obliquity (all degrees).
///
/// No validation: a polar latitude yields whatever the tangent term gives.
pub fn cusps_from_lst(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> [f64; 12] {
    let eps = obliquity_deg.to_radians();
    let (sin_eps, cos_eps) = eps.sin_cos();
    let tan_lat = latitude_deg.to_radians().tan();

    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        let theta = normalize_360(lst_deg + i as f64 * 30.0);
        *cusp = ascendant_deg(theta, tan_lat, sin_eps, cos_eps);
    }
    cusps
}

/// Compute the twelve house cusps for an instant and observer.
///
/// Fails with [`HouseError::InvalidLocation`] for out-of-range coordinates,
/// [`HouseError::DegenerateLatitude`] at the poles, and
/// [`HouseError::NonFiniteCusp`] if anything still comes out non-finite.
pub fn house_cusps(jd: JulianDay, location: &GeoLocation) -> Result<HouseCusps, HouseError> {
    location.validate()?;
    if location.is_polar() {
        warn!(latitude = location.latitude_deg, "polar latitude, houses undefined");
        return Err(HouseError::DegenerateLatitude {
            latitude_deg: location.latitude_deg,
        });
    }

    let t = jd.centuries_since_j2000();
    let lst = local_sidereal_time_deg(jd, location.longitude_deg);
    let eps = mean_obliquity_deg(t);
    let cusps = cusps_from_lst(lst, location.latitude_deg, eps);

    if let Some(i) = cusps.iter().position(|c| !c.is_finite()) {
        return Err(HouseError::NonFiniteCusp { house: i as u8 + 1 });
    }
    debug!(lst, obliquity = eps, ascendant = cusps[0], "house cusps");
    Ok(HouseCusps::from_array(cusps))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn obliquity_at_j2000() {
        assert_eq!(mean_obliquity_deg(0.0), 23.439_291);
        assert!((mean_obliquity_deg(1.0) - 23.426_286_8).abs() < 1e-12);
    }

    #[test]
    fn equator_lst_zero_ascendant_is_90() {
        let cusps = cusps_from_lst(0.0, 0.0, 23.439_291);
        assert!((cusps[0] - 90.0).abs() < EPS, "cusp 1 = {}", cusps[0]);
    }

    #[test]
    fn equator_lst_90_ascendant_is_180() {
        let cusps = cusps_from_lst(0.0, 0.0, 23.439_291);
        assert!((cusps[3] - 180.0).abs() < EPS, "cusp 4 = {}", cusps[3]);
    }

    #[test]
    fn equator_quadrants_opposite() {
        // At the equator the tan(φ) term vanishes; θ and θ+180 give opposite
        // ecliptic points.
        let cusps = cusps_from_lst(37.0, 0.0, 23.439_291);
        for i in 0..6 {
            let d = (cusps[i + 6] - cusps[i]).rem_euclid(360.0);
            assert!((d - 180.0).abs() < 1e-9, "cusp {} vs {}", i + 1, i + 7);
        }
    }

    #[test]
    fn zero_obliquity_is_lst_plus_90() {
        let cusps = cusps_from_lst(10.0, 45.0, 0.0);
        for (i, c) in cusps.iter().enumerate() {
            let expected = normalize_360(10.0 + i as f64 * 30.0 + 90.0);
            assert!((c - expected).abs() < 1e-9, "cusp {} = {c}", i + 1);
        }
    }

    #[test]
    fn cusps_in_range() {
        for &lat in &[-66.0, -33.3, 0.0, 12.5, 48.85, 66.0] {
            for k in 0..24 {
                let cusps = cusps_from_lst(k as f64 * 15.0, lat, 23.44);
                for c in cusps {
                    assert!((0.0..360.0).contains(&c), "cusp {c} at lat {lat}");
                }
            }
        }
    }

    #[test]
    fn pole_is_degenerate() {
        let loc = GeoLocation::new(90.0, 0.0);
        let err = house_cusps(JulianDay::J2000, &loc).unwrap_err();
        assert_eq!(err, HouseError::DegenerateLatitude { latitude_deg: 90.0 });
        assert!(err.is_degenerate());
    }

    #[test]
    fn south_pole_is_degenerate() {
        let loc = GeoLocation::new(-90.0, 45.0);
        assert!(matches!(
            house_cusps(JulianDay::J2000, &loc),
            Err(HouseError::DegenerateLatitude { .. })
        ));
    }

    #[test]
    fn out_of_range_latitude_is_invalid() {
        let loc = GeoLocation::new(123.0, 0.0);
        assert!(matches!(
            house_cusps(JulianDay::J2000, &loc),
            Err(HouseError::InvalidLocation(_))
        ));
    }

    #[test]
    fn paris_cusps_form_a_circle() {
        let loc = GeoLocation::new(48.8566, 2.3522);
        let cusps = house_cusps(JulianDay::from_value(2_460_000.5), &loc).unwrap();
        assert!(cusps.is_circular_sequence(), "{:?}", cusps.as_array());
    }
}
