//! Property tests for sign lookup, house partition and aspect detection.

use natal_chart::{
    ChartConfig, ChartInput, GeoLocation, HouseCusps, OrbTable, angular_separation,
    compute_chart, degree_in_sign, find_aspects, house_cusps, sign_from_longitude,
};
use natal_core::Body;
use natal_time::{JulianDay, normalize_360};
use proptest::prelude::*;

fn spans_containing(cusps: &HouseCusps, lon: f64) -> usize {
    (1..=12u8)
        .filter(|&h| {
            let Some((start, end)) = cusps.span(h) else {
                return false;
            };
            if end > start {
                lon >= start && lon < end
            } else {
                lon >= start || lon < end
            }
        })
        .count()
}

fn mid_latitude_cusps() -> impl Strategy<Value = HouseCusps> {
    (2_400_000.0f64..2_500_000.0, -60.0f64..60.0, -180.0f64..180.0).prop_map(
        |(jd, lat, lon)| {
            house_cusps(JulianDay::from_value(jd), &GeoLocation::new(lat, lon))
                .expect("mid-latitude cusps")
        },
    )
}

proptest! {
    #[test]
    fn sign_and_degree_rebuild_longitude(lon in -720.0f64..720.0) {
        let sign = sign_from_longitude(lon);
        let deg = degree_in_sign(lon);
        prop_assert!((0.0..30.0).contains(&deg));
        let rebuilt = f64::from(sign.index()) * 30.0 + deg;
        prop_assert!((rebuilt - normalize_360(lon)).abs() < 1e-9);
    }

    #[test]
    fn cusps_in_range_and_circular(cusps in mid_latitude_cusps()) {
        for c in cusps.as_array() {
            prop_assert!((0.0..360.0).contains(c));
        }
        prop_assert!(cusps.is_circular_sequence());
    }

    #[test]
    fn houses_partition_circle(cusps in mid_latitude_cusps(), lon in 0.0f64..360.0) {
        prop_assert_eq!(spans_containing(&cusps, lon), 1);
        let h = cusps.house_of(lon);
        prop_assert!((1..=12).contains(&h));
    }

    #[test]
    fn cusp_starts_its_own_house(cusps in mid_latitude_cusps()) {
        for n in 1..=12u8 {
            let cusp = cusps.cusp(n).expect("houses 1-12 exist");
            prop_assert_eq!(cusps.house_of(cusp), n);
        }
    }

    #[test]
    fn separation_symmetric(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let s = angular_separation(a, b);
        prop_assert_eq!(s, angular_separation(b, a));
        prop_assert!((0.0..=180.0).contains(&s));
    }

    #[test]
    fn aspects_symmetric(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let orbs = OrbTable::default();
        let ab = find_aspects(&[(Body::Sun, a), (Body::Moon, b)], &orbs);
        let ba = find_aspects(&[(Body::Moon, b), (Body::Sun, a)], &orbs);
        prop_assert_eq!(&ab, &ba);
        for x in &ab {
            prop_assert_eq!((x.first, x.second), (Body::Sun, Body::Moon));
        }
    }

    #[test]
    fn aspects_sorted_and_within_orb(lons in prop::array::uniform11(0.0f64..360.0)) {
        let bodies: Vec<(Body, f64)> = Body::all().iter().copied().zip(lons).collect();
        let orbs = OrbTable::default();
        let found = find_aspects(&bodies, &orbs);
        for w in found.windows(2) {
            prop_assert!(w[0].orb_deg <= w[1].orb_deg);
        }
        for a in &found {
            prop_assert!(a.first.index() < a.second.index());
            prop_assert!(a.orb_deg <= orbs.orb_for(a.kind));
        }
    }

    #[test]
    fn chart_outputs_in_range(
        day in 1u32..=28,
        month in 1u32..=12,
        year in 1900i32..2100,
        hour in 0u32..24,
        lat in -60.0f64..60.0,
        lon in -180.0f64..180.0,
    ) {
        let input = ChartInput::parse(
            &format!("{year:04}-{month:02}-{day:02}"),
            &format!("{hour:02}:00"),
            "UTC+0",
            &lat.to_string(),
            &lon.to_string(),
        ).unwrap();
        let chart = compute_chart(&input, &ChartConfig::default()).unwrap();
        prop_assert!(chart.warnings.is_empty());
        for b in &chart.bodies {
            prop_assert!((0.0..360.0).contains(&b.longitude_deg));
            prop_assert!((1..=12).contains(&b.house));
        }
        let again = compute_chart(&input, &ChartConfig::default()).unwrap();
        prop_assert_eq!(chart, again);
    }
}
