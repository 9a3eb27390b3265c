//! Pairwise aspect detection.
//!
//! Input bodies are put in catalog order first, and a body given more than
//! once keeps only its first longitude. Pairs are then generated once each
//! (i < j), so `first` always precedes `second` in the catalog and no body
//! is paired with itself. Every kind within its orb is kept, and the result
//! is stable-sorted by orb so equal orbs keep generation order.

use natal_core::Body;
use tracing::{debug, warn};

use crate::aspect_types::{ALL_ASPECT_KINDS, Aspect, OrbTable};

/// Angular separation of two longitudes reduced to [0, 180].
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (a_deg - b_deg).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

fn catalog_ordered(bodies: &[(Body, f64)]) -> Vec<(Body, f64)> {
    let mut ordered = bodies.to_vec();
    // Stable, so the first occurrence of a repeated body survives dedup.
    ordered.sort_by_key(|&(body, _)| body.index());
    ordered.dedup_by_key(|&mut (body, _)| body);
    if ordered.len() < bodies.len() {
        warn!(
            dropped = bodies.len() - ordered.len(),
            "repeated bodies ignored in aspect detection"
        );
    }
    ordered
}

/// All aspects among `bodies` within the orbs of `orbs`, tightest first.
pub fn find_aspects(bodies: &[(Body, f64)], orbs: &OrbTable) -> Vec<Aspect> {
    let bodies = catalog_ordered(bodies);
    let mut aspects = Vec::new();
    for (i, &(first, lon_a)) in bodies.iter().enumerate() {
        for &(second, lon_b) in &bodies[i + 1..] {
            let separation = angular_separation(lon_a, lon_b);
            for kind in ALL_ASPECT_KINDS {
                let orb = (separation - kind.angle_deg()).abs();
                if orb <= orbs.orb_for(kind) {
                    aspects.push(Aspect {
                        first,
                        second,
                        kind,
                        separation_deg: separation,
                        orb_deg: orb,
                    });
                }
            }
        }
    }
    aspects.sort_by(|a, b| a.orb_deg.total_cmp(&b.orb_deg));
    debug!(count = aspects.len(), "aspects detected");
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect_types::AspectKind;

    #[test]
    fn separation_reduces() {
        assert_eq!(angular_separation(10.0, 190.0), 180.0);
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(10.0, 350.0), 20.0);
        assert_eq!(angular_separation(0.0, 0.0), 0.0);
        assert_eq!(angular_separation(0.0, 540.0), 180.0);
    }

    #[test]
    fn opposition_exact() {
        let found = find_aspects(&[(Body::Sun, 10.0), (Body::Moon, 190.0)], &OrbTable::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, AspectKind::Opposition);
        assert_eq!(found[0].orb_deg, 0.0);
        assert_eq!(found[0].first, Body::Sun);
        assert_eq!(found[0].second, Body::Moon);
    }

    #[test]
    fn orb_boundary_inclusive() {
        let found = find_aspects(&[(Body::Sun, 0.0), (Body::Mars, 66.0)], &OrbTable::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, AspectKind::Sextile);
        assert_eq!(found[0].orb_deg, 6.0);

        let none = find_aspects(&[(Body::Sun, 0.0), (Body::Mars, 66.5)], &OrbTable::default());
        assert!(none.is_empty());
    }

    #[test]
    fn overlapping_bands_keep_all_matches() {
        let wide = OrbTable {
            sextile: 20.0,
            square: 20.0,
            ..OrbTable::default()
        };
        let found = find_aspects(&[(Body::Venus, 0.0), (Body::Saturn, 75.0)], &wide);
        let kinds: Vec<_> = found.iter().map(|a| a.kind).collect();
        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&AspectKind::Sextile));
        assert!(kinds.contains(&AspectKind::Square));
    }

    #[test]
    fn sorted_by_orb_stable() {
        let bodies = [
            (Body::Sun, 0.0),
            (Body::Moon, 3.0),
            (Body::Mercury, 123.0),
            (Body::Venus, 183.0),
        ];
        let found = find_aspects(&bodies, &OrbTable::default());
        for w in found.windows(2) {
            assert!(w[0].orb_deg <= w[1].orb_deg);
        }
        // Sun-Moon conjunction, Sun-Mercury trine and Sun-Venus opposition
        // all have orb 3 and keep generation order.
        let ties: Vec<_> = found
            .iter()
            .filter(|a| a.orb_deg == 3.0)
            .map(|a| (a.first, a.second))
            .collect();
        assert_eq!(
            ties,
            vec![
                (Body::Sun, Body::Moon),
                (Body::Sun, Body::Mercury),
                (Body::Sun, Body::Venus),
            ]
        );
        // Moon-Mercury trine, Moon-Venus opposition, Mercury-Venus sextile
        // are exact and come first.
        assert_eq!(found.len(), 6);
        assert!(found[..3].iter().all(|a| a.orb_deg == 0.0));
    }

    #[test]
    fn no_self_pairs() {
        let found = find_aspects(&[(Body::Pluto, 42.0)], &OrbTable::default());
        assert!(found.is_empty());
    }

    #[test]
    fn reversed_input_reported_in_catalog_order() {
        let found = find_aspects(
            &[(Body::Mars, 190.0), (Body::Moon, 100.0), (Body::Sun, 10.0)],
            &OrbTable::default(),
        );
        let pairs: Vec<_> = found.iter().map(|a| (a.first, a.second, a.kind)).collect();
        assert_eq!(
            pairs,
            vec![
                (Body::Sun, Body::Moon, AspectKind::Square),
                (Body::Sun, Body::Mars, AspectKind::Opposition),
                (Body::Moon, Body::Mars, AspectKind::Square),
            ]
        );
        for a in &found {
            assert!(a.first.index() < a.second.index());
        }
    }

    #[test]
    fn repeated_body_keeps_first_longitude() {
        // A second Sun at 190° would otherwise oppose the first one and the
        // Moon.
        let found = find_aspects(
            &[(Body::Sun, 10.0), (Body::Moon, 10.0), (Body::Sun, 190.0)],
            &OrbTable::default(),
        );
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].first, found[0].second), (Body::Sun, Body::Moon));
        assert_eq!(found[0].kind, AspectKind::Conjunction);
        assert!(found.iter().all(|a| a.first != a.second));
    }

    #[test]
    fn only_repeats_yield_nothing() {
        let found = find_aspects(&[(Body::Venus, 0.0), (Body::Venus, 180.0)], &OrbTable::default());
        assert!(found.is_empty());
    }
}
