//! Types for house cusp results and body-to-house assignment.

use natal_time::arc_forward;

/// Tolerance when checking that the forward arcs close the circle.
const CIRCLE_CLOSURE_EPS_DEG: f64 = 1e-6;

/// Twelve house cusp longitudes, index 0 = house 1.
///
/// Cusps are in [0, 360) and usually increase around the circle with a
/// single wrap past 0°. House `i` spans from `cusp[i]` forward to
/// `cusp[(i + 1) % 12]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    /// Wrap a raw cusp array.
    pub const fn from_array(cusps: [f64; 12]) -> Self {
        Self { cusps }
    }

    /// The raw cusp array.
    pub const fn as_array(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// Cusp of house `house` (1-12), `None` for any other number.
    pub fn cusp(&self, house: u8) -> Option<f64> {
        let index = usize::from(house).checked_sub(1)?;
        self.cusps.get(index).copied()
    }

    /// `(start, end)` longitudes of house `house` (1-12).
    pub fn span(&self, house: u8) -> Option<(f64, f64)> {
        let start = self.cusp(house)?;
        let next = if house == 12 { 1 } else { house + 1 };
        Some((start, self.cusp(next)?))
    }

    /// House number (1-12) containing `longitude`.
    ///
    /// Houses are scanned 1..12; each span is closed at its start and open
    /// at its end. When the end is not above the start the span wraps past
    /// 360°. The first match wins. If nothing matches (only possible with a
    /// degenerate cusp set) house 1 is returned.
    pub fn house_of(&self, longitude: f64) -> u8 {
        for i in 0..12 {
            let current = self.cusps[i];
            let next = self.cusps[(i + 1) % 12];
            let inside = if next > current {
                longitude >= current && longitude < next
            } else {
                longitude >= current || longitude < next
            };
            if inside {
                return (i as u8) + 1;
            }
        }
        1
    }

    /// Whether the cusps go once around the circle in increasing order.
    ///
    /// False when the ascendant-style formula folds back on itself, which
    /// happens inside the polar circles. House assignment still returns a
    /// number in that case but the houses overlap.
    pub fn is_circular_sequence(&self) -> bool {
        let total: f64 = (0..12)
            .map(|i| arc_forward(self.cusps[i], self.cusps[(i + 1) % 12]))
            .sum();
        (total - 360.0).abs() < CIRCLE_CLOSURE_EPS_DEG
    }
}
