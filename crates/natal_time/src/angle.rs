//! Angle reduction shared by every crate in the workspace.

/// Normalize an angle to [0, 360) degrees.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that
/// case is folded back to 0.0 so the half-open range always holds.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees, in [0, 360).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    normalize_360(b - a)
}
