//! Geometry helpers for proximity and shadowing tests.
//!
//! Contains helper functions for:
//! - Squared distance calculations (no sqrt; all comparisons are on d²)
//! - Range checks against a squared threshold
//! - The strict triangle test deciding whether a direct link is shadowed

use super::types::Point;

/// Squared Euclidean distance in area units.
///
/// Comparing d1² against d2² orders distances the same way as comparing the
/// distances themselves, so every range and shadowing check in the crate works
/// on squared values.
///
/// # Parameters
///
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
///
/// The squared distance (dx² + dy²).
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Inclusive range check: `true` if `a` and `b` are within the squared threshold.
pub fn in_range(a: &Point, b: &Point, radius_squared: f64) -> bool {
    distance2(a, b) <= radius_squared
}

/// Decide whether the direct link `origin`–`far` is shadowed by `via`.
///
/// The link is shadowed when `via` is strictly closer to both endpoints than
/// the endpoints are to each other:
///
/// ```text
/// d²(far, via) < d²(origin, far)  and  d²(origin, via) < d²(origin, far)
/// ```
///
/// Equal distances never shadow, so an exactly equilateral triangle keeps all
/// three sides.
pub fn is_shadowed(origin: &Point, far: &Point, via: &Point) -> bool {
    let direct = distance2(origin, far);
    distance2(far, via) < direct && distance2(origin, via) < direct
}
