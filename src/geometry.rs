//! Vector and angle helpers
//!
//! Pure functions over `DVec2`; nothing here mutates its input.
//! Angles handed to callers are in radians unless a name says otherwise.

use glam::DVec2;

/// Euclidean length of a vector
#[inline]
pub fn norm(v: DVec2) -> f64 {
    v.length()
}

/// `v / norm(v)`, or the zero vector when `v` has no length
///
/// A blob at rest has a zero velocity, so normalizing it must not fail.
#[inline]
pub fn unit_vector(v: DVec2) -> DVec2 {
    let n = norm(v);
    if n == 0.0 { DVec2::ZERO } else { v / n }
}

/// Angle of a vector in radians, in (-π, π]
#[inline]
pub fn angle_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Unit vector pointing at `degrees`
#[inline]
pub fn heading(degrees: f64) -> DVec2 {
    let theta = to_radians(degrees);
    unit_vector(DVec2::new(theta.cos(), theta.sin()))
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}
