//! Small numeric helpers: tolerant comparisons, ranges, rotations.

use nalgebra::{Point2, Rotation2, Vector2};

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Tolerant point equality: both coordinate differences `<= eps`.
#[inline]
pub fn points_eq(p: Point2<f64>, q: Point2<f64>, eps: f64) -> bool {
    approx_eq(p.x, q.x, eps) && approx_eq(p.y, q.y, eps)
}

/// `x` lies between the extremes `e1` and `e2` (either order), with `eps` slack.
#[inline]
pub fn in_range(e1: f64, e2: f64, x: f64, eps: f64) -> bool {
    let (lo, hi) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
    x >= lo - eps && x <= hi + eps
}

/// The closed interval `outer` contains the closed interval `inner` (endpoint order ignored).
#[inline]
pub fn range_contains(outer: (f64, f64), inner: (f64, f64), eps: f64) -> bool {
    in_range(outer.0, outer.1, inner.0, eps) && in_range(outer.0, outer.1, inner.1, eps)
}

#[inline]
pub fn midpoint(p: Point2<f64>, q: Point2<f64>) -> Point2<f64> {
    nalgebra::center(&p, &q)
}

/// Rotate `v` by `rad` radians; positive is anti-clockwise.
#[inline]
pub fn rotate(v: Vector2<f64>, rad: f64) -> Vector2<f64> {
    Rotation2::new(rad) * v
}

/// `v` rotated by +90° (`(-y, x)`).
#[inline]
pub fn left_perp(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Unit vector along `v`, or `None` when `||v|| <= eps_det`.
#[inline]
pub(crate) fn unit(v: Vector2<f64>, eps_det: f64) -> Option<Vector2<f64>> {
    v.try_normalize(eps_det)
}

#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}
