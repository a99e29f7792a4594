//! Circles with synchronized expanded-equation and center/radius forms.
//!
//! Purpose
//! - Immutable `Circle` holding center, radius, the coefficients of
//!   `x² + y² + d·x + e·y + f = 0`, area and circumference, all computed once.
//! - Circle–circle, circle–line and circle–point relations, intersections,
//!   arc offsets and constructions (three points, two points + radius).
//!
//! Invariants
//! - `r² = (d/2)² + (e/2)² − f`, `center = (−d/2, −e/2)`.
//! - `area = π·r²`, `circumference = 2π·r`.
//!
//! Code cross-refs: `line::Line::{intersect, project, perpendicular_through}`

use std::f64::consts::PI;

use nalgebra::{Point2, Vector2};

use super::error::{GeomError, GeomResult};
use super::line::{Line, LineIntersection};
use super::types::{GeomCfg, Solutions};
use super::util::{approx_eq, left_perp, midpoint, points_eq, rotate, unit};

/// Coefficients of `x² + y² + d·x + e·y + f = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleCoefficients {
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point2<f64>,
    radius: f64,
    coeffs: CircleCoefficients,
    area: f64,
    circumference: f64,
}

impl Circle {
    fn from_center_radius(center: Point2<f64>, radius: f64) -> Self {
        let coeffs = CircleCoefficients {
            d: -2.0 * center.x,
            e: -2.0 * center.y,
            f: center.x * center.x + center.y * center.y - radius * radius,
        };
        Self {
            center,
            radius,
            coeffs,
            area: PI * radius * radius,
            circumference: 2.0 * PI * radius,
        }
    }

    /// Circle of `radius` around `center`; the radius must be finite and `>= 0`.
    pub fn new(radius: f64, center: Point2<f64>) -> GeomResult<Self> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(GeomError::InvalidRadius { radius });
        }
        Ok(Self::from_center_radius(center, radius))
    }

    /// Circle `x² + y² + d·x + e·y + f = 0`; coefficients are kept as given.
    pub fn from_coefficients(d: f64, e: f64, f: f64) -> GeomResult<Self> {
        let radius_sq = (d / 2.0).powi(2) + (e / 2.0).powi(2) - f;
        if !(radius_sq.is_finite() && radius_sq >= 0.0) {
            return Err(GeomError::ImaginaryCircle { radius_sq });
        }
        let radius = radius_sq.sqrt();
        Ok(Self {
            center: Point2::new(-d / 2.0, -e / 2.0),
            radius,
            coeffs: CircleCoefficients { d, e, f },
            area: PI * radius_sq,
            circumference: 2.0 * PI * radius,
        })
    }

    /// Circle through three points: center at the intersection of the
    /// perpendicular bisectors of chords `p1p2` and `p1p3`.
    pub fn from_three_points(
        p1: Point2<f64>,
        p2: Point2<f64>,
        p3: Point2<f64>,
        cfg: GeomCfg,
    ) -> GeomResult<Self> {
        let chord_a = Line::from_points(p1, p2).map_err(|_| GeomError::CollinearPoints)?;
        let chord_b = Line::from_points(p1, p3).map_err(|_| GeomError::CollinearPoints)?;
        let bisector_a = chord_a.perpendicular_through(chord_a.midpoint()?);
        let bisector_b = chord_b.perpendicular_through(chord_b.midpoint()?);
        match bisector_a.intersect(&bisector_b, cfg) {
            LineIntersection::Point(center) => Self::from_center_and_point(center, p3),
            outcome => {
                tracing::debug!(?p1, ?p2, ?p3, ?outcome, "three-point circle: bisectors do not meet");
                Err(GeomError::CollinearPoints)
            }
        }
    }

    /// Circle around `center` with the given circumference (`r = c / 2π`).
    pub fn from_circumference(center: Point2<f64>, circumference: f64) -> GeomResult<Self> {
        Self::new(circumference / (2.0 * PI), center)
    }

    /// Circle around `center` passing through `point`.
    pub fn from_center_and_point(center: Point2<f64>, point: Point2<f64>) -> GeomResult<Self> {
        Self::new((point - center).norm(), center)
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn coefficients(&self) -> CircleCoefficients {
        self.coeffs
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }
    #[inline]
    pub fn circumference(&self) -> f64 {
        self.circumference
    }

    /// Same circle: radii within `eps_radius` and centers within `eps`.
    pub fn approx_eq(&self, other: &Circle, cfg: GeomCfg) -> bool {
        approx_eq(self.radius, other.radius, cfg.eps_radius)
            && points_eq(self.center, other.center, cfg.eps)
    }

    #[inline]
    fn center_distance(&self, other: &Circle) -> f64 {
        (other.center - self.center).norm()
    }

    pub fn is_touching_externally(&self, other: &Circle, cfg: GeomCfg) -> bool {
        !self.approx_eq(other, cfg)
            && approx_eq(self.center_distance(other), self.radius + other.radius, cfg.eps)
    }

    pub fn is_touching_internally(&self, other: &Circle, cfg: GeomCfg) -> bool {
        !self.approx_eq(other, cfg)
            && approx_eq(
                self.center_distance(other),
                (self.radius - other.radius).abs(),
                cfg.eps,
            )
    }

    pub fn is_distant(&self, other: &Circle, cfg: GeomCfg) -> bool {
        !self.approx_eq(other, cfg) && self.center_distance(other) > self.radius + other.radius
    }

    /// One circle lies inside the other (touching allowed).
    pub fn is_inscribed(&self, other: &Circle, cfg: GeomCfg) -> bool {
        !self.approx_eq(other, cfg)
            && self.center_distance(other) <= (self.radius - other.radius).abs()
    }

    pub fn is_intersecting(&self, other: &Circle, cfg: GeomCfg) -> bool {
        !self.approx_eq(other, cfg) && !self.is_inscribed(other, cfg) && !self.is_distant(other, cfg)
    }

    pub fn is_distant_from_line(&self, line: &Line) -> bool {
        line.distance_to(self.center) > self.radius
    }

    pub fn is_intersecting_line(&self, line: &Line) -> bool {
        line.distance_to(self.center) < self.radius
    }

    pub fn is_tangent_to(&self, line: &Line, cfg: GeomCfg) -> bool {
        approx_eq(line.distance_to(self.center), self.radius, cfg.eps)
    }

    pub fn is_point_on(&self, p: Point2<f64>, cfg: GeomCfg) -> bool {
        approx_eq((p - self.center).norm(), self.radius, cfg.eps)
    }

    pub fn is_point_inside(&self, p: Point2<f64>) -> bool {
        (p - self.center).norm() < self.radius
    }

    pub fn is_point_outside(&self, p: Point2<f64>) -> bool {
        (p - self.center).norm() > self.radius
    }

    /// Intersection points with another circle.
    ///
    /// Tangency (external, then internal) is tested before separation so that
    /// near-tangent pairs yield their touching point. Identical, concentric,
    /// distant and strictly nested circles give `Zero`.
    pub fn intersect_circle(&self, other: &Circle, cfg: GeomCfg) -> Solutions<Point2<f64>> {
        let delta = other.center - self.center;
        let dist = delta.norm();
        if self.approx_eq(other, cfg) || dist <= cfg.eps_det {
            tracing::debug!(circle = ?self, ?other, "circle intersection: identical or concentric");
            return Solutions::Zero;
        }
        if self.is_touching_externally(other, cfg) {
            return Solutions::One(self.center + delta * (self.radius / dist));
        }
        if self.is_touching_internally(other, cfg) {
            let (big, small) = if self.radius >= other.radius {
                (self, other)
            } else {
                (other, self)
            };
            let towards_small = (small.center - big.center) / dist;
            return Solutions::One(big.center + towards_small * big.radius);
        }
        if self.is_distant(other, cfg) || self.is_inscribed(other, cfg) {
            return Solutions::Zero;
        }
        let (r1, r2) = (self.radius, other.radius);
        let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
        let h = (r1 * r1 - a * a).max(0.0).sqrt();
        let base = self.center + delta * (a / dist);
        let off = Vector2::new(h * delta.y / dist, -h * delta.x / dist);
        Solutions::Two(base + off, base - off)
    }

    /// Intersection points with an infinite line.
    ///
    /// A line through the center has no usable projection direction; the
    /// line's own direction is used instead.
    pub fn intersect_line(&self, line: &Line, cfg: GeomCfg) -> Solutions<Point2<f64>> {
        let dist = line.distance_to(self.center);
        let proj = line.project(self.center);
        if approx_eq(dist, self.radius, cfg.eps) {
            return Solutions::One(proj);
        }
        if dist > self.radius {
            return Solutions::Zero;
        }
        let half_chord = (self.radius * self.radius - dist * dist).sqrt();
        let to_proj = proj - self.center;
        let along = if to_proj.norm() > cfg.eps {
            unit(left_perp(to_proj), cfg.eps_det)
        } else {
            tracing::debug!(?line, "circle-line intersection: line passes through the center");
            unit(line.direction(), cfg.eps_det)
        };
        match along {
            Some(t) => Solutions::Two(proj + t * half_chord, proj - t * half_chord),
            None => Solutions::Zero,
        }
    }

    /// Move `point` along the circle by `arc_length` (positive = anti-clockwise).
    ///
    /// Returns `None` if `point` is not on the circle.
    pub fn offset_point(&self, point: Point2<f64>, arc_length: f64, cfg: GeomCfg) -> Option<Point2<f64>> {
        if !self.is_point_on(point, cfg) {
            return None;
        }
        if arc_length == 0.0 || self.radius <= cfg.eps_det {
            return Some(point);
        }
        let theta = arc_length / self.radius;
        Some(self.center + rotate(point - self.center, theta))
    }

    /// Midpoint of the arc between two points on the circle.
    ///
    /// For diametrically opposite points this is the point left of the chord
    /// direction `p1 → p2`; otherwise the midpoint of the shorter arc.
    /// `None` if either point is off the circle or the points coincide.
    pub fn mid_arc_point(&self, p1: Point2<f64>, p2: Point2<f64>, cfg: GeomCfg) -> Option<Point2<f64>> {
        if !self.is_point_on(p1, cfg) || !self.is_point_on(p2, cfg) || points_eq(p1, p2, cfg.eps) {
            return None;
        }
        let chord = p2 - p1;
        if approx_eq(chord.norm(), 2.0 * self.radius, cfg.eps) {
            let n = unit(left_perp(chord), cfg.eps_det)?;
            return Some(self.center + n * self.radius);
        }
        let mid = midpoint(p1, p2);
        let bisector = Line::from_points(p1, p2).ok()?.perpendicular_through(mid);
        match self.intersect_line(&bisector, cfg) {
            Solutions::Two(a, b) => {
                if (a - mid).norm() <= (b - mid).norm() {
                    Some(a)
                } else {
                    Some(b)
                }
            }
            Solutions::One(a) => Some(a),
            Solutions::Zero => None,
        }
    }
}

/// Circles of `radius` passing through both `p1` and `p2`.
///
/// Zero if the points are farther apart than the diameter, one (centered on
/// the chord midpoint) if the distance equals the diameter, else two circles
/// mirrored across the chord.
pub fn circles_through_two_points(
    p1: Point2<f64>,
    p2: Point2<f64>,
    radius: f64,
    cfg: GeomCfg,
) -> GeomResult<Solutions<Circle>> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(GeomError::InvalidRadius { radius });
    }
    let chord = p2 - p1;
    let dist = chord.norm();
    let dir = unit(chord, cfg.eps_det).ok_or(GeomError::DegenerateLine)?;
    if approx_eq(2.0 * radius, dist, cfg.eps) {
        return Ok(Solutions::One(Circle::new(radius, midpoint(p1, p2))?));
    }
    if 2.0 * radius < dist {
        return Ok(Solutions::Zero);
    }
    let height = (radius * radius - (dist / 2.0).powi(2)).sqrt();
    let mid = p1 + dir * (dist / 2.0);
    let n = left_perp(dir);
    Ok(Solutions::Two(
        Circle::new(radius, mid + n * height)?,
        Circle::new(radius, mid - n * height)?,
    ))
}
