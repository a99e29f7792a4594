//! Polygons as closed vertex loops with ray-casting containment.
//!
//! Purpose
//! - `Polygon`: ordered vertices (≥3) and the bounded sides joining them,
//!   closing last → first. Built once, never mutated.
//! - Point containment by a horizontal sweep line through the query point:
//!   count the sides crossing the sweep line to the right of the point.
//!
//! Cross-side rule
//! - With side endpoints `s`, `e` and sweep height `t` (y values), a side
//!   crosses iff `(s > t ∧ e < t) ∨ (e > t ∧ s < t) ∨ (s = t ∧ e < t) ∨ (s < t ∧ e = t)`.
//!   A vertex on the sweep line belongs to the side whose other end is below,
//!   so it is counted exactly once. Comparisons are exact.
//! - The classification is a per-call `Vec<bool>`; a shared `&Polygon` can be
//!   queried from many threads.
//!
//! Code cross-refs: `line::Line::polygon_side`, `relations::on_segment`

use nalgebra::Point2;

use super::error::{GeomError, GeomResult};
use super::line::{Line, Orientation};
use super::relations::on_segment;
use super::types::GeomCfg;

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2<f64>>,
    sides: Vec<Line>,
}

impl Polygon {
    /// Build from an ordered vertex loop. Needs ≥3 vertices and no two
    /// consecutive (cyclically) identical vertices.
    pub fn new(vertices: Vec<Point2<f64>>) -> GeomResult<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeomError::TooFewVertices { actual: n });
        }
        let sides = (0..n)
            .map(|i| Line::polygon_side(i, vertices[i], vertices[(i + 1) % n]))
            .collect::<GeomResult<Vec<_>>>()?;
        Ok(Self { vertices, sides })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Side `i` joins vertex `i` to vertex `i + 1` (mod n).
    #[inline]
    pub fn sides(&self) -> &[Line] {
        &self.sides
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Which sides cross the horizontal sweep line at height `y`.
    pub fn crossing_sides(&self, y: f64) -> Vec<bool> {
        self.sides
            .iter()
            .map(|side| match side.segment() {
                Some(seg) => crosses(seg.start.y, seg.end.y, y),
                None => false,
            })
            .collect()
    }

    /// Inside (or on the boundary).
    pub fn contains_point(&self, p: Point2<f64>, cfg: GeomCfg) -> bool {
        if self.on_boundary(p, cfg) {
            return true;
        }
        // a crossing side has distinct end heights, so the hit is always finite
        let right_hits = self
            .sides
            .iter()
            .zip(self.crossing_sides(p.y))
            .filter_map(|(side, crossing)| side.segment().filter(|_| crossing))
            .map(|seg| {
                let (s, e) = (seg.start, seg.end);
                s.x + (p.y - s.y) * (e.x - s.x) / (e.y - s.y)
            })
            .filter(|&x| x > p.x)
            .count();
        right_hits % 2 == 1
    }

    pub fn contains_all(&self, points: &[Point2<f64>], cfg: GeomCfg) -> bool {
        points.iter().all(|&p| self.contains_point(p, cfg))
    }

    pub fn contains_any(&self, points: &[Point2<f64>], cfg: GeomCfg) -> bool {
        points.iter().any(|&p| self.contains_point(p, cfg))
    }

    /// `p` lies on some side (within `eps`).
    pub fn on_boundary(&self, p: Point2<f64>, cfg: GeomCfg) -> bool {
        self.sides.iter().any(|side| match side.segment() {
            Some(seg) => on_segment(side, seg.start, seg.end, p, cfg),
            None => false,
        })
    }

    pub fn all_on_boundary(&self, points: &[Point2<f64>], cfg: GeomCfg) -> bool {
        points.iter().all(|&p| self.on_boundary(p, cfg))
    }

    pub fn any_on_boundary(&self, points: &[Point2<f64>], cfg: GeomCfg) -> bool {
        points.iter().any(|&p| self.on_boundary(p, cfg))
    }

    pub fn has_horizontal_sides(&self, cfg: GeomCfg) -> bool {
        self.sides
            .iter()
            .any(|side| matches!(side.orientation(cfg), Ok(Orientation::Horizontal)))
    }

    pub fn has_vertical_sides(&self, cfg: GeomCfg) -> bool {
        self.sides
            .iter()
            .any(|side| matches!(side.is_vertical(cfg), Ok(true)))
    }
}

#[inline]
fn crosses(s: f64, e: f64, t: f64) -> bool {
    (s > t && e < t) || (e > t && s < t) || (s == t && e < t) || (s < t && e == t)
}

pub fn is_point_in_polygon(polygon: &Polygon, p: Point2<f64>, cfg: GeomCfg) -> bool {
    polygon.contains_point(p, cfg)
}

pub fn are_points_in_polygon(polygon: &Polygon, points: &[Point2<f64>], cfg: GeomCfg) -> bool {
    polygon.contains_all(points, cfg)
}

pub fn is_any_point_in_polygon(polygon: &Polygon, points: &[Point2<f64>], cfg: GeomCfg) -> bool {
    polygon.contains_any(points, cfg)
}
