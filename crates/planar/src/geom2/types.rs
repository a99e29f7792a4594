//! Basic 2D types and tolerances shared by lines, circles and polygons.
//!
//! - `GeomCfg`: centralizes the epsilons used by every tolerant predicate.
//! - `Solutions`: zero, one or two results of an intersection or construction.
//!
//! Code cross-refs: `line::Line`, `circle::Circle`, `polygon::Polygon`

use nalgebra::Point2;

/// Geometry configuration (tolerances).
///
/// Every predicate that compares floats takes a `GeomCfg` by value, so callers
/// can tune tolerance to the scale of their coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Coordinate/length tolerance ("fudge factor").
    pub eps: f64,
    /// Looser tolerance for comparing circle radii.
    pub eps_radius: f64,
    /// Degeneracy threshold for slope differences, determinants and norms.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: 1e-3,
            eps_radius: 1e-2,
            eps_det: 1e-12,
        }
    }
}

impl GeomCfg {
    /// Config with coordinate tolerance `eps`; the radius tolerance follows at `10·eps`.
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps,
            eps_radius: 10.0 * eps,
            ..Self::default()
        }
    }
}

/// Outcome with zero, one or two solutions (intersection points, circles).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solutions<T> {
    Zero,
    One(T),
    Two(T, T),
}

impl<T: Copy> Solutions<T> {
    /// Number of solutions: 0, 1 or 2.
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Solutions::Zero => 0,
            Solutions::One(_) => 1,
            Solutions::Two(_, _) => 2,
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Solutions::Zero)
    }
    #[inline]
    pub fn first(&self) -> Option<T> {
        match *self {
            Solutions::Zero => None,
            Solutions::One(a) | Solutions::Two(a, _) => Some(a),
        }
    }
    pub fn to_vec(&self) -> Vec<T> {
        match *self {
            Solutions::Zero => Vec::new(),
            Solutions::One(a) => vec![a],
            Solutions::Two(a, b) => vec![a, b],
        }
    }
}

impl Solutions<Point2<f64>> {
    /// True if any solution equals `p` within `eps` on both axes.
    pub fn contains_point(&self, p: Point2<f64>, eps: f64) -> bool {
        self.to_vec()
            .iter()
            .any(|q| super::util::points_eq(*q, p, eps))
    }
}
