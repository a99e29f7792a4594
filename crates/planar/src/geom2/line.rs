//! Lines in 2D with synchronized slope, general-form and segment views.
//!
//! Purpose
//! - One immutable `Line` value carrying slope/intercept (or an explicit
//!   vertical position), the general form `a·x + b·y + c = 0`, and the
//!   optional start/end points it was built from.
//! - Polygon sides and horizontal sweep thresholds are ordinary lines tagged
//!   with a `LineRole`.
//!
//! Conventions
//! - A line is vertical iff its defining points share exactly the same x (or
//!   its general form has `b == 0`). Near-vertical lines keep a large finite
//!   slope.
//! - Boundary-dependent queries (orientation, midpoint, bounded membership)
//!   need the segment and fail with `GeomError::NoEndpoints` otherwise.
//!
//! Code cross-refs: `relations`, `circle::Circle::intersect_line`, `polygon::Polygon`

use nalgebra::{Point2, Vector2};

use super::error::{GeomError, GeomResult};
use super::types::GeomCfg;
use super::util::{approx_eq, midpoint, to_degrees};

/// Slope-based view of a line; vertical lines have no slope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineKind {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

/// General form `a·x + b·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneralForm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GeneralForm {
    /// Signed residual `a·x + b·y + c` (zero on the line).
    #[inline]
    pub fn eval(&self, p: Point2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

/// Finite extent of a line built from two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

/// What a line is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineRole {
    #[default]
    Plain,
    /// Side `index` of a polygon (side `i` joins vertex `i` to vertex `i+1`).
    Side { index: usize },
    /// Horizontal sweep line of the point-in-polygon test.
    Threshold,
}

/// Axis classification of a bounded line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Inclined,
}

/// Line–line intersection outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineIntersection {
    Point(Point2<f64>),
    Parallel,
    Coincident,
}

impl LineIntersection {
    #[inline]
    pub fn point(self) -> Option<Point2<f64>> {
        match self {
            LineIntersection::Point(p) => Some(p),
            _ => None,
        }
    }
    #[inline]
    pub fn is_parallel(&self) -> bool {
        matches!(self, LineIntersection::Parallel)
    }
}

/// Immutable 2D line.
///
/// Invariants:
/// - `kind` and `general` describe the same infinite line.
/// - `segment`, if present, lies on that line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    kind: LineKind,
    general: GeneralForm,
    segment: Option<Segment>,
    role: LineRole,
}

impl Line {
    /// Line through `start` and `end`, keeping them as its segment.
    ///
    /// For inclined lines the general form is `(1, 1/(-m), -b/(-m))`;
    /// horizontal lines use `(0, 1, -b)` and vertical lines `(1, 0, -x)`.
    pub fn from_points(start: Point2<f64>, end: Point2<f64>) -> GeomResult<Self> {
        let finite = start.iter().chain(end.iter()).all(|v| v.is_finite());
        if start == end || !finite {
            return Err(GeomError::DegenerateLine);
        }
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let (kind, general) = if dx == 0.0 {
            (
                LineKind::Vertical { x: start.x },
                GeneralForm {
                    a: 1.0,
                    b: 0.0,
                    c: -start.x,
                },
            )
        } else {
            let m = dy / dx;
            let b = start.y - m * start.x;
            let general = if m == 0.0 {
                GeneralForm {
                    a: 0.0,
                    b: 1.0,
                    c: -b,
                }
            } else {
                GeneralForm {
                    a: 1.0,
                    b: 1.0 / -m,
                    c: -b / -m,
                }
            };
            (
                LineKind::Sloped {
                    slope: m,
                    intercept: b,
                },
                general,
            )
        };
        Ok(Self {
            kind,
            general,
            segment: Some(Segment { start, end }),
            role: LineRole::Plain,
        })
    }

    /// `y = m·x + b`; general form `(-m, 1, -b)`.
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> GeomResult<Self> {
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(GeomError::DegenerateLine);
        }
        Ok(Self::sloped(slope, intercept))
    }

    /// `a·x + b·y + c = 0`; coefficients are kept as given.
    pub fn from_general_form(a: f64, b: f64, c: f64) -> GeomResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) || (a == 0.0 && b == 0.0) {
            return Err(GeomError::DegenerateLine);
        }
        let kind = if b == 0.0 {
            LineKind::Vertical { x: -c / a }
        } else {
            LineKind::Sloped {
                slope: -a / b,
                intercept: -c / b,
            }
        };
        Ok(Self {
            kind,
            general: GeneralForm { a, b, c },
            segment: None,
            role: LineRole::Plain,
        })
    }

    /// Line through `point` with slope `slope`.
    pub fn from_point_slope(point: Point2<f64>, slope: f64) -> GeomResult<Self> {
        Self::from_slope_intercept(slope, point.y - slope * point.x)
    }

    /// Vertical line `x = x0` (no segment).
    pub fn vertical(x: f64) -> Self {
        Self {
            kind: LineKind::Vertical { x },
            general: GeneralForm {
                a: 1.0,
                b: 0.0,
                c: -x,
            },
            segment: None,
            role: LineRole::Plain,
        }
    }

    /// Horizontal sweep line `y = y0` used as the point-in-polygon scanline.
    pub fn threshold(y: f64) -> Self {
        Self {
            kind: LineKind::Sloped {
                slope: 0.0,
                intercept: y,
            },
            general: GeneralForm {
                a: 0.0,
                b: 1.0,
                c: -y,
            },
            segment: None,
            role: LineRole::Threshold,
        }
    }

    /// Bounded side `index` of a polygon.
    pub fn polygon_side(index: usize, start: Point2<f64>, end: Point2<f64>) -> GeomResult<Self> {
        let mut side = Self::from_points(start, end)?;
        side.role = LineRole::Side { index };
        Ok(side)
    }

    fn sloped(slope: f64, intercept: f64) -> Self {
        Self {
            kind: LineKind::Sloped { slope, intercept },
            general: GeneralForm {
                a: -slope,
                b: 1.0,
                c: -intercept,
            },
            segment: None,
            role: LineRole::Plain,
        }
    }

    /// Line perpendicular to `self` through `point` (unbounded).
    pub fn perpendicular_through(&self, point: Point2<f64>) -> Self {
        match self.kind {
            LineKind::Vertical { .. } => Self::sloped(0.0, point.y),
            LineKind::Sloped { slope, .. } if slope == 0.0 => Self::vertical(point.x),
            LineKind::Sloped { slope, .. } => {
                let m = -1.0 / slope;
                Self::sloped(m, point.y - m * point.x)
            }
        }
    }

    #[inline]
    pub fn kind(&self) -> LineKind {
        self.kind
    }
    #[inline]
    pub fn general_form(&self) -> GeneralForm {
        self.general
    }
    #[inline]
    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }
    #[inline]
    pub fn role(&self) -> LineRole {
        self.role
    }

    /// Slope `m`; `None` for vertical lines.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match self.kind {
            LineKind::Sloped { slope, .. } => Some(slope),
            LineKind::Vertical { .. } => None,
        }
    }

    /// Y-intercept `b`; `None` for vertical lines.
    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        match self.kind {
            LineKind::Sloped { intercept, .. } => Some(intercept),
            LineKind::Vertical { .. } => None,
        }
    }

    /// `y` at abscissa `x`; `None` for vertical lines.
    #[inline]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self.kind {
            LineKind::Sloped { slope, intercept } => Some(slope * x + intercept),
            LineKind::Vertical { .. } => None,
        }
    }

    /// Direction vector: `end - start` when bounded, else `(1, m)` or `(0, 1)`.
    pub fn direction(&self) -> Vector2<f64> {
        if let Some(seg) = self.segment {
            return seg.end - seg.start;
        }
        match self.kind {
            LineKind::Sloped { slope, .. } => Vector2::new(1.0, slope),
            LineKind::Vertical { .. } => Vector2::new(0.0, 1.0),
        }
    }

    pub fn endpoints(&self) -> GeomResult<(Point2<f64>, Point2<f64>)> {
        self.segment
            .map(|s| (s.start, s.end))
            .ok_or(GeomError::NoEndpoints)
    }

    pub fn midpoint(&self) -> GeomResult<Point2<f64>> {
        let (s, e) = self.endpoints()?;
        Ok(midpoint(s, e))
    }

    /// Perpendicular distance `|a·x + b·y + c| / sqrt(a² + b²)`.
    #[inline]
    pub fn distance_to(&self, p: Point2<f64>) -> f64 {
        let g = self.general;
        g.eval(p).abs() / g.a.hypot(g.b)
    }

    /// Orthogonal projection of `p` onto the infinite line.
    pub fn project(&self, p: Point2<f64>) -> Point2<f64> {
        let g = self.general;
        let n = Vector2::new(g.a, g.b);
        p - n * (g.eval(p) / n.norm_squared())
    }

    /// Intersect two infinite lines.
    ///
    /// Sloped pair: `x = (b₂−b₁)/(m₁−m₂)`, `y = m₁·x + b₁`. A vertical line
    /// meets a sloped one at `(x_v, m·x_v + b)`. Equal slopes (within
    /// `eps_det`) or two vertical lines report `Parallel` or `Coincident`.
    pub fn intersect(&self, other: &Line, cfg: GeomCfg) -> LineIntersection {
        match (self.kind, other.kind) {
            (
                LineKind::Sloped {
                    slope: m1,
                    intercept: b1,
                },
                LineKind::Sloped {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if (m1 - m2).abs() <= cfg.eps_det {
                    if approx_eq(b1, b2, cfg.eps) {
                        LineIntersection::Coincident
                    } else {
                        LineIntersection::Parallel
                    }
                } else {
                    let x = (b2 - b1) / (m1 - m2);
                    LineIntersection::Point(Point2::new(x, m1 * x + b1))
                }
            }
            (LineKind::Vertical { x }, LineKind::Sloped { slope, intercept })
            | (LineKind::Sloped { slope, intercept }, LineKind::Vertical { x }) => {
                LineIntersection::Point(Point2::new(x, slope * x + intercept))
            }
            (LineKind::Vertical { x: x1 }, LineKind::Vertical { x: x2 }) => {
                if approx_eq(x1, x2, cfg.eps) {
                    LineIntersection::Coincident
                } else {
                    LineIntersection::Parallel
                }
            }
        }
    }

    /// Acute and obtuse angle between two lines, in degrees.
    ///
    /// The first value is always the non-negative acute angle, the second is
    /// `180° − acute`. Parallel lines give `(0, 180)`.
    pub fn angles(&self, other: &Line) -> (f64, f64) {
        let acute = match (self.kind, other.kind) {
            (LineKind::Sloped { slope: m1, .. }, LineKind::Sloped { slope: m2, .. }) => {
                // perpendicular: atan(±inf) = ±90°
                to_degrees(((m1 - m2) / (1.0 + m1 * m2)).atan()).abs()
            }
            (LineKind::Vertical { .. }, LineKind::Sloped { slope, .. })
            | (LineKind::Sloped { slope, .. }, LineKind::Vertical { .. }) => {
                90.0 - to_degrees(slope.abs().atan())
            }
            (LineKind::Vertical { .. }, LineKind::Vertical { .. }) => 0.0,
        };
        (acute, 180.0 - acute)
    }

    pub fn is_horizontal(&self, cfg: GeomCfg) -> GeomResult<bool> {
        let (s, e) = self.endpoints()?;
        Ok(approx_eq(s.y, e.y, cfg.eps))
    }

    pub fn is_vertical(&self, cfg: GeomCfg) -> GeomResult<bool> {
        let (s, e) = self.endpoints()?;
        Ok(approx_eq(s.x, e.x, cfg.eps))
    }

    pub fn is_inclined(&self, cfg: GeomCfg) -> GeomResult<bool> {
        Ok(self.orientation(cfg)? == Orientation::Inclined)
    }

    /// Horizontal is checked first, so a segment shorter than `eps` is horizontal.
    pub fn orientation(&self, cfg: GeomCfg) -> GeomResult<Orientation> {
        if self.is_horizontal(cfg)? {
            Ok(Orientation::Horizontal)
        } else if self.is_vertical(cfg)? {
            Ok(Orientation::Vertical)
        } else {
            Ok(Orientation::Inclined)
        }
    }
}
