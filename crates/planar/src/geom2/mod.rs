//! 2D Euclidean geometry: lines, circles, polygons and their relations.
//!
//! Purpose
//! - Immutable value types whose alternative representations (slope and
//!   general form for lines, expanded equation and center/radius for circles)
//!   are computed once at construction and always agree.
//! - Closed-form intersections and predicates that resolve degenerate inputs
//!   (parallel and vertical lines, tangency, lines through a circle's center,
//!   scanline vertices) explicitly instead of producing NaN.
//!
//! Tolerances
//! - Every float comparison is eps-aware through an explicit `GeomCfg`
//!   (default `eps = 1e-3`). Points and vectors are `nalgebra` types.
//!
//! Code cross-refs: `Line`, `Circle`, `Polygon`, `relations`, `GeomCfg`

pub mod circle;
pub mod error;
pub mod line;
pub mod polygon;
pub mod relations;
mod types;
pub mod util;

pub use circle::{circles_through_two_points, Circle, CircleCoefficients};
pub use error::{GeomError, GeomResult};
pub use line::{GeneralForm, Line, LineIntersection, LineKind, LineRole, Orientation, Segment};
pub use polygon::{are_points_in_polygon, is_any_point_in_polygon, is_point_in_polygon, Polygon};
pub use relations::{
    generally_overlapping, inclined_collinear, lies_on_bounded, lies_on_unbounded, mirror_point,
    offset_from_centerline, partially_overlapping, totally_overlapping,
};
pub use types::{GeomCfg, Solutions};

#[cfg(test)]
mod tests;
