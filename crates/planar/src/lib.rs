//! Planar geometry kernel.
//!
//! Value types for lines, circles and polygons over `nalgebra` points, with
//! eps-aware predicates and intersection routines. See `geom2` for the
//! conventions shared by all operations.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, GeomError, GeomResult};
pub use nalgebra::{Point2, Vector2};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        circles_through_two_points, mirror_point, offset_from_centerline, Circle, GeomCfg,
        GeomError, GeomResult, Line, LineIntersection, LineKind, Orientation, Polygon, Solutions,
    };
    pub use nalgebra::{point, Point2, Vector2};
}
