//! Segment relations: collinearity, overlap, point membership, reflection.
//!
//! Bounded predicates need the line's segment and fail with
//! `GeomError::NoEndpoints` otherwise. Orientation (horizontal, vertical,
//! inclined) is decided on the endpoints with `cfg.eps`.

use nalgebra::Point2;

use super::error::{GeomError, GeomResult};
use super::line::{Line, LineKind, Orientation};
use super::types::GeomCfg;
use super::util::{approx_eq, in_range, left_perp, points_eq, range_contains, unit};

/// Two inclined segments on the same carrier line (slopes and intercepts within `eps`).
pub fn inclined_collinear(l1: &Line, l2: &Line, cfg: GeomCfg) -> GeomResult<bool> {
    if !l1.is_inclined(cfg)? || !l2.is_inclined(cfg)? {
        return Err(GeomError::NotInclined);
    }
    match (l1.kind(), l2.kind()) {
        (
            LineKind::Sloped {
                slope: m1,
                intercept: b1,
            },
            LineKind::Sloped {
                slope: m2,
                intercept: b2,
            },
        ) => Ok(approx_eq(m1, m2, cfg.eps) && approx_eq(b1, b2, cfg.eps)),
        _ => Err(GeomError::NotInclined),
    }
}

/// Same carrier line for two segments of equal orientation.
fn same_carrier(l1: &Line, l2: &Line, orientation: Orientation, cfg: GeomCfg) -> GeomResult<bool> {
    let (s1, _) = l1.endpoints()?;
    let (s2, _) = l2.endpoints()?;
    match orientation {
        Orientation::Horizontal => Ok(approx_eq(s1.y, s2.y, cfg.eps)),
        Orientation::Vertical => Ok(approx_eq(s1.x, s2.x, cfg.eps)),
        Orientation::Inclined => inclined_collinear(l1, l2, cfg),
    }
}

/// One segment lies entirely on the other.
pub fn totally_overlapping(l1: &Line, l2: &Line, cfg: GeomCfg) -> GeomResult<bool> {
    let (s1, e1) = l1.endpoints()?;
    let (s2, e2) = l2.endpoints()?;
    let orientation = l1.orientation(cfg)?;
    if orientation != l2.orientation(cfg)? || !same_carrier(l1, l2, orientation, cfg)? {
        return Ok(false);
    }
    let nested = |outer: (f64, f64), inner: (f64, f64)| {
        range_contains(outer, inner, cfg.eps) || range_contains(inner, outer, cfg.eps)
    };
    Ok(match orientation {
        Orientation::Horizontal => nested((s1.x, e1.x), (s2.x, e2.x)),
        Orientation::Vertical => nested((s1.y, e1.y), (s2.y, e2.y)),
        Orientation::Inclined => {
            (on_segment(l1, s1, e1, s2, cfg) && on_segment(l1, s1, e1, e2, cfg))
                || (on_segment(l2, s2, e2, s1, cfg) && on_segment(l2, s2, e2, e1, cfg))
        }
    })
}

/// Segments on the same carrier line sharing a stretch, but no endpoint.
pub fn partially_overlapping(l1: &Line, l2: &Line, cfg: GeomCfg) -> GeomResult<bool> {
    let (s1, e1) = l1.endpoints()?;
    let (s2, e2) = l2.endpoints()?;
    let shared = [(s1, s2), (s1, e2), (e1, s2), (e1, e2)]
        .iter()
        .any(|&(p, q)| points_eq(p, q, cfg.eps));
    if shared {
        return Ok(false);
    }
    let orientation = l1.orientation(cfg)?;
    if orientation != l2.orientation(cfg)? || !same_carrier(l1, l2, orientation, cfg)? {
        return Ok(false);
    }
    Ok(on_segment(l1, s1, e1, s2, cfg)
        || on_segment(l1, s1, e1, e2, cfg)
        || on_segment(l2, s2, e2, s1, cfg)
        || on_segment(l2, s2, e2, e1, cfg))
}

pub fn generally_overlapping(l1: &Line, l2: &Line, cfg: GeomCfg) -> GeomResult<bool> {
    Ok(partially_overlapping(l1, l2, cfg)? || totally_overlapping(l1, l2, cfg)?)
}

/// `point` lies on the bounded segment of `line`.
pub fn lies_on_bounded(point: Point2<f64>, line: &Line, cfg: GeomCfg) -> GeomResult<bool> {
    let (s, e) = line.endpoints()?;
    Ok(on_segment(line, s, e, point, cfg))
}

/// `point` satisfies the line equation within `eps`.
///
/// Bounded lines classified horizontal or vertical are checked on the y or x
/// coordinate of their start point, so segments that are axis-aligned only
/// within `eps` keep a bounded residual.
pub fn lies_on_unbounded(point: Point2<f64>, line: &Line, cfg: GeomCfg) -> bool {
    if let Some(seg) = line.segment() {
        match line.orientation(cfg) {
            Ok(Orientation::Vertical) => return approx_eq(point.x, seg.start.x, cfg.eps),
            Ok(Orientation::Horizontal) => return approx_eq(point.y, seg.start.y, cfg.eps),
            _ => {}
        }
    }
    match line.kind() {
        LineKind::Vertical { x } => approx_eq(point.x, x, cfg.eps),
        LineKind::Sloped { slope, intercept } => {
            approx_eq(point.y, slope * point.x + intercept, cfg.eps)
        }
    }
}

/// Endpoint match, or on the carrier line within the segment's coordinate ranges.
pub(crate) fn on_segment(
    line: &Line,
    start: Point2<f64>,
    end: Point2<f64>,
    point: Point2<f64>,
    cfg: GeomCfg,
) -> bool {
    points_eq(point, start, cfg.eps)
        || points_eq(point, end, cfg.eps)
        || (lies_on_unbounded(point, line, cfg)
            && in_range(start.x, end.x, point.x, cfg.eps)
            && in_range(start.y, end.y, point.y, cfg.eps))
}

/// Reflection of `point` across the infinite line.
pub fn mirror_point(point: Point2<f64>, line: &Line) -> Point2<f64> {
    let foot = line.project(point);
    foot + (foot - point)
}

/// Two lines parallel to the centerline `start → end`, offset by `±width/2`.
///
/// The first line lies on the left of the centerline direction.
pub fn offset_from_centerline(
    start: Point2<f64>,
    end: Point2<f64>,
    width: f64,
) -> GeomResult<(Line, Line)> {
    let normal = unit(left_perp(end - start), 0.0).ok_or(GeomError::DegenerateLine)?;
    let off = normal * (width / 2.0);
    Ok((
        Line::from_points(start + off, end + off)?,
        Line::from_points(start - off, end - off)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::from_points(point![x1, y1], point![x2, y2]).unwrap()
    }

    #[test]
    fn collinearity_needs_inclined_bounded_lines() {
        let cfg = GeomCfg::default();
        assert!(inclined_collinear(&seg(0.0, 0.0, 2.0, 2.0), &seg(5.0, 5.0, 7.0, 7.0), cfg).unwrap());
        assert!(!inclined_collinear(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 1.0, 2.0, 3.0), cfg).unwrap());
        assert_eq!(
            inclined_collinear(&seg(0.0, 0.0, 2.0, 0.0), &seg(0.0, 0.0, 2.0, 2.0), cfg),
            Err(GeomError::NotInclined)
        );
        let unbounded = Line::from_slope_intercept(1.0, 0.0).unwrap();
        assert_eq!(
            inclined_collinear(&unbounded, &seg(0.0, 0.0, 2.0, 2.0), cfg),
            Err(GeomError::NoEndpoints)
        );
    }

    #[test]
    fn horizontal_overlaps() {
        let cfg = GeomCfg::default();
        let long = seg(0.0, 0.0, 10.0, 0.0);
        let inner = seg(5.0, 0.0, 2.0, 0.0);
        assert!(totally_overlapping(&long, &inner, cfg).unwrap());
        assert!(totally_overlapping(&inner, &long, cfg).unwrap());
        let a = seg(0.0, 0.0, 5.0, 0.0);
        let b = seg(3.0, 0.0, 8.0, 0.0);
        assert!(partially_overlapping(&a, &b, cfg).unwrap());
        assert!(!totally_overlapping(&a, &b, cfg).unwrap());
        assert!(generally_overlapping(&a, &b, cfg).unwrap());
        // touching at a shared endpoint is not an overlap
        let c = seg(5.0, 0.0, 8.0, 0.0);
        assert!(!partially_overlapping(&a, &c, cfg).unwrap());
        // different heights
        assert!(!generally_overlapping(&a, &seg(1.0, 1.0, 4.0, 1.0), cfg).unwrap());
    }

    #[test]
    fn vertical_and_inclined_overlaps() {
        let cfg = GeomCfg::default();
        assert!(totally_overlapping(&seg(1.0, 0.0, 1.0, 9.0), &seg(1.0, 2.0, 1.0, 3.0), cfg).unwrap());
        assert!(totally_overlapping(&seg(0.0, 0.0, 4.0, 4.0), &seg(1.0, 1.0, 2.0, 2.0), cfg).unwrap());
        assert!(partially_overlapping(&seg(0.0, 0.0, 4.0, 4.0), &seg(3.0, 3.0, 6.0, 6.0), cfg).unwrap());
        // mixed orientations never overlap
        assert!(!generally_overlapping(&seg(0.0, 0.0, 4.0, 0.0), &seg(0.0, 0.0, 0.0, 4.0), cfg).unwrap());
    }

    #[test]
    fn bounded_and_unbounded_membership() {
        let cfg = GeomCfg::default();
        let diag = seg(0.0, 0.0, 4.0, 4.0);
        assert!(lies_on_bounded(point![2.0, 2.0], &diag, cfg).unwrap());
        assert!(lies_on_bounded(point![4.0005, 4.0], &diag, cfg).unwrap());
        assert!(!lies_on_bounded(point![5.0, 5.0], &diag, cfg).unwrap());
        assert!(lies_on_unbounded(point![5.0, 5.0], &diag, cfg));
        assert!(lies_on_unbounded(point![3.0, -7.0], &Line::vertical(3.0), cfg));
        assert_eq!(
            lies_on_bounded(point![3.0, -7.0], &Line::vertical(3.0), cfg),
            Err(GeomError::NoEndpoints)
        );
    }

    #[test]
    fn membership_on_segments_axis_aligned_within_eps() {
        let cfg = GeomCfg::default();
        let steep = seg(10.0, 0.0, 10.0005, 10.0);
        assert_eq!(steep.orientation(cfg), Ok(Orientation::Vertical));
        assert!(lies_on_bounded(point![10.0006, 5.0], &steep, cfg).unwrap());
        assert!(lies_on_unbounded(point![10.0, 5.0], &steep, cfg));
        assert!(!lies_on_bounded(point![10.002, 5.0], &steep, cfg).unwrap());
        assert!(!lies_on_bounded(point![10.0, 11.0], &steep, cfg).unwrap());

        let flat = seg(0.0, 0.0, 10.0, 0.0005);
        assert_eq!(flat.orientation(cfg), Ok(Orientation::Horizontal));
        assert!(lies_on_bounded(point![5.0, 0.0009], &flat, cfg).unwrap());
        assert!(!lies_on_bounded(point![5.0, 0.002], &flat, cfg).unwrap());
        assert!(!lies_on_bounded(point![11.0, 0.0], &flat, cfg).unwrap());
    }

    #[test]
    fn overlaps_of_segments_axis_aligned_within_eps() {
        let cfg = GeomCfg::default();
        let a = seg(0.0, 0.0, 0.0005, 10.0);
        let b = seg(0.0005, 5.0, 0.0, 20.0);
        assert!(partially_overlapping(&a, &b, cfg).unwrap());
        assert!(!totally_overlapping(&a, &b, cfg).unwrap());
        assert!(totally_overlapping(&a, &seg(0.0002, 2.0, 0.0003, 4.0), cfg).unwrap());
        assert!(!generally_overlapping(&a, &seg(0.01, 2.0, 0.01, 4.0), cfg).unwrap());

        let h = seg(0.0, 0.0, 10.0, 0.0005);
        assert!(totally_overlapping(&h, &seg(2.0, 0.0002, 5.0, 0.0004), cfg).unwrap());
        let tail = seg(8.0, 0.0001, 15.0, 0.0003);
        assert!(partially_overlapping(&h, &tail, cfg).unwrap());
        assert!(generally_overlapping(&h, &tail, cfg).unwrap());
    }

    #[test]
    fn mirror_across_lines() {
        let diag = Line::from_slope_intercept(1.0, 0.0).unwrap();
        let m = mirror_point(point![1.0, 0.0], &diag);
        assert!(points_eq(m, point![0.0, 1.0], 1e-12));
        let m = mirror_point(point![1.0, 5.0], &Line::vertical(3.0));
        assert!(points_eq(m, point![5.0, 5.0], 1e-12));
    }

    #[test]
    fn centerline_offsets() {
        let cfg = GeomCfg::default();
        let (left, right) = offset_from_centerline(point![0.0, 0.0], point![10.0, 0.0], 2.0).unwrap();
        assert_eq!(left.intercept(), Some(1.0));
        assert_eq!(right.intercept(), Some(-1.0));
        assert!(left.is_horizontal(cfg).unwrap());
        let (left, _) = offset_from_centerline(point![0.0, 0.0], point![0.0, 4.0], 1.0).unwrap();
        assert_eq!(left.kind(), LineKind::Vertical { x: -0.5 });
        assert_eq!(
            offset_from_centerline(point![1.0, 1.0], point![1.0, 1.0], 1.0),
            Err(GeomError::DegenerateLine)
        );
    }
}
