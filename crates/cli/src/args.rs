use anyhow::{bail, Context, Result};
use planar::geom2::{Circle, Line};
use planar::Point2;

/// `"x,y"` → point.
pub fn parse_point(s: &str) -> Result<Point2<f64>> {
    let coords = parse_floats(s)?;
    match coords.as_slice() {
        [x, y] => Ok(Point2::new(*x, *y)),
        _ => bail!("expected `x,y`, got {s:?}"),
    }
}

/// Whitespace-separated `"x,y x,y ..."` → points.
pub fn parse_points(s: &str) -> Result<Vec<Point2<f64>>> {
    s.split_whitespace().map(parse_point).collect()
}

/// `"x,y x,y"` → bounded line through both points.
pub fn parse_segment(s: &str) -> Result<Line> {
    match parse_points(s)?.as_slice() {
        [p, q] => Line::from_points(*p, *q).with_context(|| format!("segment {s:?}")),
        _ => bail!("expected two points `x,y x,y`, got {s:?}"),
    }
}

/// `"cx,cy,r"` → circle.
pub fn parse_circle(s: &str) -> Result<Circle> {
    match parse_floats(s)?.as_slice() {
        [cx, cy, r] => Circle::new(*r, Point2::new(*cx, *cy)).with_context(|| format!("circle {s:?}")),
        _ => bail!("expected `cx,cy,r`, got {s:?}"),
    }
}

fn parse_floats(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number {t:?} in {s:?}"))
        })
        .collect()
}
