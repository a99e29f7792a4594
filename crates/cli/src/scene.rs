//! JSON scene files: a batch of geometry queries evaluated with one tolerance.
//!
//! ```json
//! { "eps": 0.001,
//!   "queries": [
//!     { "op": "point_in_polygon", "polygon": [[0,0],[4,0],[4,4],[0,4]], "points": [[2,2]] },
//!     { "op": "circle_circle", "a": {"center": [0,0], "radius": 5}, "b": {"center": [8,0], "radius": 5} }
//!   ] }
//! ```

use anyhow::{Context, Result};
use planar::geom2::{
    generally_overlapping, partially_overlapping, totally_overlapping, Circle, GeomCfg, Line,
    LineIntersection, Polygon, Solutions,
};
use planar::Point2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

type Xy = [f64; 2];

#[derive(Debug, Deserialize)]
pub struct Scene {
    /// Overrides the command-line tolerance when present.
    #[serde(default)]
    pub eps: Option<f64>,
    pub queries: Vec<Query>,
}

#[derive(Debug, Deserialize)]
pub struct CircleSpec {
    pub center: Xy,
    pub radius: f64,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    PointInPolygon { polygon: Vec<Xy>, points: Vec<Xy> },
    CircleCircle { a: CircleSpec, b: CircleSpec },
    CircleLine { circle: CircleSpec, line: [Xy; 2] },
    LineLine { a: [Xy; 2], b: [Xy; 2] },
    SegmentOverlap { a: [Xy; 2], b: [Xy; 2] },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    Point,
    Parallel,
    Coincident,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    PointInPolygon { inside: Vec<bool> },
    CircleCircle { points: Vec<Xy> },
    CircleLine { points: Vec<Xy> },
    LineLine { crossing: Crossing, point: Option<Xy> },
    SegmentOverlap { total: bool, partial: bool, general: bool },
}

fn pt(xy: Xy) -> Point2<f64> {
    Point2::new(xy[0], xy[1])
}

fn xy(p: Point2<f64>) -> Xy {
    [p.x, p.y]
}

fn circle(spec: &CircleSpec) -> Result<Circle> {
    Ok(Circle::new(spec.radius, pt(spec.center))?)
}

fn segment(ends: &[Xy; 2]) -> Result<Line> {
    Ok(Line::from_points(pt(ends[0]), pt(ends[1]))?)
}

fn solution_points(sol: Solutions<Point2<f64>>) -> Vec<Xy> {
    sol.to_vec().into_iter().map(xy).collect()
}

impl Query {
    pub fn evaluate(&self, cfg: GeomCfg) -> Result<Outcome> {
        Ok(match self {
            Query::PointInPolygon { polygon, points } => {
                let poly = Polygon::new(polygon.iter().copied().map(pt).collect())?;
                Outcome::PointInPolygon {
                    inside: points.iter().map(|&p| poly.contains_point(pt(p), cfg)).collect(),
                }
            }
            Query::CircleCircle { a, b } => Outcome::CircleCircle {
                points: solution_points(circle(a)?.intersect_circle(&circle(b)?, cfg)),
            },
            Query::CircleLine { circle: c, line } => Outcome::CircleLine {
                points: solution_points(circle(c)?.intersect_line(&segment(line)?, cfg)),
            },
            Query::LineLine { a, b } => match segment(a)?.intersect(&segment(b)?, cfg) {
                LineIntersection::Point(p) => Outcome::LineLine {
                    crossing: Crossing::Point,
                    point: Some(xy(p)),
                },
                LineIntersection::Parallel => Outcome::LineLine {
                    crossing: Crossing::Parallel,
                    point: None,
                },
                LineIntersection::Coincident => Outcome::LineLine {
                    crossing: Crossing::Coincident,
                    point: None,
                },
            },
            Query::SegmentOverlap { a, b } => {
                let (a, b) = (segment(a)?, segment(b)?);
                Outcome::SegmentOverlap {
                    total: totally_overlapping(&a, &b, cfg)?,
                    partial: partially_overlapping(&a, &b, cfg)?,
                    general: generally_overlapping(&a, &b, cfg)?,
                }
            }
        })
    }
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Tolerance for this scene: its own `eps` if set, else `fallback`.
    pub fn cfg(&self, fallback: GeomCfg) -> GeomCfg {
        self.eps.map(GeomCfg::with_eps).unwrap_or(fallback)
    }

    pub fn evaluate(&self, cfg: GeomCfg) -> Result<Vec<Outcome>> {
        self.queries
            .iter()
            .enumerate()
            .map(|(i, q)| q.evaluate(cfg).with_context(|| format!("query #{i}")))
            .collect()
    }
}

/// Evaluate the scene at `input`; write pretty JSON results to `out` or stdout.
pub fn run(input: &Path, out: Option<&Path>, fallback: GeomCfg) -> Result<()> {
    let scene = Scene::load(input)?;
    let cfg = scene.cfg(fallback);
    tracing::info!(queries = scene.queries.len(), eps = cfg.eps, "scene");
    let outcomes = scene.evaluate(cfg)?;
    let doc = serde_json::to_string_pretty(&outcomes)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), "scene results written");
        }
        None => println!("{doc}"),
    }
    Ok(())
}
