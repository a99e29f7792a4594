use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::geom2::{GeomCfg, LineIntersection, Polygon, Solutions};
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod args;
mod scene;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Evaluate planar geometry queries")]
struct Cmd {
    /// Coordinate tolerance; the radius tolerance follows at 10x
    #[arg(long, global = true)]
    eps: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Point-in-polygon test
    Contains {
        /// Vertex loop, e.g. "0,0 4,0 4,4 0,4"
        #[arg(long)]
        polygon: String,
        /// Query point "x,y"
        #[arg(long)]
        point: String,
    },
    /// Intersect two circles given as "cx,cy,r"
    Circles {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Intersect two lines given as "x,y x,y"
    Lines {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Evaluate a JSON scene of queries
    Scene {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and default tolerances as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.eps.map(GeomCfg::with_eps).unwrap_or_default();
    match cmd.action {
        Action::Contains { polygon, point } => contains(&polygon, &point, cfg),
        Action::Circles { a, b } => circles(&a, &b, cfg),
        Action::Lines { a, b } => lines(&a, &b, cfg),
        Action::Scene { input, out } => {
            tracing::info!(input = %input.display(), "scene");
            scene::run(&input, out.as_deref(), cfg)
        }
        Action::Report => report(),
    }
}

fn contains(polygon: &str, point: &str, cfg: GeomCfg) -> Result<()> {
    tracing::info!(polygon, point, eps = cfg.eps, "contains");
    let poly = Polygon::new(args::parse_points(polygon)?).context("building polygon")?;
    let p = args::parse_point(point)?;
    println!("{}", if poly.contains_point(p, cfg) { "inside" } else { "outside" });
    Ok(())
}

fn circles(a: &str, b: &str, cfg: GeomCfg) -> Result<()> {
    tracing::info!(a, b, eps = cfg.eps, "circles");
    let hits = args::parse_circle(a)?.intersect_circle(&args::parse_circle(b)?, cfg);
    match hits {
        Solutions::Zero => println!("none"),
        _ => {
            for p in hits.to_vec() {
                println!("{},{}", p.x, p.y);
            }
        }
    }
    Ok(())
}

fn lines(a: &str, b: &str, cfg: GeomCfg) -> Result<()> {
    tracing::info!(a, b, eps = cfg.eps, "lines");
    match args::parse_segment(a)?.intersect(&args::parse_segment(b)?, cfg) {
        LineIntersection::Point(p) => println!("{},{}", p.x, p.y),
        LineIntersection::Parallel => println!("parallel"),
        LineIntersection::Coincident => println!("coincident"),
    }
    Ok(())
}

fn report() -> Result<()> {
    let cfg = GeomCfg::default();
    let obj = serde_json::json!({
        "version": planar::VERSION,
        "defaults": {
            "eps": cfg.eps,
            "eps_radius": cfg.eps_radius,
            "eps_det": cfg.eps_det
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
