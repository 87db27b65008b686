use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::api::{draw_cloud, OrderKind, Point, SampleCfg, SampleFrame, SampleToken};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::coord::Coord;

mod coord;
mod provenance;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Build, inspect and order 2D points")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a point from Cartesian coordinates and describe it
    Xy {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Build a point from polar coordinates and describe it
    Polar {
        #[arg(long, allow_negative_numbers = true)]
        r: f64,
        #[arg(long, allow_negative_numbers = true)]
        theta: f64,
    },
    /// Sort a JSON array of [x, y] pairs ("NaN", "inf", "-inf" accepted as strings)
    Sort {
        #[arg(long, value_enum, default_value_t = OrderArg::Xy)]
        order: OrderArg,
        #[arg(long)]
        input: PathBuf,
        /// Write here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a seeded point cloud
    Sample {
        #[arg(long, default_value_t = 16)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Draw in polar form with radius up to this value
        #[arg(long, conflicts_with = "half_width")]
        polar: Option<f64>,
        /// Allow negative radii in polar draws
        #[arg(long, requires = "polar")]
        signed: bool,
        /// Draw x, y in [-w, w]
        #[arg(long)]
        half_width: Option<f64>,
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
        /// Write here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    Xy,
    Yx,
    Manhattan,
    Radius,
}

impl From<OrderArg> for OrderKind {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Xy => OrderKind::Xy,
            OrderArg::Yx => OrderKind::Yx,
            OrderArg::Manhattan => OrderKind::Manhattan,
            OrderArg::Radius => OrderKind::Radius,
        }
    }
}

/// Everything observable about one point.
#[derive(Debug, Serialize)]
struct Described {
    display: String,
    x: Coord,
    y: Coord,
    r: Coord,
    theta: Coord,
    cartesian_centric: bool,
    hash: u64,
}

impl From<&Point> for Described {
    fn from(p: &Point) -> Self {
        Self {
            display: p.to_string(),
            x: Coord(p.x()),
            y: Coord(p.y()),
            r: Coord(p.r()),
            theta: Coord(p.theta()),
            cartesian_centric: p.is_cartesian_centric(),
            hash: p.hash_code(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Xy { x, y } => describe(Point::from_xy(x, y)),
        Action::Polar { r, theta } => describe(Point::from_polar(r, theta)),
        Action::Sort { order, input, out } => sort(order.into(), &input, out.as_deref()),
        Action::Sample {
            count,
            seed,
            polar,
            signed,
            half_width,
            order,
            out,
        } => {
            let frame = sample_frame(polar, signed, half_width);
            sample(
                SampleCfg { frame, count },
                seed,
                order.map(Into::into),
                out.as_deref(),
            )
        }
        Action::Report => report(),
    }
}

fn describe(p: Point) -> Result<()> {
    tracing::info!(point = %p, cartesian = p.is_cartesian_centric(), "describe");
    println!("{}", serde_json::to_string_pretty(&Described::from(&p))?);
    Ok(())
}

fn sort(kind: OrderKind, input: &Path, out: Option<&Path>) -> Result<()> {
    let mut points = read_pairs(input)?;
    tracing::info!(order = kind.name(), input = %input.display(), count = points.len(), "sort");
    kind.sort(&mut points);
    emit(
        &points,
        out,
        json!({
            "command": "sort",
            "order": kind.name(),
            "input": input.to_string_lossy(),
            "count": points.len()
        }),
    )
}

fn sample_frame(polar: Option<f64>, signed: bool, half_width: Option<f64>) -> SampleFrame {
    match (polar, half_width) {
        (Some(r_max), _) => SampleFrame::Polar { r_max, signed },
        (None, Some(half_width)) => SampleFrame::Cartesian { half_width },
        (None, None) => SampleCfg::default().frame,
    }
}

fn sample(cfg: SampleCfg, seed: u64, order: Option<OrderKind>, out: Option<&Path>) -> Result<()> {
    tracing::info!(count = cfg.count, seed, frame = ?cfg.frame, "sample");
    let mut points = draw_cloud(cfg, SampleToken { seed, index: 0 });
    if let Some(kind) = order {
        kind.sort(&mut points);
    }
    emit(
        &points,
        out,
        json!({
            "command": "sample",
            "count": cfg.count,
            "seed": seed,
            "frame": format!("{:?}", cfg.frame),
            "order": order.map(OrderKind::name)
        }),
    )
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "planar_version": planar::VERSION,
        "orders": OrderKind::ALL.map(OrderKind::name),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn read_pairs(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[Coord; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs
        .into_iter()
        .map(|[Coord(x), Coord(y)]| Point::from_xy(x, y))
        .collect())
}

/// Print pairs to stdout, or write them to `out` with a provenance sidecar.
fn emit(points: &[Point], out: Option<&Path>, params: serde_json::Value) -> Result<()> {
    let pairs: Vec<[Coord; 2]> = points
        .iter()
        .map(|p| [Coord(p.x()), Coord(p.y())])
        .collect();
    let body = serde_json::to_string_pretty(&pairs)?;
    match out {
        None => println!("{body}"),
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            let sidecar = provenance::write_sidecar(path, params)?;
            tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote");
        }
    }
    Ok(())
}
