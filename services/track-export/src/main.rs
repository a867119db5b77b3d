//! Storm-track GeoJSON exporter.
//!
//! Reads a best-track CSV, normalizes it, and writes a GeoJSON
//! FeatureCollection with the trajectory line, one feature per
//! observation, and optionally the wind-extent rings of a selected
//! observation.

mod geojson;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use track_common::TrackPoint;
use track_ingest::{max_intensity_point, normalize_csv};

#[derive(Parser, Debug)]
#[command(name = "track-export")]
#[command(about = "Export storm-track observations as GeoJSON")]
struct Args {
    /// Input CSV file path
    #[arg(short, long)]
    input: String,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Observation whose wind rings to include: a row index, or "max"
    /// for the maximum-intensity observation
    #[arg(short, long)]
    point: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn select_point<'a>(points: &'a [TrackPoint], spec: &str) -> Result<&'a TrackPoint> {
    if spec.eq_ignore_ascii_case("max") {
        return max_intensity_point(points).context("track has no observations");
    }

    let index: usize = spec
        .parse()
        .with_context(|| format!("invalid --point value '{spec}' (expected an index or 'max')"))?;
    points
        .get(index)
        .with_context(|| format!("point index {index} out of range ({} observations)", points.len()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input))?;

    let points = normalize_csv(&text).context("normalization failed")?;
    info!(observations = points.len(), input = %args.input, "Normalized track table");

    let selected = match args.point.as_deref() {
        Some(spec) => Some(select_point(&points, spec)?),
        None => None,
    };
    if let Some(point) = selected {
        info!(
            id = %point.id,
            vmax_ms = point.max_sustained_wind_ms,
            "Selected observation for wind rings"
        );
    }

    let doc = geojson::feature_collection(&points, selected);
    let serialized = if args.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, serialized).with_context(|| format!("failed to write {path}"))?;
            info!(path = %path, "Wrote GeoJSON");
        }
        None => println!("{serialized}"),
    }

    Ok(())
}
