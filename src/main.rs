//! arcbathy - inspect ARC ASCII bathymetry grids.

use anyhow::{Context, Result};
use arcbathy::{util, BathymetryGrid, InterpMethod, LoadOptions, EARTH_RADIUS};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "arcbathy")]
#[command(about = "Load an ARC ASCII bathymetry grid and query depths", long_about = None)]
struct Args {
    /// Path to the ARC ASCII grid file
    file: PathBuf,

    /// Local earth radius of curvature in meters
    #[arg(long, default_value_t = EARTH_RADIUS, conflicts_with = "surface")]
    earth_radius: f64,

    /// Keep depths relative to the ocean surface (earth radius 0)
    #[arg(long)]
    surface: bool,

    /// Interpolation method for point queries
    #[arg(long, value_enum, default_value_t = Interp::Linear)]
    interp: Interp,

    /// Query the depth at LAT,LON (repeatable)
    #[arg(long = "at", value_name = "LAT,LON", value_parser = parse_point, allow_hyphen_values = true)]
    at: Vec<(f64, f64)>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Interp {
    Nearest,
    Linear,
}

impl From<Interp> for InterpMethod {
    fn from(interp: Interp) -> Self {
        match interp {
            Interp::Nearest => InterpMethod::Nearest,
            Interp::Linear => InterpMethod::Linear,
        }
    }
}

fn parse_point(s: &str) -> std::result::Result<(f64, f64), String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{}'", s))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon))?;
    Ok((lat, lon))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting arcbathy");
    }

    let earth_radius = if args.surface { 0.0 } else { args.earth_radius };
    let options = LoadOptions::new(earth_radius).with_interp(args.interp.into());

    let grid = BathymetryGrid::load_with(&args.file, &options)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print!("{}", util::format_summary(&grid));
    for &(lat, lon) in &args.at {
        println!("{}", util::format_query(lat, lon, grid.depth_at(lat, lon)));
    }

    if args.log.is_some() {
        tracing::info!("arcbathy exited");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("26.5,-80"), Ok((26.5, -80.0)));
        assert_eq!(parse_point(" 26.5 , -80 "), Ok((26.5, -80.0)));
        assert!(parse_point("26.5").is_err());
        assert!(parse_point("north,-80").is_err());
    }

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
