//! Weather map command-line entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use weather_map::{run, MapConfig, MapRequest};

#[derive(Parser, Debug)]
#[command(name = "weather-map")]
#[command(about = "Render a temperature and wind map from METAR station reports")]
struct Args {
    /// Boundary CSV: name, code, lon, lat, lon, lat, ...
    boundaries: PathBuf,

    /// Output PNG path
    output: PathBuf,

    /// State or region to draw (e.g. Colorado, New_England); all when omitted
    section: Option<String>,

    /// Read stations from a local METAR cache instead of downloading
    #[arg(long, env = "STATIONS_FILE")]
    stations_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

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
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = MapConfig::from_env()?;
    info!(
        width = config.image_width,
        search = ?config.grid.search,
        "Starting weather map"
    );

    let request = MapRequest {
        boundaries: args.boundaries,
        output: args.output,
        section: args.section,
        stations_file: args.stations_file,
    };

    let summary = run(&request, &config).await?;
    info!(
        section = %summary.section_label,
        timestamp = %summary.timestamp,
        stations = summary.stations,
        dropped = summary.dropped_stations,
        "Done"
    );
    Ok(())
}
