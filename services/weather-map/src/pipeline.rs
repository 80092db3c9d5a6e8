//! One map run: load inputs, estimate the field, render and save.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use grid_processor::build_weather_field;
use ingestion::{
    fetch_text, load_boundaries, parse_metar_cache, project_boundaries, select_boundaries,
    Section, SectionCatalog,
};
use renderer::{load_font, render_weather_field, ColorScale};

use crate::config::MapConfig;

/// Inputs named on the command line.
#[derive(Debug, Clone)]
pub struct MapRequest {
    pub boundaries: PathBuf,
    pub output: PathBuf,
    pub section: Option<String>,
    /// Local METAR cache; fetched from the configured URL when absent
    pub stations_file: Option<PathBuf>,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct MapSummary {
    pub section_label: String,
    pub timestamp: String,
    pub stations: usize,
    pub dropped_stations: usize,
    pub width: u32,
    pub height: u32,
}

/// Produce the map described by `request`.
pub async fn run(request: &MapRequest, config: &MapConfig) -> Result<MapSummary> {
    let start = Instant::now();

    let catalog = match &config.sections_file {
        Some(path) => SectionCatalog::from_yaml_file(path)
            .with_context(|| format!("loading section catalog {}", path.display()))?,
        None => SectionCatalog::builtin(),
    };
    let section = Section::resolve(request.section.as_deref(), &catalog);
    let section_label = section.label();

    let rows = load_boundaries(&request.boundaries)
        .with_context(|| format!("loading boundaries {}", request.boundaries.display()))?;
    let rows = select_boundaries(rows, &section);
    if rows.is_empty() {
        bail!(
            "no boundaries for section {:?} in {}",
            section_label,
            request.boundaries.display()
        );
    }
    let boundaries = project_boundaries(&rows)?;
    info!(section = %section_label, boundaries = boundaries.len(), "Selected boundaries");

    let station_text = match &request.stations_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading stations {}", path.display()))?,
        None => fetch_text(&config.stations_url, config.fetch_timeout()).await?,
    };
    let load = parse_metar_cache(&station_text);
    let dropped_stations = load.dropped;

    let grid = config.grid.clone();
    let field = tokio::task::spawn_blocking(move || {
        build_weather_field(boundaries, load.stations, &grid)
    })
    .await
    .context("field estimation task failed")??;

    let font = match &config.font_path {
        Some(path) => match load_font(path) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!(error = %e, "Legend text disabled");
                None
            }
        },
        None => None,
    };

    let scale = ColorScale::temperature()?;
    let plot = render_weather_field(
        &field,
        &section_label,
        &scale,
        font.as_ref(),
        config.image_width,
    )?;
    plot.save(&request.output)
        .with_context(|| format!("saving {}", request.output.display()))?;

    info!(
        output = %request.output.display(),
        section = %section_label,
        stations = field.station_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Weather map complete"
    );

    Ok(MapSummary {
        section_label,
        timestamp: field.timestamp,
        stations: field.station_count,
        dropped_stations,
        width: plot.width(),
        height: plot.map_height(),
    })
}
