//! The estimation pass: extent, grids and per-cell estimates.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use wx_common::{normalize_timestamp, Extent, FieldError, FieldResult, Region, StationObservation};

use crate::config::{GridConfig, Resolution, NEIGHBOR_COUNT};
use crate::estimator::{FieldEstimate, StationIndex};
use crate::partition::partition;

/// A grid cell paired with its estimated field values.
#[derive(Debug, Clone, Serialize)]
pub struct CellEstimate {
    pub region: Region,
    pub estimate: FieldEstimate,
}

/// Everything the renderer needs to draw one map.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherField {
    /// Union of the boundary extents
    pub extent: Extent,
    /// Fine grid, consumed for the temperature fill
    pub temperature_cells: Vec<CellEstimate>,
    /// Coarse grid, consumed for wind vectors
    pub wind_cells: Vec<CellEstimate>,
    /// Boundary polygons for outline drawing
    pub boundaries: Vec<Region>,
    /// Display timestamp, `H:MM EST M-D-YY`
    pub timestamp: String,
    /// Number of stations in the snapshot
    pub station_count: usize,
}

/// Union of the boundary extents.
pub fn map_extent(boundaries: &[Region]) -> FieldResult<Extent> {
    Extent::union_all(boundaries.iter().map(Region::extent))
        .ok_or_else(|| FieldError::domain("no boundary regions to derive a map extent from"))
}

/// Estimate every cell against the snapshot.
///
/// Cells are independent, so they are estimated in parallel; the output keeps
/// the input order. Any failing cell fails the whole pass.
pub fn estimate_cells(
    cells: Vec<Region>,
    index: &StationIndex,
    config: &GridConfig,
) -> FieldResult<Vec<CellEstimate>> {
    cells
        .into_par_iter()
        .map(|region| -> FieldResult<CellEstimate> {
            let estimate = index.estimate(region.midpoint(), config)?;
            Ok(CellEstimate { region, estimate })
        })
        .collect()
}

/// Run the full estimation pass over projected boundaries and stations.
pub fn build_weather_field(
    boundaries: Vec<Region>,
    stations: Vec<StationObservation>,
    config: &GridConfig,
) -> FieldResult<WeatherField> {
    let start = Instant::now();
    config.validate().map_err(FieldError::domain)?;

    let extent = map_extent(&boundaries)?;
    let index = StationIndex::new(stations);
    if index.len() < NEIGHBOR_COUNT {
        return Err(FieldError::InsufficientData {
            required: NEIGHBOR_COUNT,
            available: index.len(),
        });
    }

    let raw_timestamp = index
        .latest_timestamp()
        .ok_or_else(|| FieldError::parse("no station carries a valid observation time"))?;
    let timestamp = normalize_timestamp(raw_timestamp)?;

    let (fine_cols, fine_rows) = config.cells_for(Resolution::Fine);
    let (coarse_cols, coarse_rows) = config.cells_for(Resolution::Coarse);
    let temperature_cells = estimate_cells(partition(&extent, fine_cols, fine_rows)?, &index, config)?;
    let wind_cells = estimate_cells(partition(&extent, coarse_cols, coarse_rows)?, &index, config)?;

    info!(
        stations = index.len(),
        temperature_cells = temperature_cells.len(),
        wind_cells = wind_cells.len(),
        search = ?config.search,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Estimated weather field"
    );

    Ok(WeatherField {
        extent,
        temperature_cells,
        wind_cells,
        boundaries,
        timestamp,
        station_count: index.len(),
    })
}
