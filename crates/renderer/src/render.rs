//! Composition of a full weather map from an estimated field.

use std::time::Instant;

use rusttype::Font;
use tracing::{debug, info};

use grid_processor::WeatherField;
use wx_common::FieldResult;

use crate::colorscale::ColorScale;
use crate::plot::{Plot, BLACK};

/// Draw `field` onto a new plot `width` pixels wide.
///
/// Passes run in a fixed order: temperature fill on the fine grid, wind
/// arrows on the coarse grid, boundary outlines, then the legend.
/// Temperatures outside the scale are drawn in the nearest end colour.
pub fn render_weather_field(
    field: &WeatherField,
    section_label: &str,
    scale: &ColorScale,
    font: Option<&Font<'_>>,
    width: u32,
) -> FieldResult<Plot> {
    let start = Instant::now();
    let mut plot = Plot::new(field.extent, width)?;

    let mut clamped = 0usize;
    for cell in &field.temperature_cells {
        let temperature = cell.estimate.temperature;
        if !scale.covers(temperature) {
            clamped += 1;
        }
        plot.fill_region(&cell.region, scale.color_for(temperature))?;
    }
    if clamped > 0 {
        debug!(
            cells = clamped,
            min = scale.min(),
            max = scale.max(),
            "Temperatures clamped to the colour scale"
        );
    }

    for cell in &field.wind_cells {
        plot.draw_arrow(
            &cell.region,
            cell.estimate.wind_speed,
            cell.estimate.wind_direction,
            BLACK,
        )?;
    }

    for boundary in &field.boundaries {
        plot.outline_region(boundary, BLACK)?;
    }

    plot.draw_legend(section_label, &field.timestamp, scale, font);

    info!(
        width = plot.width(),
        height = plot.map_height(),
        temperature_cells = field.temperature_cells.len(),
        wind_cells = field.wind_cells.len(),
        boundaries = field.boundaries.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered weather map"
    );
    Ok(plot)
}
