//! Raster rendering of estimated weather fields.
//!
//! Draws a [`WeatherField`](grid_processor::WeatherField) as:
//! - Temperature fill over the fine grid, coloured by a [`ColorScale`]
//! - Wind arrows from the midpoint of each coarse cell
//! - Boundary outlines
//! - A legend band with colour bar, timestamp and location

pub mod colorscale;
pub mod legend;
pub mod plot;
pub mod render;

pub use colorscale::{hex_to_rgb, ColorScale};
pub use legend::load_font;
pub use plot::{Plot, BLACK, DEFAULT_WIDTH, LEGEND_HEIGHT, SPEED_SCALE, WHITE};
pub use render::render_weather_field;
