//! Station-field weather map service.
//!
//! Reads a boundary file and a METAR cache (local or downloaded), estimates
//! temperature and wind over grids spanning the selected section, and writes
//! the rendered map as PNG.

pub mod config;
pub mod pipeline;

pub use config::MapConfig;
pub use pipeline::{run, MapRequest, MapSummary};
