//! Ingestion of station observations and state boundaries.
//!
//! This crate turns the raw inputs of a weather map run into the types the
//! field estimator works on:
//! - METAR cache CSV text into projected [`StationObservation`]s
//! - boundary CSV text into named, projected [`Region`]s
//! - section names ("Colorado", "New_England") into the boundary rows to draw
//!
//! [`StationObservation`]: wx_common::StationObservation
//! [`Region`]: wx_common::Region

pub mod boundaries;
pub mod fetch;
pub mod sections;
pub mod stations;

pub use boundaries::{load_boundaries, parse_boundaries, project_boundaries, BoundaryRow};
pub use fetch::{fetch_text, DEFAULT_STATIONS_URL};
pub use sections::{select_boundaries, Section, SectionCatalog};
pub use stations::{load_metar_cache, parse_metar_cache, StationLoad};
