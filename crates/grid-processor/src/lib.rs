//! Grid partitioning and nearest-station field estimation.
//!
//! Reconstructs temperature and wind fields over a map extent from sparse
//! station reports:
//!
//! ```text
//! boundary regions ──► map extent ──► partition (fine 70×70, coarse 20×20)
//!                                            │
//! stations ──► StationIndex (sorted by       │
//!              descending longitude) ────────┤
//!                                            ▼
//!                         per-cell estimate (3 nearest, averaged)
//!                                            │
//!                                            ▼
//!                                      WeatherField
//! ```
//!
//! # Example
//!
//! ```ignore
//! use grid_processor::{build_weather_field, GridConfig};
//!
//! let field = build_weather_field(boundaries, stations, &GridConfig::default())?;
//! for cell in &field.temperature_cells {
//!     println!("{:?} {}", cell.region.midpoint(), cell.estimate.temperature);
//! }
//! ```

pub mod config;
pub mod estimator;
pub mod field;
pub mod partition;

// Re-export commonly used types at crate root
pub use config::{GridConfig, NeighborSearch, Resolution, NEIGHBOR_COUNT};
pub use estimator::{estimate, FieldEstimate, StationIndex};
pub use field::{build_weather_field, estimate_cells, map_extent, CellEstimate, WeatherField};
pub use partition::{build_grid, partition};
