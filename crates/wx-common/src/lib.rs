//! Common types and utilities shared across the weather-map crates.

pub mod error;
pub mod extent;
pub mod point;
pub mod region;
pub mod station;
pub mod time;

pub use error::{FieldError, FieldResult};
pub use extent::Extent;
pub use point::Point;
pub use region::Region;
pub use station::StationObservation;
pub use time::{normalize_timestamp, parse_observation_time};
