//! Point weather observations.

use serde::{Deserialize, Serialize};

use crate::Point;

/// A single station report with its latitude already projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationObservation {
    pub station_id: String,
    /// Observation time as reported, `YYYY-MM-DDTHH:MM:SSZ`
    pub timestamp: String,
    pub longitude: f64,
    /// Mercator-projected latitude
    pub latitude: f64,
    /// Degrees Celsius
    pub temperature: f64,
    /// Degrees, as supplied by the source
    pub wind_direction: f64,
    /// Knots, as supplied by the source
    pub wind_speed: f64,
}

impl StationObservation {
    /// Position in projected space.
    pub fn position(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }

    /// True when every numeric field is a finite real.
    pub fn is_valid(&self) -> bool {
        [
            self.longitude,
            self.latitude,
            self.temperature,
            self.wind_direction,
            self.wind_speed,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
