//! Station generators for creating predictable observation sets.

use wx_common::{Extent, StationObservation};

/// Default observation time used by generated stations.
pub const GENERATED_TIMESTAMP: &str = "2020-03-15T14:20:00Z";

/// Creates a station at a projected position with the given readings.
pub fn station(id: &str, x: f64, y: f64, temperature: f64, wind_speed: f64, wind_direction: f64) -> StationObservation {
    StationObservation {
        station_id: id.to_string(),
        timestamp: GENERATED_TIMESTAMP.to_string(),
        longitude: x,
        latitude: y,
        temperature,
        wind_direction,
        wind_speed,
    }
}

/// Creates a station with only a temperature reading of interest.
pub fn temperature_station(id: &str, x: f64, y: f64, temperature: f64) -> StationObservation {
    station(id, x, y, temperature, 0.0, 0.0)
}

/// The five-station example whose three nearest neighbours of the origin are
/// (0,0), (1,0) and (0,1), averaging to 20 °C.
pub fn crafted_stations() -> Vec<StationObservation> {
    vec![
        station("ORIGIN", 0.0, 0.0, 10.0, 4.0, 90.0),
        station("EAST", 1.0, 0.0, 20.0, 8.0, 180.0),
        station("NORTH", 0.0, 1.0, 30.0, 12.0, 270.0),
        station("FAR_NE", 10.0, 10.0, 40.0, 30.0, 10.0),
        station("FAR_SW", -10.0, -10.0, 50.0, 30.0, 350.0),
    ]
}

/// Creates `count` stations scattered deterministically over `extent`.
///
/// Temperature follows a west-to-east gradient from −10 °C to 30 °C so that
/// estimates are easy to sanity-check; wind values come from the hash.
pub fn scattered_stations(extent: &Extent, count: usize, seed: u32) -> Vec<StationObservation> {
    (0..count)
        .map(|i| {
            let hx = simple_hash(i as u32, 0, seed);
            let hy = simple_hash(i as u32, 1, seed);
            let fx = (hx % 10_000) as f64 / 10_000.0;
            let fy = (hy % 10_000) as f64 / 10_000.0;
            let x = extent.min_long + fx * extent.width();
            let y = extent.min_lat + fy * extent.height();
            station(
                &format!("S{:04}", i),
                x,
                y,
                -10.0 + 40.0 * fx,
                (hx % 40) as f64,
                (hy % 360) as f64,
            )
        })
        .collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}
