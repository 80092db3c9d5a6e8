//! METAR cache parsing.
//!
//! The cache is a CSV export: a short preamble (status lines, timing and a
//! header row) followed by one report per line. Only a handful of fixed
//! columns are read. Reports with missing or non-numeric values are dropped
//! rather than failing the whole load, since variable winds (`VRB`) and
//! missing temperatures are routine in real data. The same goes for
//! observation times that do not parse.

use std::path::Path;

use tracing::{debug, info};

use projection::project_latitude;
use wx_common::{parse_observation_time, FieldError, FieldResult, StationObservation};

/// Lines before the first station row, header included.
pub const PREAMBLE_LINES: usize = 6;

const COL_STATION_ID: usize = 1;
const COL_TIME: usize = 2;
const COL_LATITUDE: usize = 3;
const COL_LONGITUDE: usize = 4;
const COL_TEMPERATURE: usize = 5;
const COL_WIND_DIRECTION: usize = 7;
const COL_WIND_SPEED: usize = 8;

/// Stations accepted from a cache, and how many rows were rejected.
#[derive(Debug, Clone, Default)]
pub struct StationLoad {
    pub stations: Vec<StationObservation>,
    pub dropped: usize,
}

/// Parse METAR cache text into projected station observations.
///
/// Never fails on individual rows; an unusable row is counted in
/// [`StationLoad::dropped`].
pub fn parse_metar_cache(text: &str) -> StationLoad {
    let body = text
        .splitn(PREAMBLE_LINES + 1, '\n')
        .nth(PREAMBLE_LINES)
        .unwrap_or("");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut load = StationLoad::default();
    for (i, record) in reader.records().enumerate() {
        let line = i + PREAMBLE_LINES + 1;
        let parsed = record
            .map_err(|e| e.to_string())
            .and_then(|record| parse_row(&record));

        match parsed {
            Ok(station) => load.stations.push(station),
            Err(reason) => {
                debug!(line, reason = %reason, "Dropping station row");
                load.dropped += 1;
            }
        }
    }

    info!(
        accepted = load.stations.len(),
        dropped = load.dropped,
        "Parsed METAR cache"
    );
    load
}

/// Read and parse a METAR cache from disk.
pub fn load_metar_cache(path: impl AsRef<Path>) -> FieldResult<StationLoad> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| FieldError::Io(format!("{}: {}", path.display(), e)))?;
    Ok(parse_metar_cache(&text))
}

fn parse_row(record: &csv::StringRecord) -> Result<StationObservation, String> {
    let station_id = field(record, COL_STATION_ID)?.to_string();
    let timestamp = field(record, COL_TIME)?.to_string();
    parse_observation_time(&timestamp).map_err(|e| format!("{} ({})", e, station_id))?;

    let latitude = number(record, COL_LATITUDE, "latitude")?;
    let longitude = number(record, COL_LONGITUDE, "longitude")?;
    let temperature = number(record, COL_TEMPERATURE, "temperature")?;
    let wind_direction = number(record, COL_WIND_DIRECTION, "wind direction")?;
    let wind_speed = number(record, COL_WIND_SPEED, "wind speed")?;

    let latitude = project_latitude(latitude).map_err(|e| format!("{} ({})", e, station_id))?;

    Ok(StationObservation {
        station_id,
        timestamp,
        longitude,
        latitude,
        temperature,
        wind_direction,
        wind_speed,
    })
}

fn field(record: &csv::StringRecord, col: usize) -> Result<&str, String> {
    record
        .get(col)
        .map(str::trim)
        .ok_or_else(|| format!("row has {} columns, need {}", record.len(), col + 1))
}

fn number(record: &csv::StringRecord, col: usize, what: &str) -> Result<f64, String> {
    let raw = field(record, col)?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{} {:?} is not a finite number", what, raw)),
    }
}
