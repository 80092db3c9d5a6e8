//! Boundary file parsing.
//!
//! Each row describes one polygon: `name, code, lon, lat, lon, lat, ...` with
//! coordinates in degrees. A state made of several polygons appears on
//! several rows under the same name. An unpaired value at the end of a row is
//! ignored.

use std::path::Path;

use tracing::{debug, info};

use projection::project_latitude;
use wx_common::{FieldError, FieldResult, Region};

/// One boundary polygon as read from disk, latitudes still in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRow {
    pub name: String,
    pub code: String,
    pub coords: Vec<(f64, f64)>,
}

/// Parse boundary CSV text.
///
/// Unlike station rows, a malformed boundary row fails the whole load.
pub fn parse_boundaries(text: &str) -> FieldResult<Vec<BoundaryRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let line = i + 1;
        let record =
            record.map_err(|e| FieldError::parse(format!("boundary line {}: {}", line, e)))?;
        rows.push(parse_row(&record, line)?);
    }

    info!(rows = rows.len(), "Parsed boundary file");
    Ok(rows)
}

/// Read and parse a boundary file from disk.
pub fn load_boundaries(path: impl AsRef<Path>) -> FieldResult<Vec<BoundaryRow>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| FieldError::Io(format!("{}: {}", path.display(), e)))?;
    parse_boundaries(&text)
}

/// Project boundary rows into named regions.
pub fn project_boundaries(rows: &[BoundaryRow]) -> FieldResult<Vec<Region>> {
    rows.iter()
        .map(|row| {
            let coords = row
                .coords
                .iter()
                .map(|&(lon, lat)| Ok((lon, project_latitude(lat)?)))
                .collect::<FieldResult<Vec<_>>>()?;
            Region::named(row.name.clone(), coords)
        })
        .collect()
}

fn parse_row(record: &csv::StringRecord, line: usize) -> FieldResult<BoundaryRow> {
    let name = record.get(0).unwrap_or_default().to_string();
    let code = record.get(1).unwrap_or_default().to_string();
    if name.is_empty() {
        return Err(FieldError::parse(format!("boundary line {}: missing name", line)));
    }

    // Exports often end rows with a trailing comma.
    let mut values: Vec<&str> = record.iter().skip(2).collect();
    while values.last().is_some_and(|v| v.is_empty()) {
        values.pop();
    }

    let pairs = values.chunks_exact(2);
    if let [unpaired] = pairs.remainder() {
        debug!(line, name = %name, value = %unpaired, "Ignoring unpaired boundary value");
    }

    let coords = pairs
        .map(|pair| Ok((coordinate(pair[0], line)?, coordinate(pair[1], line)?)))
        .collect::<FieldResult<Vec<_>>>()?;
    if coords.is_empty() {
        return Err(FieldError::parse(format!(
            "boundary line {} ({}): no coordinates",
            line, name
        )));
    }

    Ok(BoundaryRow { name, code, coords })
}

fn coordinate(raw: &str, line: usize) -> FieldResult<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FieldError::parse(format!(
            "boundary line {}: {:?} is not a coordinate",
            line, raw
        ))),
    }
}
