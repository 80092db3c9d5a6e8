//! Common test fixtures for weather-map tests.
//!
//! This module provides pre-defined inputs that mirror the shapes of the real
//! METAR cache and boundary files.

use std::io::Write;

use tempfile::NamedTempFile;

/// A METAR cache excerpt: six preamble lines, then station rows.
///
/// Rows 3 (`KVRB`, variable wind), 5 (`KMSG`, missing temperature) and 7
/// (`KBAD`, non-numeric longitude) must be rejected; the other six are valid.
pub const METAR_CACHE_SAMPLE: &str = "\
No errors
No warnings
12 ms
data source=metars
9 results
raw_text,station_id,observation_time,latitude,longitude,temp_c,dewpoint_c,wind_dir_degrees,wind_speed_kt,wind_gust_kt
KBOS 151454Z 28012KT 10SM FEW050 08/M06 A3012,KBOS,2020-03-15T14:54:00Z,42.37,-71.02,8.0,-6.0,280,12,
KORD 151451Z 31015G22KT 10SM SCT040 03/M08 A3021,KORD,2020-03-15T14:51:00Z,41.98,-87.93,3.0,-8.0,310,15,22
KVRB 151453Z VRB03KT 10SM CLR 24/18 A3001,KVRB,2020-03-15T14:53:00Z,27.65,-80.42,24.0,18.0,VRB,3,
KDEN 151453Z 19008KT 10SM FEW120 12/M09 A2998,KDEN,2020-03-15T14:53:00Z,39.85,-104.66,12.0,-9.0,190,8,
KMSG 151455Z 22005KT 10SM OVC010 A2990,KMSG,2020-03-15T14:55:00Z,35.10,-90.05,,,220,5,
KSEA 151453Z 16010KT 10SM BKN025 09/05 A3005,KSEA,2020-03-15T14:53:00Z,47.45,-122.31,9.0,5.0,160,10,
KBAD 151453Z 00000KT 10SM CLR 15/05 A3005,KBAD,2020-03-15T14:53:00Z,40.00,west,15.0,5.0,0,0,
KLAX 151453Z 25006KT 10SM FEW015 17/11 A2995,KLAX,2020-03-15T14:53:00Z,33.94,-118.41,17.0,11.0,250,6,
KMIA 151453Z 09014KT 10SM SCT030 27/20 A3008,KMIA,2020-03-15T15:53:00Z,25.79,-80.29,27.0,20.0,90,14,
";

/// Number of valid rows in [`METAR_CACHE_SAMPLE`].
pub const METAR_CACHE_SAMPLE_VALID: usize = 6;

/// Boundary rows: `name, code, lon, lat, lon, lat, ...` in degrees.
pub const BOUNDARY_SAMPLE: &str = "\
Colorado,CO,-109.05,41.0,-102.05,41.0,-102.05,37.0,-109.05,37.0
Wyoming,WY,-111.05,45.0,-104.05,45.0,-104.05,41.0,-111.05,41.0
Vermont,VT,-73.44,45.01,-71.46,45.01,-72.46,42.73,-73.26,42.75
Maine,ME,-71.08,45.31,-67.0,47.46,-69.0,43.8,-70.7,43.07
";

/// Write `contents` to a temporary file that lives as long as the handle.
pub fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_round_trip() {
        let file = temp_file_with(BOUNDARY_SAMPLE);
        let read = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(read, BOUNDARY_SAMPLE);
    }
}
