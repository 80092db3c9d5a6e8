//! Observation timestamp handling.

use chrono::{Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::{FieldError, FieldResult};

/// Offset of the display zone west of UTC.
pub const EST_OFFSET_HOURS: i32 = 5;

const OBSERVATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a `YYYY-MM-DDTHH:MM:SSZ` observation time as a UTC wall-clock time.
pub fn parse_observation_time(timestamp: &str) -> FieldResult<NaiveDateTime> {
    let trimmed = timestamp.trim();
    if trimmed.len() != 20 {
        return Err(FieldError::parse(format!(
            "timestamp '{}' does not match YYYY-MM-DDTHH:MM:SSZ",
            timestamp
        )));
    }

    NaiveDateTime::parse_from_str(trimmed, OBSERVATION_TIME_FORMAT)
        .map_err(|e| FieldError::parse(format!("timestamp '{}': {}", timestamp, e)))
}

/// Convert a `YYYY-MM-DDTHH:MM:SSZ` observation time to the display form
/// `H:MM EST M-D-YY` at a fixed UTC−5 offset.
///
/// The date rolls back across day, month and year boundaries, so
/// `2020-03-01T02:00:00Z` becomes `21:00 EST 2-29-20`.
pub fn normalize_timestamp(timestamp: &str) -> FieldResult<String> {
    let naive = parse_observation_time(timestamp)?;

    let est = FixedOffset::west_opt(EST_OFFSET_HOURS * 3600)
        .ok_or_else(|| FieldError::domain("invalid display offset"))?;
    let local = Utc.from_utc_datetime(&naive).with_timezone(&est);

    Ok(format!(
        "{}:{:02} EST {}-{}-{:02}",
        local.hour(),
        local.minute(),
        local.month(),
        local.day(),
        local.year().rem_euclid(100)
    ))
}
