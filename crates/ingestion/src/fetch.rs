//! Download of the current METAR cache.

use std::time::Duration;

use tracing::{debug, info};

use wx_common::{FieldError, FieldResult};

/// Current METAR cache published by the Aviation Weather Center.
pub const DEFAULT_STATIONS_URL: &str =
    "http://aviationweather.gov/adds/dataserver_current/current/metars.cache.csv";

/// Fetch `url` and return its body as text.
///
/// Non-success statuses are errors; the body of a failed response is not
/// inspected.
pub async fn fetch_text(url: &str, timeout: Duration) -> FieldResult<String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FieldError::Fetch(format!("failed to build HTTP client: {}", e)))?;

    debug!(url, timeout_secs = timeout.as_secs(), "Fetching station data");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FieldError::Fetch(format!("{}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FieldError::Fetch(format!("{}: HTTP {}", url, status)));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FieldError::Fetch(format!("{}: {}", url, e)))?;

    info!(url, bytes = text.len(), "Fetched station data");
    Ok(text)
}
