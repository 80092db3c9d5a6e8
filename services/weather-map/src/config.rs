//! Weather map configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use grid_processor::GridConfig;
use ingestion::DEFAULT_STATIONS_URL;
use renderer::DEFAULT_WIDTH;

/// Runtime configuration for one map run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// METAR cache URL, used when no local stations file is given
    pub stations_url: String,

    /// HTTP timeout for the station download (seconds)
    pub fetch_timeout_secs: u64,

    /// Output image width in pixels
    pub image_width: u32,

    /// TrueType font for legend text
    pub font_path: Option<PathBuf>,

    /// YAML section catalog replacing the built-in states and regions
    pub sections_file: Option<PathBuf>,

    /// Grid and neighbour search settings
    pub grid: GridConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            stations_url: DEFAULT_STATIONS_URL.to_string(),
            fetch_timeout_secs: 30,
            image_width: DEFAULT_WIDTH,
            font_path: None,
            sections_file: None,
            grid: GridConfig::default(),
        }
    }
}

impl MapConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let stations_url = env::var("STATIONS_URL").unwrap_or(defaults.stations_url);

        let fetch_timeout_secs = match env::var("FETCH_TIMEOUT_SECS") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.fetch_timeout_secs,
        };

        let image_width = match env::var("IMAGE_WIDTH") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.image_width,
        };

        let config = Self {
            stations_url,
            fetch_timeout_secs,
            image_width,
            font_path: env::var("FONT_PATH").ok().map(PathBuf::from),
            sections_file: env::var("SECTIONS_FILE").ok().map(PathBuf::from),
            grid: GridConfig::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.image_width == 0 {
            bail!("IMAGE_WIDTH must be positive");
        }
        if self.fetch_timeout_secs == 0 {
            bail!("FETCH_TIMEOUT_SECS must be positive");
        }
        if let Err(e) = self.grid.validate() {
            bail!("invalid grid configuration: {}", e);
        }
        Ok(())
    }
}
