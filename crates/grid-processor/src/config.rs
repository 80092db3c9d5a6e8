//! Configuration for grid partitioning and station-field estimation.

use serde::{Deserialize, Serialize};

/// Number of nearest stations averaged into each estimate.
pub const NEIGHBOR_COUNT: usize = 3;

/// Grid resolution used for a rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// 20×20 cells, used for wind vectors to avoid clutter
    Coarse,
    /// 70×70 cells, used for the temperature fill
    Fine,
}

impl Resolution {
    /// Map the wind/coarse flag onto a resolution.
    pub fn from_coarse(coarse: bool) -> Self {
        if coarse {
            Resolution::Coarse
        } else {
            Resolution::Fine
        }
    }

    /// Default (columns, rows) for this resolution.
    pub fn cells(&self) -> (usize, usize) {
        match self {
            Resolution::Coarse => (20, 20),
            Resolution::Fine => (70, 70),
        }
    }
}

/// Strategy used to locate the nearest stations for a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NeighborSearch {
    /// Expand outward from the query longitude until no closer station can exist
    #[default]
    Exact,
    /// Scan a fixed window of stations around an approximate longitude match
    Windowed,
}

impl NeighborSearch {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "windowed" | "window" => NeighborSearch::Windowed,
            _ => NeighborSearch::Exact,
        }
    }
}

/// Configuration for a field estimation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Neighbour search strategy.
    pub search: NeighborSearch,

    /// Stations scanned on each side of the start index by the windowed search.
    pub search_window: usize,

    /// (columns, rows) of the coarse wind grid.
    pub coarse_cells: (usize, usize),

    /// (columns, rows) of the fine temperature grid.
    pub fine_cells: (usize, usize),
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            search: NeighborSearch::Exact,
            search_window: 50,
            coarse_cells: Resolution::Coarse.cells(),
            fine_cells: Resolution::Fine.cells(),
        }
    }
}

impl GridConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("NEIGHBOR_SEARCH") {
            config.search = NeighborSearch::from_str(&val);
        }

        if let Ok(val) = std::env::var("SEARCH_WINDOW") {
            if let Ok(window) = val.parse() {
                config.search_window = window;
            }
        }

        if let Ok(val) = std::env::var("COARSE_CELLS") {
            if let Ok(n) = val.parse() {
                config.coarse_cells = (n, n);
            }
        }

        if let Ok(val) = std::env::var("FINE_CELLS") {
            if let Ok(n) = val.parse() {
                config.fine_cells = (n, n);
            }
        }

        config
    }

    /// (columns, rows) configured for a resolution.
    pub fn cells_for(&self, resolution: Resolution) -> (usize, usize) {
        match resolution {
            Resolution::Coarse => self.coarse_cells,
            Resolution::Fine => self.fine_cells,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, (cols, rows)) in [("coarse", self.coarse_cells), ("fine", self.fine_cells)] {
            if cols == 0 || rows == 0 {
                return Err(format!("{} grid must have at least one cell, got {}x{}", name, cols, rows));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolutions() {
        let config = GridConfig::default();
        assert_eq!(config.cells_for(Resolution::Coarse), (20, 20));
        assert_eq!(config.cells_for(Resolution::Fine), (70, 70));
        assert_eq!(config.search_window, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_coarse_flag() {
        assert_eq!(Resolution::from_coarse(true), Resolution::Coarse);
        assert_eq!(Resolution::from_coarse(false), Resolution::Fine);
    }

    #[test]
    fn test_neighbor_search_from_str() {
        assert_eq!(NeighborSearch::from_str("Windowed"), NeighborSearch::Windowed);
        assert_eq!(NeighborSearch::from_str("exact"), NeighborSearch::Exact);
        assert_eq!(NeighborSearch::from_str("unknown"), NeighborSearch::Exact);
    }

    #[test]
    fn test_zero_cells_rejected() {
        let config = GridConfig {
            fine_cells: (0, 70),
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
