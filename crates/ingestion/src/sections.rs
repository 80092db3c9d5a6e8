//! Map sections: a single state, a named region of states, or everything.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use wx_common::{FieldError, FieldResult};

use crate::BoundaryRow;

/// Label used when the whole boundary file is drawn.
pub const ALL_LABEL: &str = "USA";

const STATES: [&str; 48] = [
    "Alabama",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New_Hampshire",
    "New_Jersey",
    "New_Mexico",
    "New_York",
    "North_Carolina",
    "North_Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode_Island",
    "South_Carolina",
    "South_Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West_Virginia",
    "Wisconsin",
    "Wyoming",
];

const REGIONS: [(&str, &[&str]); 7] = [
    (
        "New_England",
        &[
            "Massachusetts",
            "Connecticut",
            "Rhode_Island",
            "Maine",
            "Vermont",
            "New_Hampshire",
        ],
    ),
    (
        "Mid_Atlantic",
        &[
            "New_York",
            "Pennsylvania",
            "New_Jersey",
            "Maryland",
            "Delaware",
            "West_Virginia",
            "Virginia",
        ],
    ),
    (
        "Southeast",
        &[
            "North_Carolina",
            "South_Carolina",
            "Georgia",
            "Florida",
            "Alabama",
            "Mississippi",
            "Kentucky",
            "Tennessee",
            "Louisiana",
            "Arkansas",
        ],
    ),
    (
        "Midwest",
        &[
            "Ohio",
            "Michigan",
            "Indiana",
            "Illinois",
            "Wisconsin",
            "Minnesota",
            "Iowa",
            "Missouri",
        ],
    ),
    (
        "Great_Plains",
        &[
            "North_Dakota",
            "South_Dakota",
            "Nebraska",
            "Kansas",
            "Oklahoma",
            "Texas",
            "Wyoming",
            "Colorado",
        ],
    ),
    ("Northwest", &["Montana", "Washington", "Oregon", "Idaho"]),
    (
        "Southwest",
        &["California", "Utah", "Nevada", "Arizona", "New_Mexico"],
    ),
];

/// Known states and regions.
///
/// Names match the first column of the boundary file, so multi-word names
/// use underscores (`New_Hampshire`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCatalog {
    pub states: Vec<String>,
    /// Region name to member states, in drawing order.
    pub regions: BTreeMap<String, Vec<String>>,
}

impl SectionCatalog {
    /// The contiguous United States and its seven standard regions.
    pub fn builtin() -> Self {
        Self {
            states: STATES.iter().map(|s| s.to_string()).collect(),
            regions: REGIONS
                .iter()
                .map(|(name, members)| {
                    (
                        name.to_string(),
                        members.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Load a catalog from YAML with `states` and `regions` keys.
    pub fn from_yaml_str(yaml: &str) -> FieldResult<Self> {
        let catalog: Self = serde_yaml::from_str(yaml)
            .map_err(|e| FieldError::parse(format!("section catalog: {}", e)))?;

        for (region, members) in &catalog.regions {
            for member in members {
                if !catalog.states.contains(member) {
                    warn!(region = %region, state = %member, "Region member is not a known state");
                }
            }
        }
        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> FieldResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| FieldError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }

    pub fn is_state(&self, name: &str) -> bool {
        self.states.iter().any(|s| s == name)
    }

    pub fn region(&self, name: &str) -> Option<&[String]> {
        self.regions.get(name).map(Vec::as_slice)
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The part of the boundary file a map covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    State(String),
    Region { name: String, states: Vec<String> },
    All,
}

impl Section {
    /// Resolve a user-supplied name. States win over regions; anything
    /// unknown, or no name at all, selects the whole file.
    pub fn resolve(name: Option<&str>, catalog: &SectionCatalog) -> Self {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Section::All;
        };

        if catalog.is_state(name) {
            Section::State(name.to_string())
        } else if let Some(states) = catalog.region(name) {
            Section::Region {
                name: name.to_string(),
                states: states.to_vec(),
            }
        } else {
            debug!(section = %name, "Unknown section, drawing all boundaries");
            Section::All
        }
    }

    /// Name shown in the legend.
    pub fn label(&self) -> String {
        match self {
            Section::State(name) | Section::Region { name, .. } => name.replace('_', " "),
            Section::All => ALL_LABEL.to_string(),
        }
    }
}

/// Keep the boundary rows that belong to `section`.
///
/// Region rows come out grouped by member state in catalog order; within a
/// state, file order is preserved.
pub fn select_boundaries(rows: Vec<BoundaryRow>, section: &Section) -> Vec<BoundaryRow> {
    match section {
        Section::All => rows,
        Section::State(state) => rows.into_iter().filter(|r| &r.name == state).collect(),
        Section::Region { states, .. } => states
            .iter()
            .flat_map(|state| rows.iter().filter(move |r| &r.name == state).cloned())
            .collect(),
    }
}
