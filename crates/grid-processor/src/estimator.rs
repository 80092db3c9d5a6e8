//! Nearest-station field estimation.
//!
//! Stations are held in an immutable snapshot sorted by descending longitude.
//! A query averages temperature, wind speed and wind direction over the
//! [`NEIGHBOR_COUNT`] stations closest to the query point in projected space.
//!
//! Two search strategies share the same ranked neighbour set:
//!
//! - **Exact**: binary-search the query longitude, then walk outward east and
//!   west in order of longitude gap. Once the gap alone exceeds the distance
//!   of the farthest retained neighbour no closer station can exist, so the
//!   walk stops.
//! - **Windowed**: approximate binary search for a station whose rounded
//!   longitude matches the query's, then scan a fixed number of stations on
//!   either side. Falls back to a full scan when no match is found or the
//!   window holds too few stations.
//!
//! Ties in distance are broken by snapshot position, lower index first.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use wx_common::{parse_observation_time, FieldError, FieldResult, Point, StationObservation};

use crate::config::{GridConfig, NeighborSearch, NEIGHBOR_COUNT};

/// Averaged field values at a query point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldEstimate {
    /// Degrees Celsius
    pub temperature: f64,
    /// Units as supplied by the stations (knots for METAR data)
    pub wind_speed: f64,
    /// Degrees, arithmetic mean of the neighbours' directions
    pub wind_direction: f64,
}

/// Read-only snapshot of valid stations sorted by descending longitude.
#[derive(Debug, Clone)]
pub struct StationIndex {
    stations: Vec<StationObservation>,
}

impl StationIndex {
    /// Build the snapshot. Stations with non-finite numeric fields are dropped;
    /// the sort is stable, so equal longitudes keep their input order.
    pub fn new(stations: Vec<StationObservation>) -> Self {
        let total = stations.len();
        let mut stations: Vec<_> = stations.into_iter().filter(|s| s.is_valid()).collect();
        if stations.len() < total {
            debug!(
                dropped = total - stations.len(),
                "Dropped stations with non-finite values"
            );
        }
        stations.sort_by(|a, b| b.longitude.total_cmp(&a.longitude));
        Self { stations }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations in snapshot order (descending longitude).
    pub fn stations(&self) -> &[StationObservation] {
        &self.stations
    }

    /// Latest observation time in the snapshot. Stations whose time does
    /// not parse are passed over.
    pub fn latest_timestamp(&self) -> Option<&str> {
        self.stations
            .iter()
            .filter_map(|s| match parse_observation_time(&s.timestamp) {
                Ok(time) => Some((time, s.timestamp.as_str())),
                Err(e) => {
                    debug!(station = %s.station_id, error = %e, "Skipping observation time");
                    None
                }
            })
            .max_by_key(|(time, _)| *time)
            .map(|(_, raw)| raw)
    }

    /// Estimate the field at `query` from its nearest stations.
    pub fn estimate(&self, query: Point, config: &GridConfig) -> FieldResult<FieldEstimate> {
        let neighbors = self.nearest_set(query, config)?;

        let mut estimate = FieldEstimate {
            temperature: 0.0,
            wind_speed: 0.0,
            wind_direction: 0.0,
        };
        for neighbor in neighbors.iter() {
            let station = &self.stations[neighbor.index];
            estimate.temperature += station.temperature;
            estimate.wind_speed += station.wind_speed;
            estimate.wind_direction += station.wind_direction;
        }

        let n = NEIGHBOR_COUNT as f64;
        estimate.temperature /= n;
        estimate.wind_speed /= n;
        estimate.wind_direction /= n;
        Ok(estimate)
    }

    /// The nearest stations to `query`, closest first.
    pub fn nearest(&self, query: Point, config: &GridConfig) -> FieldResult<Vec<&StationObservation>> {
        let neighbors = self.nearest_set(query, config)?;
        Ok(neighbors.iter().map(|n| &self.stations[n.index]).collect())
    }

    fn nearest_set(&self, query: Point, config: &GridConfig) -> FieldResult<NearestSet> {
        if self.stations.len() < NEIGHBOR_COUNT {
            return Err(FieldError::InsufficientData {
                required: NEIGHBOR_COUNT,
                available: self.stations.len(),
            });
        }

        let set = match config.search {
            NeighborSearch::Exact => self.search_exact(query),
            NeighborSearch::Windowed => self.search_windowed(query, config.search_window),
        };
        Ok(set)
    }

    fn search_exact(&self, query: Point) -> NearestSet {
        let mut set = NearestSet::new();

        // First index at or west of the query longitude
        let split = self.stations.partition_point(|s| s.longitude > query.x);
        let mut east = split.checked_sub(1);
        let mut west = (split < self.stations.len()).then_some(split);

        loop {
            let (index, gap, eastward) = match (east, west) {
                (None, None) => break,
                (Some(e), None) => (e, self.stations[e].longitude - query.x, true),
                (None, Some(w)) => (w, query.x - self.stations[w].longitude, false),
                (Some(e), Some(w)) => {
                    let east_gap = self.stations[e].longitude - query.x;
                    let west_gap = query.x - self.stations[w].longitude;
                    if west_gap < east_gap {
                        (w, west_gap, false)
                    } else {
                        (e, east_gap, true)
                    }
                }
            };

            if set.worst_distance().is_some_and(|worst| gap > worst) {
                break;
            }

            self.offer(&mut set, query, index);

            if eastward {
                east = index.checked_sub(1);
            } else {
                west = (index + 1 < self.stations.len()).then_some(index + 1);
            }
        }

        set
    }

    fn search_windowed(&self, query: Point, window: usize) -> NearestSet {
        let range = match self.approximate_start(query.x) {
            Some(start) if start >= 1 => {
                let before = window.min(start);
                let after = window.min(self.stations.len() - start);
                (start - before)..(start + after)
            }
            _ => {
                trace!(x = query.x, "No rounded longitude match, scanning all stations");
                0..self.stations.len()
            }
        };

        let scanned_all = range.len() == self.stations.len();
        let mut set = NearestSet::new();
        for index in range {
            self.offer(&mut set, query, index);
        }

        if !set.is_full() && !scanned_all {
            trace!(x = query.x, "Search window too small, scanning all stations");
            set = NearestSet::new();
            for index in 0..self.stations.len() {
                self.offer(&mut set, query, index);
            }
        }

        set
    }

    /// Binary search for a station whose longitude, rounded to the nearest
    /// integer, equals the rounded query longitude. Not guaranteed to find the
    /// closest longitude, only one on the search path.
    fn approximate_start(&self, longitude: f64) -> Option<usize> {
        let target = longitude.round();
        let mut lower = 0usize;
        let mut upper = self.stations.len();

        while lower < upper {
            let mid = lower + (upper - lower) / 2;
            let rounded = self.stations[mid].longitude.round();
            if rounded == target {
                return Some(mid);
            }
            if rounded > target {
                lower = mid + 1;
            } else {
                upper = mid;
            }
        }

        None
    }

    fn offer(&self, set: &mut NearestSet, query: Point, index: usize) {
        let distance = query.distance(&self.stations[index].position());
        set.offer(Neighbor { distance, index });
    }
}

/// Estimate the field at `query` with the default exact search.
pub fn estimate(query: Point, stations: &StationIndex) -> FieldResult<FieldEstimate> {
    stations.estimate(query, &GridConfig::default())
}

#[derive(Debug, Clone, Copy)]
struct Neighbor {
    distance: f64,
    index: usize,
}

impl Neighbor {
    fn closer_than(&self, other: &Neighbor) -> bool {
        self.distance < other.distance
            || (self.distance == other.distance && self.index < other.index)
    }
}

/// Fixed-size ranked set of the closest neighbours seen so far.
///
/// Slot 0 is the closest. Empty slots are `None` and accept any candidate.
#[derive(Debug)]
struct NearestSet {
    slots: [Option<Neighbor>; NEIGHBOR_COUNT],
}

impl NearestSet {
    fn new() -> Self {
        Self {
            slots: [None; NEIGHBOR_COUNT],
        }
    }

    fn offer(&mut self, candidate: Neighbor) {
        let rank = self.slots.iter().position(|slot| match slot {
            None => true,
            Some(held) => candidate.closer_than(held),
        });

        if let Some(rank) = rank {
            self.slots[rank..].rotate_right(1);
            self.slots[rank] = Some(candidate);
        }
    }

    fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Distance of the farthest retained neighbour, once every slot is filled.
    fn worst_distance(&self) -> Option<f64> {
        self.slots[NEIGHBOR_COUNT - 1].map(|n| n.distance)
    }

    fn iter(&self) -> impl Iterator<Item = &Neighbor> {
        self.slots.iter().flatten()
    }
}
