//! Tests for nearest-station estimation.

use grid_processor::{estimate, GridConfig, NeighborSearch, StationIndex};
use test_utils::{assert_approx_eq, crafted_stations, scattered_stations, station, temperature_station};
use wx_common::{Extent, FieldError, Point};

fn windowed() -> GridConfig {
    GridConfig {
        search: NeighborSearch::Windowed,
        ..GridConfig::default()
    }
}

fn brute_force_mean_temperature(index: &StationIndex, query: Point) -> f64 {
    let mut by_distance: Vec<(f64, usize)> = index
        .stations()
        .iter()
        .enumerate()
        .map(|(i, s)| (query.distance(&s.position()), i))
        .collect();
    by_distance.sort_by(|a, b| a.partial_cmp(b).unwrap());
    by_distance[..3]
        .iter()
        .map(|&(_, i)| index.stations()[i].temperature)
        .sum::<f64>()
        / 3.0
}

// ============================================================================
// Crafted example
// ============================================================================

#[test]
fn test_crafted_example_mean_temperature() {
    let index = StationIndex::new(crafted_stations());
    let result = estimate(Point::new(0.0, 0.0), &index).unwrap();
    assert_approx_eq!(result.temperature, 20.0, 1e-12);
    assert_approx_eq!(result.wind_speed, 8.0, 1e-12);
    assert_approx_eq!(result.wind_direction, 180.0, 1e-12);
}

#[test]
fn test_crafted_example_windowed_agrees() {
    let index = StationIndex::new(crafted_stations());
    let result = index.estimate(Point::new(0.0, 0.0), &windowed()).unwrap();
    assert_approx_eq!(result.temperature, 20.0, 1e-12);
}

#[test]
fn test_nearest_returns_closest_first() {
    let index = StationIndex::new(crafted_stations());
    let nearest = index
        .nearest(Point::new(0.9, 0.1), &GridConfig::default())
        .unwrap();
    let ids: Vec<&str> = nearest.iter().map(|s| s.station_id.as_str()).collect();
    assert_eq!(ids, vec!["EAST", "ORIGIN", "NORTH"]);
}

#[test]
fn test_far_stations_never_contribute() {
    let index = StationIndex::new(crafted_stations());
    for query in [Point::new(0.2, 0.2), Point::new(0.5, 0.5), Point::new(0.0, 0.4)] {
        let nearest = index.nearest(query, &GridConfig::default()).unwrap();
        assert!(nearest.iter().all(|s| !s.station_id.starts_with("FAR")));
    }
}

// ============================================================================
// Determinism and ties
// ============================================================================

#[test]
fn test_repeated_queries_are_identical() {
    let extent = Extent::new(-125.0, 30.0, -66.0, 60.0);
    let index = StationIndex::new(scattered_stations(&extent, 400, 11));
    let query = Point::new(-97.3, 44.1);
    let first = estimate(query, &index).unwrap();
    for _ in 0..10 {
        assert_eq!(estimate(query, &index).unwrap(), first);
    }
}

#[test]
fn test_equidistant_stations_break_ties_by_snapshot_order() {
    // Four stations at distance 1 from the origin; the snapshot is sorted by
    // descending longitude, so EAST (x=1) comes first and WEST (x=-1) last.
    let index = StationIndex::new(vec![
        temperature_station("WEST", -1.0, 0.0, 100.0),
        temperature_station("NORTH", 0.0, 1.0, 10.0),
        temperature_station("SOUTH", 0.0, -1.0, 20.0),
        temperature_station("EAST", 1.0, 0.0, 30.0),
    ]);

    for config in [GridConfig::default(), windowed()] {
        let nearest = index.nearest(Point::new(0.0, 0.0), &config).unwrap();
        let ids: Vec<&str> = nearest.iter().map(|s| s.station_id.as_str()).collect();
        assert_eq!(ids, vec!["EAST", "NORTH", "SOUTH"], "search {:?}", config.search);
    }
}

// ============================================================================
// Exact search correctness
// ============================================================================

#[test]
fn test_exact_search_matches_brute_force() {
    let extent = Extent::new(-125.0, 30.0, -66.0, 60.0);
    let index = StationIndex::new(scattered_stations(&extent, 300, 5));

    let mut x = -130.0;
    while x <= -60.0 {
        let mut y = 25.0;
        while y <= 65.0 {
            let query = Point::new(x, y);
            let got = estimate(query, &index).unwrap().temperature;
            let want = brute_force_mean_temperature(&index, query);
            assert_approx_eq!(got, want, 1e-9);
            y += 2.5;
        }
        x += 3.5;
    }
}

#[test]
fn test_windowed_search_matches_exact_on_dense_stations() {
    // Fewer stations than a 50-station window spans, so every window that is
    // found covers all true neighbours.
    let extent = Extent::new(-100.0, 30.0, -90.0, 40.0);
    let index = StationIndex::new(scattered_stations(&extent, 60, 9));

    let mut x = -99.5;
    while x < -90.0 {
        let query = Point::new(x, 35.0);
        let exact = index.estimate(query, &GridConfig::default()).unwrap();
        let approx = index.estimate(query, &windowed()).unwrap();
        assert_approx_eq!(exact.temperature, approx.temperature, 1e-9);
        x += 1.0;
    }
}

#[test]
fn test_query_outside_station_longitudes() {
    let index = StationIndex::new(crafted_stations());
    for config in [GridConfig::default(), windowed()] {
        let nearest = index.nearest(Point::new(50.0, 10.0), &config).unwrap();
        assert_eq!(nearest[0].station_id, "FAR_NE");
        let nearest = index.nearest(Point::new(-50.0, -10.0), &config).unwrap();
        assert_eq!(nearest[0].station_id, "FAR_SW");
    }
}

#[test]
fn test_small_window_falls_back_to_full_scan() {
    let config = GridConfig {
        search: NeighborSearch::Windowed,
        search_window: 1,
        ..GridConfig::default()
    };
    let index = StationIndex::new(vec![
        temperature_station("A", 5.0, 0.0, 1.0),
        temperature_station("B", 4.0, 0.0, 2.0),
        temperature_station("C", 3.0, 0.0, 3.0),
        temperature_station("D", 2.0, 0.0, 4.0),
        temperature_station("E", 1.0, 0.0, 5.0),
    ]);
    // Rounded match at index 2 (x=3); a one-station window holds only two
    let result = index.estimate(Point::new(3.0, 0.0), &config).unwrap();
    assert_approx_eq!(result.temperature, 3.0, 1e-12);
}

#[test]
fn test_rounded_match_on_easternmost_station_scans_all() {
    // Only the first station (x=10.2) rounds to the query longitude.
    let index = StationIndex::new(vec![
        temperature_station("FIRST", 10.2, 0.0, 1.0),
        temperature_station("B", 5.0, 0.0, 2.0),
        temperature_station("C", 4.0, 0.0, 3.0),
        temperature_station("D", 3.0, 0.0, 4.0),
    ]);
    let query = Point::new(10.0, 0.0);
    for window in [1, 50] {
        let config = GridConfig {
            search: NeighborSearch::Windowed,
            search_window: window,
            ..GridConfig::default()
        };
        let result = index.estimate(query, &config).unwrap();
        assert_approx_eq!(result.temperature, 2.0, 1e-12);
        assert_approx_eq!(result.temperature, brute_force_mean_temperature(&index, query), 1e-12);
    }
}

// ============================================================================
// Insufficient data
// ============================================================================

#[test]
fn test_empty_snapshot_is_insufficient() {
    let index = StationIndex::new(Vec::new());
    let err = estimate(Point::new(0.0, 0.0), &index).unwrap_err();
    assert!(matches!(
        err,
        FieldError::InsufficientData { required: 3, available: 0 }
    ));
}

#[test]
fn test_two_stations_are_insufficient() {
    let index = StationIndex::new(vec![
        temperature_station("A", 0.0, 0.0, 10.0),
        temperature_station("B", 1.0, 0.0, 20.0),
    ]);
    for config in [GridConfig::default(), windowed()] {
        let err = index.estimate(Point::new(0.0, 0.0), &config).unwrap_err();
        assert!(matches!(err, FieldError::InsufficientData { available: 2, .. }));
    }
}

#[test]
fn test_invalid_stations_are_excluded_from_snapshot() {
    let mut stations = crafted_stations();
    stations.push(station("BROKEN", 0.0, 0.0, f64::NAN, 0.0, 0.0));
    stations.push(station("INF", 0.1, 0.1, 1000.0, f64::INFINITY, 0.0));
    let index = StationIndex::new(stations);
    assert_eq!(index.len(), 5);
    let result = estimate(Point::new(0.0, 0.0), &index).unwrap();
    assert_approx_eq!(result.temperature, 20.0, 1e-12);
}
