//! Tests for the full estimation pass.

use grid_processor::{build_weather_field, estimate_cells, map_extent, partition, GridConfig, StationIndex};
use test_utils::{assert_approx_eq, crafted_stations, scattered_stations, temperature_station};
use wx_common::{Extent, FieldError, Region};

fn boundaries() -> Vec<Region> {
    vec![
        Region::named("West", vec![(-110.0, 35.0), (-100.0, 35.0), (-100.0, 45.0), (-110.0, 45.0)]).unwrap(),
        Region::named("East", vec![(-100.0, 38.0), (-90.0, 38.0), (-90.0, 48.0)]).unwrap(),
    ]
}

#[test]
fn test_map_extent_is_union_of_boundaries() {
    let extent = map_extent(&boundaries()).unwrap();
    assert_eq!(extent, Extent::new(-110.0, 35.0, -90.0, 48.0));
}

#[test]
fn test_map_extent_requires_boundaries() {
    assert!(matches!(map_extent(&[]), Err(FieldError::Domain(_))));
}

#[test]
fn test_field_has_both_grids_and_timestamp() {
    let extent = Extent::new(-110.0, 35.0, -90.0, 48.0);
    let stations = scattered_stations(&extent, 200, 1);
    let field = build_weather_field(boundaries(), stations, &GridConfig::default()).unwrap();

    assert_eq!(field.temperature_cells.len(), 4900);
    assert_eq!(field.wind_cells.len(), 400);
    assert_eq!(field.boundaries.len(), 2);
    assert_eq!(field.station_count, 200);
    assert_eq!(field.timestamp, "9:20 EST 3-15-20");
    assert_eq!(field.extent, extent);
}

#[test]
fn test_field_estimates_stay_within_station_range() {
    let extent = Extent::new(-110.0, 35.0, -90.0, 48.0);
    let stations = scattered_stations(&extent, 150, 2);
    let (lo, hi) = stations.iter().fold((f64::MAX, f64::MIN), |(lo, hi), s| {
        (lo.min(s.temperature), hi.max(s.temperature))
    });

    let field = build_weather_field(boundaries(), stations, &GridConfig::default()).unwrap();
    for cell in field.temperature_cells.iter().chain(&field.wind_cells) {
        assert!(cell.estimate.temperature >= lo && cell.estimate.temperature <= hi);
        assert!(cell.estimate.wind_speed >= 0.0);
    }
}

#[test]
fn test_parallel_pass_preserves_grid_order() {
    let extent = Extent::new(0.0, 0.0, 10.0, 10.0);
    let cells = partition(&extent, 10, 10).unwrap();
    let index = StationIndex::new(scattered_stations(&extent, 50, 4));
    let estimates = estimate_cells(cells.clone(), &index, &GridConfig::default()).unwrap();

    assert_eq!(estimates.len(), cells.len());
    for (cell, estimated) in cells.iter().zip(&estimates) {
        assert_eq!(cell, &estimated.region);
    }
}

#[test]
fn test_constant_field_is_reproduced() {
    let stations = vec![
        temperature_station("A", -105.0, 40.0, 12.5),
        temperature_station("B", -95.0, 44.0, 12.5),
        temperature_station("C", -100.0, 37.0, 12.5),
        temperature_station("D", -92.0, 46.0, 12.5),
    ];
    let field = build_weather_field(boundaries(), stations, &GridConfig::default()).unwrap();
    for cell in &field.temperature_cells {
        assert_approx_eq!(cell.estimate.temperature, 12.5, 1e-12);
    }
}

#[test]
fn test_too_few_stations_fail_the_run() {
    let stations = vec![
        temperature_station("A", -105.0, 40.0, 1.0),
        temperature_station("B", -95.0, 44.0, 2.0),
    ];
    let err = build_weather_field(boundaries(), stations, &GridConfig::default()).unwrap_err();
    assert!(matches!(err, FieldError::InsufficientData { available: 2, .. }));
}

#[test]
fn test_malformed_station_timestamp_is_passed_over() {
    let mut stations = scattered_stations(&Extent::new(-110.0, 35.0, -90.0, 48.0), 10, 3);
    stations[0].timestamp = "2020-03-15T99:99:99Z".to_string();
    stations[4].timestamp = "N/A".to_string();
    let field = build_weather_field(boundaries(), stations, &GridConfig::default()).unwrap();
    assert_eq!(field.timestamp, "9:20 EST 3-15-20");
}

#[test]
fn test_crafted_snapshot_with_unparseable_time_succeeds() {
    let mut stations = crafted_stations();
    stations[4].timestamp = "N/A".to_string();
    let regions = vec![Region::named(
        "Square",
        vec![(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)],
    )
    .unwrap()];
    let field = build_weather_field(regions, stations, &GridConfig::default()).unwrap();
    assert_eq!(field.timestamp, "9:20 EST 3-15-20");
}

#[test]
fn test_no_parseable_timestamp_fails_the_run() {
    let mut stations = scattered_stations(&Extent::new(-110.0, 35.0, -90.0, 48.0), 10, 3);
    for station in &mut stations {
        station.timestamp = "N/A".to_string();
    }
    let err = build_weather_field(boundaries(), stations, &GridConfig::default()).unwrap_err();
    assert!(matches!(err, FieldError::Parse(_)));
}
