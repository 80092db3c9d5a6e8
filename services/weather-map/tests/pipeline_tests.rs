//! End-to-end runs against local fixture files.

use tempfile::TempDir;
use test_utils::{temp_file_with, BOUNDARY_SAMPLE, METAR_CACHE_SAMPLE, METAR_CACHE_SAMPLE_VALID};
use weather_map::{run, MapConfig, MapRequest};

fn request(dir: &TempDir, section: Option<&str>) -> (MapRequest, [tempfile::NamedTempFile; 2]) {
    let boundaries = temp_file_with(BOUNDARY_SAMPLE);
    let stations = temp_file_with(METAR_CACHE_SAMPLE);
    let request = MapRequest {
        boundaries: boundaries.path().to_path_buf(),
        output: dir.path().join("map.png"),
        section: section.map(str::to_string),
        stations_file: Some(stations.path().to_path_buf()),
    };
    (request, [boundaries, stations])
}

fn small_config() -> MapConfig {
    MapConfig {
        image_width: 256,
        ..MapConfig::default()
    }
}

#[tokio::test]
async fn test_state_map_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let (request, _files) = request(&dir, Some("Colorado"));

    let summary = run(&request, &small_config()).await.unwrap();
    assert_eq!(summary.section_label, "Colorado");
    assert_eq!(summary.stations, METAR_CACHE_SAMPLE_VALID);
    assert_eq!(summary.dropped_stations, 3);
    // Latest report is KMIA at 15:53Z
    assert_eq!(summary.timestamp, "10:53 EST 3-15-20");

    let png = image::open(&request.output).unwrap();
    assert_eq!(png.width(), 256);
    assert_eq!(png.height(), summary.height + 200);
}

#[tokio::test]
async fn test_region_label_drops_underscores() {
    let dir = tempfile::tempdir().unwrap();
    let (request, _files) = request(&dir, Some("New_England"));
    let summary = run(&request, &small_config()).await.unwrap();
    assert_eq!(summary.section_label, "New England");
}

#[tokio::test]
async fn test_unknown_section_draws_everything() {
    let dir = tempfile::tempdir().unwrap();
    let (request, _files) = request(&dir, Some("Atlantis"));
    let summary = run(&request, &small_config()).await.unwrap();
    assert_eq!(summary.section_label, "USA");
}

#[tokio::test]
async fn test_section_without_boundaries_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (request, _files) = request(&dir, Some("Southwest"));
    let err = run(&request, &small_config()).await.unwrap_err();
    assert!(err.to_string().contains("no boundaries"));
    assert!(!request.output.exists());
}

#[tokio::test]
async fn test_too_few_stations_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (mut request, _files) = request(&dir, Some("Colorado"));
    let sparse = temp_file_with(
        "a\nb\nc\nd\ne\nheader\n\
         raw,KDEN,2020-03-15T14:53:00Z,39.85,-104.66,12.0,-9.0,190,8,\n",
    );
    request.stations_file = Some(sparse.path().to_path_buf());

    let err = run(&request, &small_config()).await.unwrap_err();
    assert!(err.to_string().contains("Insufficient data"));
}

#[tokio::test]
async fn test_missing_boundary_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (mut request, _files) = request(&dir, None);
    request.boundaries = dir.path().join("missing.csv");
    assert!(run(&request, &small_config()).await.is_err());
}
