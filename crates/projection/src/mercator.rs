//! Spherical Mercator latitude projection.
//!
//! Output is expressed in degree-like units so that projected latitudes sit on
//! the same scale as longitudes: `y = (180/π)·ln(tan(π/4 + φ/2))`.

use std::f64::consts::PI;

use wx_common::{FieldError, FieldResult};

/// Project a latitude in degrees to its Mercator y-coordinate.
///
/// The transform diverges at the poles, so `lat` must lie in the open
/// interval (−90, 90).
pub fn project_latitude(lat: f64) -> FieldResult<f64> {
    if !lat.is_finite() || lat <= -90.0 || lat >= 90.0 {
        return Err(FieldError::domain(format!(
            "latitude {} is outside the Mercator domain (-90, 90)",
            lat
        )));
    }

    let y = (PI / 4.0 + lat * PI / 360.0).tan().ln();
    Ok(y * 180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_maps_to_zero() {
        assert_eq!(project_latitude(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_symmetric_about_equator() {
        let north = project_latitude(45.0).unwrap();
        let south = project_latitude(-45.0).unwrap();
        assert!((north + south).abs() < 1e-9);
    }

    #[test]
    fn test_known_value_at_45_degrees() {
        // ln(tan(67.5°)) = 0.881373587 rad → 50.499 degrees
        let y = project_latitude(45.0).unwrap();
        assert!((y - 50.498_986_7).abs() < 1e-4, "got {}", y);
    }

    #[test]
    fn test_strictly_increasing() {
        let mut prev = project_latitude(-89.9).unwrap();
        let mut lat = -89.0;
        while lat < 90.0 {
            let y = project_latitude(lat).unwrap();
            assert!(y > prev, "not increasing at {}", lat);
            prev = y;
            lat += 0.5;
        }
    }

    #[test]
    fn test_poles_and_beyond_fail() {
        for lat in [90.0, -90.0, 91.0, -180.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(project_latitude(lat), Err(FieldError::Domain(_))),
                "expected domain error for {}",
                lat
            );
        }
    }
}
