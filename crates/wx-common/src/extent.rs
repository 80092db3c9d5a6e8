//! Rectangular extents in projected longitude/latitude space.

use serde::{Deserialize, Serialize};

use crate::{FieldError, FieldResult, Point};

/// An axis-aligned rectangle in (longitude, Mercator latitude) units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_long: f64,
    pub min_lat: f64,
    pub max_long: f64,
    pub max_lat: f64,
}

impl Extent {
    /// Create a new extent from corner coordinates.
    pub fn new(min_long: f64, min_lat: f64, max_long: f64, max_lat: f64) -> Self {
        Self {
            min_long,
            min_lat,
            max_long,
            max_lat,
        }
    }

    /// Width of the extent in longitude units.
    pub fn width(&self) -> f64 {
        self.max_long - self.min_long
    }

    /// Height of the extent in projected latitude units.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center of the extent (mean of the bounds on each axis).
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.min_long + self.max_long) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Smallest extent covering both `self` and `other`.
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min_long: self.min_long.min(other.min_long),
            min_lat: self.min_lat.min(other.min_lat),
            max_long: self.max_long.max(other.max_long),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }

    /// Union of a sequence of extents, `None` when the sequence is empty.
    pub fn union_all<I>(extents: I) -> Option<Extent>
    where
        I: IntoIterator<Item = Extent>,
    {
        extents.into_iter().reduce(|acc, e| acc.union(&e))
    }

    /// Check if a point is contained within this extent (edges inclusive).
    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min_long && p.x <= self.max_long && p.y >= self.min_lat && p.y <= self.max_lat
    }

    /// Reject extents that cannot be subdivided: zero or negative size, or non-finite bounds.
    pub fn ensure_area(&self) -> FieldResult<()> {
        let bounds = [self.min_long, self.min_lat, self.max_long, self.max_lat];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(FieldError::domain(format!("non-finite extent {:?}", self)));
        }
        if self.width() <= 0.0 {
            return Err(FieldError::domain(format!(
                "degenerate extent: longitude span [{}, {}] has no width",
                self.min_long, self.max_long
            )));
        }
        if self.height() <= 0.0 {
            return Err(FieldError::domain(format!(
                "degenerate extent: latitude span [{}, {}] has no height",
                self.min_lat, self.max_lat
            )));
        }
        Ok(())
    }
}
