//! Polygons in projected longitude/latitude space.
//!
//! A region is either an administrative boundary loaded from a boundary file
//! or a synthetic grid cell produced by the partitioner. Closure is implicit:
//! the last vertex need not repeat the first.

use serde::{Deserialize, Serialize};

use crate::{Extent, FieldError, FieldResult, Point};

/// An ordered polygon of (longitude, projected latitude) vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    name: Option<String>,
    coords: Vec<(f64, f64)>,
    extent: Extent,
}

impl Region {
    /// Build a region from its vertices. At least one vertex is required.
    pub fn new(coords: Vec<(f64, f64)>) -> FieldResult<Self> {
        let extent = bounding_extent(&coords)
            .ok_or_else(|| FieldError::domain("region has no vertices"))?;
        Ok(Self {
            name: None,
            coords,
            extent,
        })
    }

    /// Build a region tagged with an area name.
    pub fn named(name: impl Into<String>, coords: Vec<(f64, f64)>) -> FieldResult<Self> {
        let mut region = Self::new(coords)?;
        region.name = Some(name.into());
        Ok(region)
    }

    /// Axis-aligned rectangle `[x0, x1] × [y0, y1]`, vertices counter-clockwise
    /// from the bottom-left corner.
    pub fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            name: None,
            coords: vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)],
            extent: Extent::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn coords(&self) -> &[(f64, f64)] {
        &self.coords
    }

    /// Longitudes of all vertices, in order.
    pub fn longs(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().map(|&(x, _)| x)
    }

    /// Projected latitudes of all vertices, in order.
    pub fn lats(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().map(|&(_, y)| y)
    }

    pub fn min_long(&self) -> f64 {
        self.extent.min_long
    }

    pub fn max_long(&self) -> f64 {
        self.extent.max_long
    }

    pub fn min_lat(&self) -> f64 {
        self.extent.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.extent.max_lat
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Mean of the extents on each axis (not the vertex centroid).
    pub fn midpoint(&self) -> Point {
        self.extent.midpoint()
    }
}

fn bounding_extent(coords: &[(f64, f64)]) -> Option<Extent> {
    let (&(x, y), rest) = coords.split_first()?;
    let seed = Extent::new(x, y, x, y);
    Some(rest.iter().fold(seed, |e, &(x, y)| Extent {
        min_long: e.min_long.min(x),
        min_lat: e.min_lat.min(y),
        max_long: e.max_long.max(x),
        max_lat: e.max_lat.max(y),
    }))
}
