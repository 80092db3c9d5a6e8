//! Coordinate transformations for station-field maps.
//!
//! Implements the spherical Mercator latitude transform and the linear
//! rescaling used to map geographic extents onto pixel extents.

pub mod mercator;
pub mod rescale;

pub use mercator::project_latitude;
pub use rescale::rescale;
