//! Uniform rectangular partitioning of a map extent.
//!
//! Cells are emitted row-major, bottom-to-top, left-to-right. Edge positions
//! are derived from the cell index rather than accumulated, and the last
//! column and row are clamped to the extent, so the grid tiles the extent
//! exactly and neighbouring cells share bit-identical edges.

use wx_common::{Extent, FieldError, FieldResult, Region};

use crate::config::Resolution;

/// Partition `[min_long, max_long] × [min_lat, max_lat]` at a fixed resolution.
///
/// Fails with a domain error when either span is zero (or inverted).
pub fn build_grid(
    min_long: f64,
    max_long: f64,
    min_lat: f64,
    max_lat: f64,
    resolution: Resolution,
) -> FieldResult<Vec<Region>> {
    let (cols, rows) = resolution.cells();
    partition(&Extent::new(min_long, min_lat, max_long, max_lat), cols, rows)
}

/// Partition an extent into `cols × rows` rectangular cells.
pub fn partition(extent: &Extent, cols: usize, rows: usize) -> FieldResult<Vec<Region>> {
    extent.ensure_area()?;
    if cols == 0 || rows == 0 {
        return Err(FieldError::domain(format!(
            "grid must have at least one cell, got {}x{}",
            cols, rows
        )));
    }

    let xs = edges(extent.min_long, extent.max_long, cols);
    let ys = edges(extent.min_lat, extent.max_lat, rows);

    let mut cells = Vec::with_capacity(cols * rows);
    for row in ys.windows(2) {
        for col in xs.windows(2) {
            cells.push(Region::rectangle(col[0], row[0], col[1], row[1]));
        }
    }

    Ok(cells)
}

/// `n + 1` edge positions from `lo` to `hi`, the last pinned to `hi`.
fn edges(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / n as f64;
    (0..=n)
        .map(|i| if i == n { hi } else { lo + i as f64 * step })
        .collect()
}
