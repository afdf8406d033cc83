//! Cell sink capability: the seam between the pure rasterizer and any
//! consumer with side effects (renderer, grid update, pathfinder).

use crate::core::GridPoint;
use crate::raster::LineRaster;

/// Receiver for rasterized cells.
///
/// A renderer marks a pixel or patch, a grid applies an occupancy update,
/// a test collects. The rasterizer itself never depends on what `mark`
/// does.
pub trait CellSink {
    /// Accept one rasterized cell.
    fn mark(&mut self, cell: GridPoint);
}

impl CellSink for Vec<GridPoint> {
    fn mark(&mut self, cell: GridPoint) {
        self.push(cell);
    }
}

/// Rasterize the segment from `start` to `end` straight into a sink.
///
/// Returns the number of cells marked (`max(|dx|, |dy|) + 1`).
pub fn rasterize_into<S: CellSink>(start: GridPoint, end: GridPoint, sink: &mut S) -> usize {
    let mut marked = 0;
    for cell in LineRaster::new(start, end) {
        sink.mark(cell);
        marked += 1;
    }
    marked
}
