//! Integer line rasterization with the exact midpoint decision rule.
//!
//! Converts a segment between two lattice points into the run of grid
//! cells that best approximates it, one cell per unit step along the
//! dominant axis:
//!
//! ```text
//! From (0,0) to (7,3):
//!
//!     3 │            ●●
//!     2 │        ●●
//!     1 │    ●●
//!     0 ●●
//!       └────────────────
//!        0 1 2 3 4 5 6 7
//! ```
//!
//! ## Decision rule
//!
//! At dominant step `s`, with `rise` secondary advances accumulated so
//! far, the secondary coordinate advances exactly when
//!
//! ```text
//! 2 * s * minor  >  (2 * rise + 1) * major        (strict)
//! ```
//!
//! where `major = max(|dx|, |dy|)` and `minor = min(|dx|, |dy|)`. This is
//! the exact-rational form of "the true line is past the midpoint of the
//! current row/column": no floating point, no division, no rounding.
//! Vertical lines (`dx == 0`) are handled by the `|dy| > |dx|` axis swap
//! instead of a slope quotient, so there is no division-by-zero hazard.
//!
//! The test is carried incrementally in an `i64` accumulator that stays
//! within a few multiples of `major`, so every pair of `i32` endpoints is
//! exact - including deltas that span the full `i32` range.
//!
//! ## Usage
//!
//! ```rust
//! use rekha_raster::{GridPoint, LineRaster, rasterize};
//!
//! let cells = rasterize(GridPoint::new(0, 0), GridPoint::new(5, 2));
//! assert_eq!(cells.len(), 6);
//!
//! // Or iterate without allocating
//! for cell in LineRaster::new(GridPoint::new(0, 0), GridPoint::new(0, 9)) {
//!     let _ = cell;
//! }
//! ```

use crate::core::{GridPoint, Segment};
use crate::error::{RasterError, Result};

/// Iterator over the grid cells of a rasterized segment.
///
/// Yields `chebyshev(start, end) + 1` cells, the first equal to `start`
/// and the last equal to `end`. Consecutive cells are 8-connected: exactly
/// one unit apart on the dominant axis, at most one on the secondary axis.
/// The path is a deterministic function of the two endpoints, and negating
/// either delta mirrors the path exactly.
#[derive(Debug)]
pub struct LineRaster {
    origin: GridPoint,
    steep: bool,
    major: i64,
    minor: i64,
    major_sign: i64,
    minor_sign: i64,
    step: i64,
    rise: i64,
    // Invariant before each decision: acc = 2*step*minor - (2*rise+1)*major
    acc: i64,
    done: bool,
}

impl LineRaster {
    /// Create a rasterizing iterator from `start` to `end`.
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        let dx = end.x as i64 - start.x as i64;
        let dy = end.y as i64 - start.y as i64;
        let steep = dy.abs() > dx.abs();

        let (major_delta, minor_delta) = if steep { (dy, dx) } else { (dx, dy) };
        let major = major_delta.abs();
        let minor = minor_delta.abs();

        Self {
            origin: start,
            steep,
            major,
            minor,
            major_sign: if major_delta < 0 { -1 } else { 1 },
            minor_sign: if minor_delta < 0 { -1 } else { 1 },
            step: 0,
            rise: 0,
            acc: -major,
            done: false,
        }
    }

    /// Create a rasterizing iterator for a segment.
    pub fn from_segment(segment: Segment) -> Self {
        Self::new(segment.start, segment.end)
    }

    /// Create a rasterizing iterator from world-space endpoints, flooring
    /// each coordinate into the cell of size `resolution` that contains it.
    ///
    /// This is the float boundary of the crate: coordinates must be finite
    /// and the resolution strictly positive, otherwise the cell indices
    /// would be meaningless. Fails fast with [`RasterError`] before any
    /// cell is produced.
    pub fn from_world(start: (f32, f32), end: (f32, f32), resolution: f32) -> Result<Self> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(RasterError::InvalidResolution { value: resolution });
        }
        let start = world_to_cell(start, resolution)?;
        let end = world_to_cell(end, resolution)?;
        Ok(Self::new(start, end))
    }

    /// Number of cells this iterator yields in total (endpoints included).
    pub fn cell_count(&self) -> usize {
        self.major as usize + 1
    }

    /// Cells not yet yielded.
    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.major - self.step) as usize + 1
        }
    }
}

impl Iterator for LineRaster {
    type Item = GridPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Midpoint test for the current step; the secondary coordinate
        // holds on an exact tie (strict inequality).
        if self.acc > 0 {
            self.rise += 1;
            self.acc -= 2 * self.major;
        }

        let along = self.major_sign * self.step;
        let across = self.minor_sign * self.rise;
        let cell = if self.steep {
            GridPoint::new(
                (self.origin.x as i64 + across) as i32,
                (self.origin.y as i64 + along) as i32,
            )
        } else {
            GridPoint::new(
                (self.origin.x as i64 + along) as i32,
                (self.origin.y as i64 + across) as i32,
            )
        };

        if self.step == self.major {
            self.done = true;
        } else {
            self.step += 1;
            self.acc += 2 * self.minor;
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LineRaster {}

impl std::iter::FusedIterator for LineRaster {}

/// Rasterize the segment from `start` to `end` into an owned cell run.
///
/// The result is non-empty, starts with `start`, ends with `end`, and has
/// exactly `max(|dx|, |dy|) + 1` cells.
pub fn rasterize(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    let line = LineRaster::new(start, end);
    let mut cells = Vec::with_capacity(line.cell_count());
    cells.extend(line);
    cells
}

fn world_to_cell(point: (f32, f32), resolution: f32) -> Result<GridPoint> {
    let (x, y) = point;
    if !x.is_finite() {
        return Err(RasterError::NonFiniteCoordinate { axis: "x", value: x });
    }
    if !y.is_finite() {
        return Err(RasterError::NonFiniteCoordinate { axis: "y", value: y });
    }
    Ok(GridPoint::new(
        (x / resolution).floor() as i32,
        (y / resolution).floor() as i32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(start: (i32, i32), end: (i32, i32)) -> Vec<GridPoint> {
        rasterize(start.into(), end.into())
    }

    #[test]
    fn test_degenerate_single_cell() {
        assert_eq!(cells((3, 3), (3, 3)), vec![GridPoint::new(3, 3)]);
    }

    #[test]
    fn test_horizontal() {
        let expected: Vec<_> = (0..=5).map(|x| GridPoint::new(x, 0)).collect();
        assert_eq!(cells((0, 0), (5, 0)), expected);
    }

    #[test]
    fn test_vertical() {
        let expected: Vec<_> = (0..=5).map(|y| GridPoint::new(0, y)).collect();
        assert_eq!(cells((0, 0), (0, 5)), expected);
    }

    #[test]
    fn test_diagonal_45() {
        let expected: Vec<_> = (0..=5).map(|i| GridPoint::new(i, i)).collect();
        assert_eq!(cells((0, 0), (5, 5)), expected);
    }

    #[test]
    fn test_golden_shallow_15_2() {
        // Hand-computed from the decision rule with dx=15, dy=2: the
        // secondary axis advances at s=4 (2*4*2=16 > 1*15) and at
        // s=12 (2*12*2=48 > 3*15).
        let expected = vec![
            GridPoint::new(0, 0),
            GridPoint::new(1, 0),
            GridPoint::new(2, 0),
            GridPoint::new(3, 0),
            GridPoint::new(4, 1),
            GridPoint::new(5, 1),
            GridPoint::new(6, 1),
            GridPoint::new(7, 1),
            GridPoint::new(8, 1),
            GridPoint::new(9, 1),
            GridPoint::new(10, 1),
            GridPoint::new(11, 1),
            GridPoint::new(12, 2),
            GridPoint::new(13, 2),
            GridPoint::new(14, 2),
            GridPoint::new(15, 2),
        ];
        assert_eq!(cells((0, 0), (15, 2)), expected);
    }

    #[test]
    fn test_steep_swaps_driving_axis() {
        let run = cells((0, 0), (2, 5));
        assert_eq!(run.len(), 6);
        assert_eq!(run[0], GridPoint::new(0, 0));
        assert_eq!(run[5], GridPoint::new(2, 5));
        // y advances by exactly one per cell
        for (i, cell) in run.iter().enumerate() {
            assert_eq!(cell.y, i as i32);
        }
    }

    #[test]
    fn test_right_to_left() {
        let run = cells((5, 5), (0, 0));
        assert_eq!(run[0], GridPoint::new(5, 5));
        assert_eq!(run[5], GridPoint::new(0, 0));
    }

    #[test]
    fn test_quadrant_mirrors() {
        let reference = cells((0, 0), (8, 3));
        let mirror_x = cells((0, 0), (-8, 3));
        let mirror_y = cells((0, 0), (8, -3));
        let mirror_xy = cells((0, 0), (-8, -3));

        for (i, cell) in reference.iter().enumerate() {
            assert_eq!(mirror_x[i], GridPoint::new(-cell.x, cell.y));
            assert_eq!(mirror_y[i], GridPoint::new(cell.x, -cell.y));
            assert_eq!(mirror_xy[i], GridPoint::new(-cell.x, -cell.y));
        }
    }

    #[test]
    fn test_translation_invariance() {
        let at_origin = cells((0, 0), (7, 3));
        let offset = GridPoint::new(-13, 42);
        let translated = cells((offset.x, offset.y), (7 + offset.x, 3 + offset.y));
        for (a, b) in at_origin.iter().zip(&translated) {
            assert_eq!(*a + offset, *b);
        }
    }

    #[test]
    fn test_tie_holds_secondary() {
        // (0,0)-(2,1) passes exactly through the corner at (1, 0.5); the
        // strict midpoint test keeps y at 0 for that column.
        let expected = vec![
            GridPoint::new(0, 0),
            GridPoint::new(1, 0),
            GridPoint::new(2, 1),
        ];
        assert_eq!(cells((0, 0), (2, 1)), expected);
    }

    #[test]
    fn test_exact_size_iterator() {
        let mut line = LineRaster::new(GridPoint::new(0, 0), GridPoint::new(9, 4));
        assert_eq!(line.len(), 10);
        line.next();
        line.next();
        assert_eq!(line.len(), 8);
        assert_eq!(line.by_ref().count(), 8);
        assert_eq!(line.next(), None);
        assert_eq!(line.len(), 0);
    }

    #[test]
    fn test_full_range_deltas_do_not_overflow() {
        // Deltas wider than i32 must still terminate with exact endpoints;
        // only the first and last few cells are inspected to keep the
        // allocation small.
        let mut line = LineRaster::new(
            GridPoint::new(i32::MIN, i32::MAX),
            GridPoint::new(i32::MAX, i32::MIN),
        );
        assert_eq!(line.next(), Some(GridPoint::new(i32::MIN, i32::MAX)));
        assert_eq!(line.cell_count(), u32::MAX as usize + 1);
    }

    #[test]
    fn test_from_segment_matches_endpoints() {
        let seg = Segment::new(GridPoint::new(2, -1), GridPoint::new(-4, 6));
        let run: Vec<_> = LineRaster::from_segment(seg).collect();
        assert_eq!(run.len(), seg.cell_count());
        assert_eq!(*run.first().unwrap(), seg.start);
        assert_eq!(*run.last().unwrap(), seg.end);
    }

    #[test]
    fn test_from_world_floors_into_cells() {
        let line = LineRaster::from_world((0.05, 0.05), (0.55, 0.05), 0.1).unwrap();
        let run: Vec<_> = line.collect();
        assert_eq!(run[0], GridPoint::new(0, 0));
        assert_eq!(*run.last().unwrap(), GridPoint::new(5, 0));
    }

    #[test]
    fn test_from_world_rejects_non_finite() {
        let err = LineRaster::from_world((f32::NAN, 0.0), (1.0, 1.0), 0.1).unwrap_err();
        assert!(matches!(
            err,
            RasterError::NonFiniteCoordinate { axis: "x", .. }
        ));

        let err = LineRaster::from_world((0.0, 0.0), (1.0, f32::INFINITY), 0.1).unwrap_err();
        assert!(matches!(
            err,
            RasterError::NonFiniteCoordinate { axis: "y", .. }
        ));
    }

    #[test]
    fn test_from_world_rejects_bad_resolution() {
        for resolution in [0.0, -0.5, f32::NAN] {
            let err = LineRaster::from_world((0.0, 0.0), (1.0, 1.0), resolution).unwrap_err();
            assert!(matches!(err, RasterError::InvalidResolution { .. }));
        }
    }
}
