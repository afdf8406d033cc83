//! Lattice point and segment types for grid rasterization.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point on the integer lattice (cell indices).
///
/// Equality is structural; a point has no identity beyond its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridPoint {
    /// Create a new lattice point
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point
    #[inline]
    pub fn manhattan_distance(&self, other: &GridPoint) -> i64 {
        (self.x as i64 - other.x as i64).abs() + (self.y as i64 - other.y as i64).abs()
    }

    /// Chebyshev distance (max of x and y distance) - the number of steps
    /// an 8-connected path needs between the two points
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridPoint) -> i64 {
        (self.x as i64 - other.x as i64)
            .abs()
            .max((self.y as i64 - other.y as i64).abs())
    }

    /// Check 8-connectivity: the points differ by at most one unit in each
    /// coordinate and are not the same cell
    #[inline]
    pub fn is_neighbor_8(&self, other: &GridPoint) -> bool {
        *self != *other && self.chebyshev_distance(other) <= 1
    }
}

impl Add for GridPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        GridPoint::new(x, y)
    }
}

/// An ordered pair of lattice points.
///
/// `start` and `end` may be equal (degenerate segment, a single cell).
/// Any two integer points form a valid segment; no direction is implied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Segment start point
    pub start: GridPoint,
    /// Segment end point
    pub end: GridPoint,
}

impl Segment {
    /// Create a new segment
    #[inline]
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }

    /// Is this a single-cell segment?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Segment with start and end swapped
    #[inline]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    /// Number of cells the rasterized segment covers: one per unit step
    /// along the dominant axis, endpoints included
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.start.chebyshev_distance(&self.end) as usize + 1
    }
}
