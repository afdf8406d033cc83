//! Configuration for the grid canvas renderer.

use serde::{Deserialize, Serialize};

use crate::core::GridPoint;

/// Canvas configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Number of cells per row and column
    pub grid_size: usize,

    /// Rendered size of one cell in pixels
    pub cell_px: f32,

    /// Blank margin around the grid in pixels
    pub margin_px: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,   // 20x20 cells
            cell_px: 24.0,   // legible at typical zoom
            margin_px: 16.0,
        }
    }
}

impl CanvasConfig {
    /// Create a configuration for a square grid of `grid_size` cells.
    pub fn with_grid_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    /// Smallest square grid, anchored at the origin corner, that contains
    /// every one of `cells` (negative coordinates cannot be fitted).
    pub fn fitting(cells: &[GridPoint]) -> Self {
        let extent = cells
            .iter()
            .map(|c| c.x.max(c.y))
            .max()
            .unwrap_or(0)
            .max(0) as usize;
        Self::with_grid_size(extent + 1)
    }

    /// Is the cell inside the rendered grid?
    pub fn contains(&self, cell: GridPoint) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.grid_size
            && (cell.y as usize) < self.grid_size
    }

    /// Total document width in pixels
    pub fn width_px(&self) -> f32 {
        self.grid_size as f32 * self.cell_px + 2.0 * self.margin_px
    }

    /// Total document height in pixels
    pub fn height_px(&self) -> f32 {
        self.width_px()
    }
}
