//! SVG grid canvas for visual verification of rasterized lines.
//!
//! Draws the background grid, fills every marked cell, and optionally
//! overlays the ideal segment with its endpoints so the rasterized run
//! can be checked against the true line by eye.

use std::path::Path;

use log::debug;
use svg::node::element::{Circle, Group, Line, Rectangle};
use svg::Document;

use crate::core::{GridPoint, Segment};
use crate::error::Result;
use crate::render::config::CanvasConfig;
use crate::render::sink::CellSink;

/// Colorblind-friendly palette (Okabe-Ito).
mod colors {
    /// Background grid lines - light gray
    pub const GRID: &str = "#CCCCCC";
    /// Filled (rasterized) cells - near black
    pub const CELL: &str = "#333333";
    /// Segment start marker - vermillion
    pub const START: &str = "#D55E00";
    /// Segment end marker - teal green
    pub const END: &str = "#009E73";
    /// Ideal line overlay - orange
    pub const REFERENCE: &str = "#E69F00";
}

/// Radius of the endpoint markers in pixels.
const MARKER_RADIUS: f32 = 5.0;

/// SVG canvas that collects marked cells and renders them over a grid.
pub struct SvgCanvas {
    config: CanvasConfig,
    cells: Vec<GridPoint>,
    skipped: usize,
}

impl SvgCanvas {
    /// Create an empty canvas.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            cells: Vec::new(),
            skipped: 0,
        }
    }

    /// Cells marked so far, in mark order.
    pub fn cells(&self) -> &[GridPoint] {
        &self.cells
    }

    /// Cells that fell outside the grid and were not drawn.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Build the SVG document: grid, marked cells, and (if given) the
    /// reference segment overlay with endpoint markers.
    pub fn document(&self, reference: Option<Segment>) -> Document {
        let width = self.config.width_px();
        let height = self.config.height_px();

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {} {}", width, height));

        doc = doc.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", "white"),
        );

        doc = doc.add(self.render_grid());
        doc = doc.add(self.render_cells());

        if let Some(segment) = reference {
            doc = doc.add(self.render_reference(segment));
        }

        doc
    }

    /// Render the document and write it to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P, reference: Option<Segment>) -> Result<()> {
        debug!(
            "Saving canvas: {} cells marked, {} skipped, grid {}x{}",
            self.cells.len(),
            self.skipped,
            self.config.grid_size,
            self.config.grid_size
        );
        svg::save(path, &self.document(reference))?;
        Ok(())
    }

    fn render_grid(&self) -> Group {
        let mut group = Group::new().set("id", "grid");
        let span = self.config.grid_size as f32 * self.config.cell_px;
        let margin = self.config.margin_px;

        for i in 0..=self.config.grid_size {
            let offset = margin + i as f32 * self.config.cell_px;

            group = group.add(
                Line::new()
                    .set("x1", margin)
                    .set("y1", offset)
                    .set("x2", margin + span)
                    .set("y2", offset)
                    .set("stroke", colors::GRID)
                    .set("stroke-width", 0.5),
            );
            group = group.add(
                Line::new()
                    .set("x1", offset)
                    .set("y1", margin)
                    .set("x2", offset)
                    .set("y2", margin + span)
                    .set("stroke", colors::GRID)
                    .set("stroke-width", 0.5),
            );
        }

        group
    }

    fn render_cells(&self) -> Group {
        let mut group = Group::new().set("id", "cells");

        for &cell in &self.cells {
            let (px, py) = self.cell_corner(cell);
            group = group.add(
                Rectangle::new()
                    .set("x", px)
                    .set("y", py)
                    .set("width", self.config.cell_px)
                    .set("height", self.config.cell_px)
                    .set("fill", colors::CELL)
                    .set("stroke", "black")
                    .set("stroke-width", 0.5),
            );
        }

        group
    }

    fn render_reference(&self, segment: Segment) -> Group {
        let (x1, y1) = self.cell_center(segment.start);
        let (x2, y2) = self.cell_center(segment.end);

        Group::new()
            .set("id", "reference")
            .add(
                Line::new()
                    .set("x1", x1)
                    .set("y1", y1)
                    .set("x2", x2)
                    .set("y2", y2)
                    .set("stroke", colors::REFERENCE)
                    .set("stroke-width", 1.5),
            )
            .add(
                Circle::new()
                    .set("cx", x1)
                    .set("cy", y1)
                    .set("r", MARKER_RADIUS)
                    .set("fill", colors::START),
            )
            .add(
                Circle::new()
                    .set("cx", x2)
                    .set("cy", y2)
                    .set("r", MARKER_RADIUS)
                    .set("fill", colors::END),
            )
    }

    /// Top-left pixel corner of a cell. SVG y grows downward while the
    /// grid y grows upward, so rows are flipped.
    fn cell_corner(&self, cell: GridPoint) -> (f32, f32) {
        let px = self.config.margin_px + cell.x as f32 * self.config.cell_px;
        let py = self.config.height_px()
            - (self.config.margin_px + (cell.y as f32 + 1.0) * self.config.cell_px);
        (px, py)
    }

    fn cell_center(&self, cell: GridPoint) -> (f32, f32) {
        let (px, py) = self.cell_corner(cell);
        (px + self.config.cell_px / 2.0, py + self.config.cell_px / 2.0)
    }
}

impl CellSink for SvgCanvas {
    fn mark(&mut self, cell: GridPoint) {
        if self.config.contains(cell) {
            self.cells.push(cell);
        } else {
            debug!("Cell ({}, {}) outside grid, skipped", cell.x, cell.y);
            self.skipped += 1;
        }
    }
}
