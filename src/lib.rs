//! # Rekha-Raster: Integer Line Rasterization for 2D Grids
//!
//! Rasterizes a straight segment between two lattice points into the
//! ordered run of grid cells that best approximates it, using only
//! integer arithmetic. This is the primitive underlying raster graphics,
//! CAD tooling, occupancy-grid ray tracing, and grid-based pathfinding
//! visualizers.
//!
//! ## Quick Start
//!
//! ```rust
//! use rekha_raster::{rasterize, GridPoint};
//!
//! let cells = rasterize(GridPoint::new(0, 0), GridPoint::new(15, 2));
//! assert_eq!(cells.first(), Some(&GridPoint::new(0, 0)));
//! assert_eq!(cells.last(), Some(&GridPoint::new(15, 2)));
//! assert_eq!(cells.len(), 16); // max(|dx|, |dy|) + 1
//! ```
//!
//! ## Guarantees
//!
//! - Endpoints included: the run starts at `start` and ends at `end`.
//! - 8-connected: consecutive cells advance exactly one unit along the
//!   dominant axis and at most one along the other.
//! - Deterministic: the run is the unique path of an exact integer
//!   midpoint test - no floating point, no division, no rounding - and
//!   every `i32` endpoint pair is handled without overflow.
//! - Symmetric: negating either axis delta mirrors the run exactly, so
//!   all eight octants behave alike.
//!
//! ## Architecture
//!
//! - [`core`]: lattice types ([`GridPoint`], [`Segment`])
//! - [`raster`]: the pure rasterization core ([`LineRaster`], [`rasterize`])
//! - [`render`]: consumers - the [`CellSink`] capability, a serde-friendly
//!   [`CanvasConfig`], and an [`SvgCanvas`] for visual verification
//!
//! The core is pure and dependency-free; rendering is strictly a consumer
//! of emitted cells through the [`CellSink`] seam. Multiple concurrent
//! rasterizations are trivially safe - there is no shared state.

pub mod core;
pub mod error;
pub mod raster;
pub mod render;

pub use crate::core::{GridPoint, Segment};
pub use error::{RasterError, Result};
pub use raster::{rasterize, LineRaster};
pub use render::{rasterize_into, CanvasConfig, CellSink, SvgCanvas};
