//! Rendering collaborators: the cell sink seam and an SVG grid canvas.
//!
//! Nothing here is required to rasterize; the core emits cells and these
//! types consume them.

mod canvas;
mod config;
mod sink;

pub use canvas::SvgCanvas;
pub use config::CanvasConfig;
pub use sink::{rasterize_into, CellSink};
