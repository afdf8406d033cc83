//! The rasterization core: pure, integer-only, dependency-free.

mod line;

pub use line::{rasterize, LineRaster};
