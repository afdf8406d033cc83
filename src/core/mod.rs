//! Fundamental lattice types shared by the rasterizer and renderers.

mod point;

pub use point::{GridPoint, Segment};
