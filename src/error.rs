//! Error types for rekha-raster.
//!
//! Rasterization over integer endpoints is total and cannot fail; errors
//! only arise at the float boundary (world-space inputs) and when writing
//! rendered output.

/// Result type alias
pub type Result<T> = std::result::Result<T, RasterError>;

/// Rekha-raster error types
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// A world-space coordinate was NaN or infinite
    #[error("Non-finite {axis} coordinate: {value}")]
    NonFiniteCoordinate {
        /// Which axis carried the bad value
        axis: &'static str,
        /// The offending value
        value: f32,
    },

    /// Cell resolution must be finite and strictly positive
    #[error("Invalid resolution: {value}")]
    InvalidResolution {
        /// The offending value
        value: f32,
    },

    /// I/O error while writing rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
