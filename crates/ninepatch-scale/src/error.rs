//! Error types for ninepatch-scale

use thiserror::Error;

/// Errors that can occur while scaling a nine-patch image
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ninepatch_core::Error),

    /// Source too small to carry a 1-pixel marker border
    #[error("source {width}x{height} is too small for a nine-patch border")]
    InvalidInput { width: u32, height: u32 },

    /// Invalid request or resolution parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Requested target rounds to zero pixels on some axis
    #[error("target size rounds to an empty image: {width}x{height}")]
    EmptyTarget { width: f64, height: f64 },
}

/// Result type for scale operations
pub type ScaleResult<T> = Result<T, ScaleError>;
