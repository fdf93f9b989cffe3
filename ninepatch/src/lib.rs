//! ninepatch - Resolution-independent scaling of nine-patch images
//!
//! A nine-patch image carries a 1-pixel border whose opaque black marks
//! tell which bands of the interior may stretch. This crate scales such
//! images to any size while keeping corners, edges and other unmarked
//! bands at their source pixel size.
//!
//! # Overview
//!
//! - Image I/O (PNG read/write, JPEG read) in [`io`]
//! - Marker decoding, region allocation and compositing in [`scale`]
//! - Decode-then-scale helpers in this crate
//!
//! # Example
//!
//! ```
//! use ninepatch::{ImageFormat, PixelGrid, PixelGridMut, ScalingRequest, color, scale_encoded};
//!
//! let mut src = PixelGridMut::new(8, 8).unwrap();
//! src.set_pixel(3, 0, color::OPAQUE_BLACK).unwrap();
//! src.set_pixel(0, 3, color::OPAQUE_BLACK).unwrap();
//! let src: PixelGrid = src.into();
//! let png = ninepatch::io::write_image_mem(&src, ImageFormat::Png).unwrap();
//!
//! let out = scale_encoded(&png, &ScalingRequest::pixels(24, 12)).unwrap();
//! assert_eq!((out.width(), out.height()), (24, 12));
//! ```

use std::path::Path;
use thiserror::Error;

// Re-export core types (primary data structures used everywhere)
pub use ninepatch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ninepatch_io as io;
pub use ninepatch_scale as scale;

pub use ninepatch_scale::{
    NinePatch, ResolutionMapping, ScaleReport, ScalingRequest, StretchWarning, scale_nine_patch,
    scale_nine_patch_with_report,
};

/// Errors from the decode-then-scale entry points
#[derive(Debug, Error)]
pub enum NinePatchError {
    /// The source could not be read or decoded as an image
    #[error("image decode error: {0}")]
    Decode(#[source] io::IoError),

    /// The decoded source could not be scaled
    #[error(transparent)]
    Scale(#[from] scale::ScaleError),

    /// The scaled output could not be encoded
    #[error("image encode error: {0}")]
    Encode(#[source] io::IoError),
}

/// Result type for the facade entry points
pub type NinePatchResult<T> = std::result::Result<T, NinePatchError>;

/// Decode an in-memory image and scale it.
///
/// Decoding failures abort before any scaling work.
pub fn scale_encoded(data: &[u8], request: &ScalingRequest) -> NinePatchResult<PixelGrid> {
    let src = io::read_image_mem(data).map_err(NinePatchError::Decode)?;
    log::debug!("decoded {} bytes into {}x{} source", data.len(), src.width(), src.height());
    Ok(scale_nine_patch(&src, request)?)
}

/// Read an image file and scale it.
pub fn scale_file<P: AsRef<Path>>(path: P, request: &ScalingRequest) -> NinePatchResult<PixelGrid> {
    let src = io::read_image(path).map_err(NinePatchError::Decode)?;
    Ok(scale_nine_patch(&src, request)?)
}

/// Decode, scale and re-encode as PNG.
pub fn scale_to_png(data: &[u8], request: &ScalingRequest) -> NinePatchResult<Vec<u8>> {
    let out = scale_encoded(data, request)?;
    io::write_image_mem(&out, ImageFormat::Png).map_err(NinePatchError::Encode)
}
