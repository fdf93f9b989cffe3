//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. 8-bit grayscale and
//! 24-bit RGB are decoded to opaque RGBA.
//!
//! **Note:** JPEG is lossy, so marker pixels in a JPEG source rarely stay
//! exactly `(0, 0, 0)`. Decoding is supported, writing is not: scaled
//! nine-patch output carries alpha, which JPEG cannot store.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use ninepatch_core::{PixelGrid, PixelGridMut, color};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// An opaque RGBA grid.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let samples = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let expected = width as usize * height as usize * samples;
    if pixels.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} bytes, expected {}",
            pixels.len(),
            expected
        )));
    }

    let mut grid = PixelGridMut::new(width, height)?;
    for (dst, px) in grid
        .data_mut()
        .iter_mut()
        .zip(pixels.chunks_exact(samples))
    {
        *dst = if samples == 1 {
            color::compose_rgb(px[0], px[0], px[0])
        } else {
            color::compose_rgb(px[0], px[1], px[2])
        };
    }

    log::trace!("decoded JPEG {}x{} ({:?})", width, height, info.pixel_format);
    Ok(grid.into())
}
