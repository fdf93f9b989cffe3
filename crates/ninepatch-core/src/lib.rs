//! ninepatch-core - Basic data structures for nine-patch scaling
//!
//! This crate provides the pixel containers shared by the codec and
//! scaling crates:
//!
//! - [`PixelGrid`] / [`PixelGridMut`] - RGBA image container (immutable / mutable)
//! - [`PixelSource`] - Read-only RGBA accessor implemented by both grid types
//! - [`Rect`] - Rectangle regions in pixel coordinates
//! - [`ImageFormat`] - Container formats understood by `ninepatch-io`

pub mod error;
pub mod grid;
pub mod rect;

pub use error::{Error, Result};
pub use grid::{ImageFormat, PixelGrid, PixelGridMut, PixelSource};
pub use rect::Rect;

/// Color channel indices and helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Red channel (MSB, byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (LSB, byte 3)
    pub const ALPHA: usize = 3;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Fully transparent black; the initial value of every new grid.
    pub const TRANSPARENT: u32 = 0;

    /// Opaque black, the only color accepted as a stretch marker.
    pub const OPAQUE_BLACK: u32 = 0x0000_00ff;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Check whether a pixel is exactly `(0, 0, 0, 255)`.
    #[inline]
    pub fn is_opaque_black(pixel: u32) -> bool {
        pixel == OPAQUE_BLACK
    }

}
