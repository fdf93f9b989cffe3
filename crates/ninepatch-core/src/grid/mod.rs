//! PixelGrid - The RGBA image container
//!
//! `PixelGrid` is the only image type the scaler works with. Every pixel
//! is a packed 32-bit RGBA word, so there is no depth or colormap to
//! track: codecs convert whatever they decode into this layout.
//!
//! # Pixel layout
//!
//! - Row-major, one `u32` per pixel, no row padding
//! - Color order is RGBA (red in MSB), see [`crate::color`]
//!
//! # Ownership model
//!
//! `PixelGrid` uses `Arc` for efficient cloning (shared ownership), so a
//! decoded source can be read by several scale operations at once.
//! To modify pixel data, convert to `PixelGridMut` via
//! [`PixelGrid::try_into_mut`] or [`PixelGrid::to_mut`], then convert back
//! with `Into<PixelGrid>`.

mod access;
mod clip;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Image container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Read-only access to an RGBA pixel grid.
///
/// The marker reader and the scaler are generic over this trait so they
/// can run over any decoded source without copying it first.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// RGBA components at (x, y), or `None` outside the grid.
    fn rgba_at(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)>;
}

/// Internal grid data
#[derive(Debug, Clone)]
struct GridData {
    width: u32,
    height: u32,
    /// Packed RGBA pixels, `width * height` entries
    data: Vec<u32>,
}

impl GridData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0u32; len],
        })
    }
}

/// RGBA image container
///
/// # Examples
///
/// ```
/// use ninepatch_core::PixelGrid;
///
/// let grid = PixelGrid::new(64, 48).unwrap();
/// assert_eq!(grid.width(), 64);
/// assert_eq!(grid.height(), 48);
/// assert_eq!(grid.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct PixelGrid {
    inner: Arc<GridData>,
}

impl PixelGrid {
    /// Create a new grid with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelGrid {
            inner: Arc::new(GridData::zeroed(width, height)?),
        })
    }

    /// Build a grid from row-major 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `bytes` is not exactly `4 * w * h` long.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let mut inner = GridData::zeroed(width, height)?;
        let expected = inner.data.len() * 4;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        for (word, px) in inner.data.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = crate::color::compose_rgba(px[0], px[1], px[2], px[3]);
        }
        Ok(PixelGrid {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of references to the pixel data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get one row of packed pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Check whether two grids have the same dimensions.
    pub fn sizes_equal(&self, other: &PixelGrid) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Export as row-major 8-bit RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.data.len() * 4);
        for &pixel in &self.inner.data {
            out.extend_from_slice(&pixel.to_be_bytes());
        }
        out
    }

    /// Create a deep copy of this grid.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        PixelGrid {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelGridMut { inner: data }),
            Err(arc) => Err(PixelGrid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    pub fn to_mut(&self) -> PixelGridMut {
        PixelGridMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable pixel grid
///
/// Allows modification of image data. Convert back to an immutable
/// [`PixelGrid`] using `Into<PixelGrid>`.
#[derive(Debug)]
pub struct PixelGridMut {
    inner: GridData,
}

impl PixelGridMut {
    /// Create a new mutable grid with every pixel transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelGridMut {
            inner: GridData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get one row of packed pixels for writing.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `val`.
    pub fn fill(&mut self, val: u32) {
        self.inner.data.fill(val);
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.fill(crate::color::TRANSPARENT);
    }
}

impl From<PixelGridMut> for PixelGrid {
    fn from(grid_mut: PixelGridMut) -> Self {
        PixelGrid {
            inner: Arc::new(grid_mut.inner),
        }
    }
}

impl PixelSource for PixelGrid {
    fn width(&self) -> u32 {
        self.inner.width
    }

    fn height(&self) -> u32 {
        self.inner.height
    }

    fn rgba_at(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_rgba(x, y)
    }
}

impl PixelSource for PixelGridMut {
    fn width(&self) -> u32 {
        self.inner.width
    }

    fn height(&self) -> u32 {
        self.inner.height
    }

    fn rgba_at(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(crate::color::extract_rgba)
    }
}
