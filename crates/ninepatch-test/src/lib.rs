//! ninepatch-test - Regression test framework for the nine-patch scaler
//!
//! This crate provides a regression test framework supporting three
//! modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! Test sources are synthesized with [`NinePatchBuilder`] rather than
//! loaded from fixture files.
//!
//! # Usage
//!
//! ```ignore
//! use ninepatch_test::{NinePatchBuilder, RegParams};
//!
//! let mut rp = RegParams::new("scale");
//! let src = NinePatchBuilder::new(10, 10).stretch_x(4, 5).build().unwrap();
//! rp.compare_values(12.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use ninepatch_core::{PixelGrid, PixelGridMut, color};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // ninepatch-test is at crates/ninepatch-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Load an image written earlier by a regression test
pub fn load_regout_image(name: &str) -> TestResult<PixelGrid> {
    let path = format!("{}/{}", regout_dir(), name);
    ninepatch_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Content color used by [`NinePatchBuilder`] at content offset (x, y).
///
/// Opaque and unique for offsets below 4096 on both axes, so any misplaced
/// pixel in a scaled output can be traced back to its source.
pub fn content_pixel(x: u32, y: u32) -> u32 {
    let hi = ((x >> 8) & 0xf) | (((y >> 8) & 0xf) << 4);
    color::compose_rgba(x as u8, y as u8, hi as u8, 255)
}

/// Builder for synthetic nine-patch sources
///
/// Offsets passed to `stretch_x` / `stretch_y` are content offsets; the
/// builder places the markers one pixel in, on the border.
#[derive(Debug, Clone)]
pub struct NinePatchBuilder {
    content_width: u32,
    content_height: u32,
    stretch_x: Vec<(u32, u32)>,
    stretch_y: Vec<(u32, u32)>,
    marker: u32,
    solid: Option<u32>,
}

impl NinePatchBuilder {
    /// Start a source with the given content size.
    pub fn new(content_width: u32, content_height: u32) -> Self {
        Self {
            content_width,
            content_height,
            stretch_x: Vec::new(),
            stretch_y: Vec::new(),
            marker: color::OPAQUE_BLACK,
            solid: None,
        }
    }

    /// Mark content columns `start..=end` as stretchable.
    pub fn stretch_x(mut self, start: u32, end: u32) -> Self {
        self.stretch_x.push((start, end));
        self
    }

    /// Mark content rows `start..=end` as stretchable.
    pub fn stretch_y(mut self, start: u32, end: u32) -> Self {
        self.stretch_y.push((start, end));
        self
    }

    /// Draw the border marks in `pixel` instead of opaque black.
    pub fn marker_color(mut self, pixel: u32) -> Self {
        self.marker = pixel;
        self
    }

    /// Fill the content with one color instead of [`content_pixel`].
    pub fn solid(mut self, pixel: u32) -> Self {
        self.solid = Some(pixel);
        self
    }

    /// Build the bordered source image.
    pub fn build(&self) -> TestResult<PixelGrid> {
        let mut g = PixelGridMut::new(self.content_width + 2, self.content_height + 2)?;
        for y in 0..self.content_height {
            for x in 0..self.content_width {
                let pixel = self.solid.unwrap_or_else(|| content_pixel(x, y));
                g.set_pixel(x + 1, y + 1, pixel)?;
            }
        }
        for &(start, end) in &self.stretch_x {
            for x in start..=end {
                g.set_pixel(x + 1, 0, self.marker)?;
            }
        }
        for &(start, end) in &self.stretch_y {
            for y in start..=end {
                g.set_pixel(0, y + 1, self.marker)?;
            }
        }
        Ok(g.into())
    }
}
