//! Rectangle clipping operations for grids

use super::{PixelGrid, PixelGridMut};
use crate::Rect;
use crate::error::{Error, Result};

impl PixelGrid {
    /// Extract a rectangular sub-region from the image.
    ///
    /// Creates a new grid containing the specified rectangle. If the
    /// rectangle extends beyond the image bounds, it is clipped to the
    /// valid region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested width or height is 0
    /// - The rectangle origin lies outside the image bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use ninepatch_core::PixelGrid;
    ///
    /// let grid = PixelGrid::new(100, 80).unwrap();
    /// let clipped = grid.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);
    /// assert_eq!(clipped.height(), 20);
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<PixelGrid> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();

        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let mut dst = PixelGridMut::new(clip_w, clip_h)?;
        for dy in 0..clip_h {
            let src_row = &self.row_data(y + dy)[x as usize..(x + clip_w) as usize];
            dst.row_data_mut(dy).copy_from_slice(src_row);
        }

        Ok(dst.into())
    }

    /// Extract the region described by `rect`.
    pub fn clip_rect(&self, rect: &Rect) -> Result<PixelGrid> {
        self.clip_rectangle(rect.x, rect.y, rect.w, rect.h)
    }

    /// Remove `border` pixels from every side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if nothing would remain.
    pub fn remove_border(&self, border: u32) -> Result<PixelGrid> {
        let (w, h) = (self.width(), self.height());
        let inner_w = w.saturating_sub(2 * border);
        let inner_h = h.saturating_sub(2 * border);
        if inner_w == 0 || inner_h == 0 {
            return Err(Error::InvalidDimension {
                width: inner_w,
                height: inner_h,
            });
        }
        self.clip_rectangle(border, border, inner_w, inner_h)
    }
}
