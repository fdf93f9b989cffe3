//! Nine-patch parsing and rendering
//!
//! [`NinePatch`] holds a source image split into its content and its
//! stretch markers. Parsing happens once; rendering to any number of
//! target sizes reuses it. [`scale_nine_patch`] is the one-shot form that
//! also converts a [`ScalingRequest`] into pixel dimensions.

use crate::allocate::{AxisAllocation, allocate_sizes};
use crate::composite::composite;
use crate::error::{ScaleError, ScaleResult};
use crate::markers::{Axis, StretchMarkers, read_stretch_markers};
use crate::partition::{RegionGrid, split_regions};
use crate::request::ScalingRequest;
use crate::warning::{StretchWarning, check_axis};
use ninepatch_core::{PixelGrid, PixelGridMut, PixelSource, color};

/// Width of the marker frame around the content.
pub const BORDER_WIDTH: u32 = 1;

/// Per-axis allocation for one target size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalePlan {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Allocation of `RegionGrid::cols`
    pub columns: AxisAllocation,
    /// Allocation of `RegionGrid::rows`
    pub rows: AxisAllocation,
    /// Degenerate situations found on either axis
    pub warnings: Vec<StretchWarning>,
}

/// Output of a scale together with how it was laid out
#[derive(Debug, Clone)]
pub struct ScaleReport {
    /// The scaled image
    pub output: PixelGrid,
    /// Source partition that was scaled
    pub regions: RegionGrid,
    /// Destination sizes and warnings
    pub plan: ScalePlan,
}

/// A parsed nine-patch source
#[derive(Debug, Clone)]
pub struct NinePatch {
    content: PixelGrid,
    markers: StretchMarkers,
    regions: RegionGrid,
}

impl NinePatch {
    /// Parse a nine-patch source: read its markers and strip the border.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidInput`] if either dimension is 2 or
    /// less, leaving no content inside the border.
    pub fn from_source<S: PixelSource + ?Sized>(src: &S) -> ScaleResult<Self> {
        let (width, height) = (src.width(), src.height());
        if width <= 2 * BORDER_WIDTH || height <= 2 * BORDER_WIDTH {
            return Err(ScaleError::InvalidInput { width, height });
        }

        let content = strip_border(src)?;
        let markers = read_stretch_markers(src);
        let regions = split_regions(content.width(), content.height(), &markers);
        log::debug!(
            "parsed nine-patch {}x{}: {} column regions, {} row regions",
            width,
            height,
            regions.cols.len(),
            regions.rows.len()
        );

        Ok(Self {
            content,
            markers,
            regions,
        })
    }

    /// Source image without its marker border.
    pub fn content(&self) -> &PixelGrid {
        &self.content
    }

    /// Stretch segments read from the border.
    pub fn markers(&self) -> &StretchMarkers {
        &self.markers
    }

    /// Fixed/stretch partition of the content.
    pub fn regions(&self) -> &RegionGrid {
        &self.regions
    }

    /// Allocate destination sizes for a `width` x `height` output.
    pub fn plan(&self, width: u32, height: u32) -> ScalePlan {
        let columns = allocate_sizes(&self.regions.cols, width);
        let rows = allocate_sizes(&self.regions.rows, height);

        let mut warnings = check_axis(Axis::Horizontal, &self.regions.cols, &columns, width);
        warnings.extend(check_axis(Axis::Vertical, &self.regions.rows, &rows, height));

        ScalePlan {
            width,
            height,
            columns,
            rows,
            warnings,
        }
    }

    /// Render at exactly `width` x `height` pixels.
    pub fn render(&self, width: u32, height: u32) -> ScaleResult<PixelGrid> {
        Ok(self.render_with_report(width, height)?.output)
    }

    /// Render at exactly `width` x `height` pixels and report the layout.
    ///
    /// # Errors
    ///
    /// Returns a core error if either dimension is 0.
    pub fn render_with_report(&self, width: u32, height: u32) -> ScaleResult<ScaleReport> {
        let plan = self.plan(width, height);
        let output = composite(
            &self.content,
            &self.regions,
            &plan.columns.sizes,
            &plan.rows.sizes,
            width,
            height,
        )?;
        log::debug!(
            "rendered {}x{} content to {}x{} ({} warnings)",
            self.content.width(),
            self.content.height(),
            width,
            height,
            plan.warnings.len()
        );
        Ok(ScaleReport {
            output,
            regions: self.regions.clone(),
            plan,
        })
    }
}

/// Copy the content area of `src` into its own grid.
fn strip_border<S: PixelSource + ?Sized>(src: &S) -> ScaleResult<PixelGrid> {
    let w = src.width() - 2 * BORDER_WIDTH;
    let h = src.height() - 2 * BORDER_WIDTH;
    let mut content = PixelGridMut::new(w, h)?;
    for y in 0..h {
        let row = content.row_data_mut(y);
        for (x, dst) in row.iter_mut().enumerate() {
            let (r, g, b, a) = src
                .rgba_at(x as u32 + BORDER_WIDTH, y + BORDER_WIDTH)
                .ok_or(ninepatch_core::Error::IndexOutOfBounds {
                    index: x + BORDER_WIDTH as usize,
                    len: src.width() as usize,
                })?;
            *dst = color::compose_rgba(r, g, b, a);
        }
    }
    Ok(content.into())
}

/// Scale a nine-patch source according to `request`.
///
/// Steps: strip the border, read markers, convert the request to pixel
/// dimensions, partition and allocate both axes, then composite.
///
/// # Errors
///
/// - [`ScaleError::InvalidInput`] for a source of 2 pixels or less on an axis
/// - [`ScaleError::InvalidParameters`] / [`ScaleError::EmptyTarget`] for a
///   request that does not yield a positive pixel size
///
/// # Examples
///
/// ```
/// use ninepatch_core::PixelGrid;
/// use ninepatch_scale::{ScalingRequest, scale_nine_patch};
///
/// let src = PixelGrid::new(12, 12).unwrap();
/// let out = scale_nine_patch(&src, &ScalingRequest::pixels(30, 20)).unwrap();
/// assert_eq!((out.width(), out.height()), (30, 20));
/// ```
pub fn scale_nine_patch<S: PixelSource + ?Sized>(
    src: &S,
    request: &ScalingRequest,
) -> ScaleResult<PixelGrid> {
    Ok(scale_nine_patch_with_report(src, request)?.output)
}

/// Like [`scale_nine_patch`], also returning the layout and warnings.
pub fn scale_nine_patch_with_report<S: PixelSource + ?Sized>(
    src: &S,
    request: &ScalingRequest,
) -> ScaleResult<ScaleReport> {
    let patch = NinePatch::from_source(src)?;
    let (width, height) = request.target_dimensions()?;
    patch.render_with_report(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::StretchSegment;
    use crate::partition::AxisRegion;

    /// 12x12 source: a marker at content offsets 4..=5 on both axes and a
    /// distinct color per content pixel.
    fn sample_source() -> PixelGrid {
        let mut g = PixelGridMut::new(12, 12).unwrap();
        for i in [5, 6] {
            g.set_pixel(i, 0, color::OPAQUE_BLACK).unwrap();
            g.set_pixel(0, i, color::OPAQUE_BLACK).unwrap();
        }
        for y in 1..11 {
            for x in 1..11 {
                g.set_rgba(x, y, x as u8 * 10, y as u8 * 10, 7, 255).unwrap();
            }
        }
        g.into()
    }

    #[test]
    fn test_from_source() {
        let patch = NinePatch::from_source(&sample_source()).unwrap();
        assert_eq!((patch.content().width(), patch.content().height()), (10, 10));
        assert_eq!(patch.markers().horizontal, vec![StretchSegment::new(4, 5)]);
        assert_eq!(
            patch.regions().cols,
            vec![
                AxisRegion::fixed(0, 4),
                AxisRegion::stretchable(4, 2),
                AxisRegion::fixed(6, 4),
            ]
        );
        assert_eq!(patch.content().get_rgba(0, 0), Some((10, 10, 7, 255)));
    }

    #[test]
    fn test_too_small_source() {
        for (w, h) in [(2, 2), (2, 10), (10, 1)] {
            let g = PixelGrid::new(w, h).unwrap();
            assert!(matches!(
                NinePatch::from_source(&g),
                Err(ScaleError::InvalidInput { .. })
            ));
        }
        assert!(NinePatch::from_source(&PixelGrid::new(3, 3).unwrap()).is_ok());
    }

    #[test]
    fn test_render_identity() {
        let src = sample_source();
        let patch = NinePatch::from_source(&src).unwrap();
        let out = patch.render(10, 10).unwrap();
        assert_eq!(out.data(), patch.content().data());
        assert!(patch.plan(10, 10).warnings.is_empty());
    }

    #[test]
    fn test_render_grows_only_stretch_band() {
        let patch = NinePatch::from_source(&sample_source()).unwrap();
        let report = patch.render_with_report(16, 10).unwrap();
        assert_eq!(report.plan.columns.sizes, vec![4, 8, 4]);
        let out = &report.output;
        // Fixed corners are untouched copies.
        assert_eq!(out.get_rgba(0, 0), Some((10, 10, 7, 255)));
        assert_eq!(out.get_rgba(15, 9), Some((100, 100, 7, 255)));
        // Stretch band repeats source columns 4 and 5.
        for x in 4..8 {
            assert_eq!(out.get_rgba(x, 0), Some((50, 10, 7, 255)));
        }
        for x in 8..12 {
            assert_eq!(out.get_rgba(x, 0), Some((60, 10, 7, 255)));
        }
        assert_eq!(out.get_rgba(12, 0), Some((70, 10, 7, 255)));
    }

    #[test]
    fn test_scale_with_request() {
        let src = sample_source();
        let report = scale_nine_patch_with_report(&src, &ScalingRequest::pixels(20, 14)).unwrap();
        assert_eq!((report.output.width(), report.output.height()), (20, 14));
        assert_eq!(report.plan.columns.total(), 20);
        assert_eq!(report.plan.rows.total(), 14);
        assert!(report.plan.warnings.is_empty());
    }

    #[test]
    fn test_invalid_input_reported_before_request() {
        let g = PixelGrid::new(2, 2).unwrap();
        let req = ScalingRequest::pixels(0, 0);
        assert!(matches!(
            scale_nine_patch(&g, &req),
            Err(ScaleError::InvalidInput { width: 2, height: 2 })
        ));
    }
}
