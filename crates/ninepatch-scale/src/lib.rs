//! ninepatch-scale - Region-based scaling of nine-patch images
//!
//! A nine-patch source is a bitmap whose outer 1-pixel border marks, with
//! opaque black runs, which columns (top row) and rows (left column) of
//! the interior may stretch. Scaling keeps every unmarked band at its
//! source size and shares the remaining target pixels among the marked
//! bands.
//!
//! The pipeline, one module per stage:
//!
//! - [`markers`] - read stretch segments from the border
//! - [`partition`] - split each axis into fixed/stretch regions
//! - [`allocate`] - assign destination sizes to the regions
//! - [`composite`] - resample every region pair into the output
//! - [`ninepatch`] - parse once, render to any size
//!
//! # Example
//!
//! ```
//! use ninepatch_core::{PixelGrid, PixelGridMut, color};
//! use ninepatch_scale::{NinePatch, ScalingRequest, scale_nine_patch};
//!
//! let mut src = PixelGridMut::new(7, 7).unwrap();
//! src.set_pixel(3, 0, color::OPAQUE_BLACK).unwrap();
//! src.set_pixel(0, 3, color::OPAQUE_BLACK).unwrap();
//! let src: PixelGrid = src.into();
//!
//! let out = scale_nine_patch(&src, &ScalingRequest::pixels(40, 9)).unwrap();
//! assert_eq!((out.width(), out.height()), (40, 9));
//!
//! let patch = NinePatch::from_source(&src).unwrap();
//! let plan = patch.plan(40, 9);
//! assert_eq!(plan.columns.sizes, vec![2, 36, 2]);
//! ```

pub mod allocate;
pub mod composite;
mod error;
pub mod markers;
pub mod ninepatch;
pub mod partition;
pub mod request;
pub mod warning;

pub use allocate::{AxisAllocation, allocate_sizes};
pub use composite::{composite, stretch_blit};
pub use error::{ScaleError, ScaleResult};
pub use markers::{
    Axis, StretchMarkers, StretchSegment, is_marker_pixel, read_stretch_markers,
    read_stretch_segments,
};
pub use ninepatch::{
    BORDER_WIDTH, NinePatch, ScalePlan, ScaleReport, scale_nine_patch,
    scale_nine_patch_with_report,
};
pub use partition::{AxisRegion, RegionGrid, split_axis, split_regions};
pub use request::{LOGICAL_UNIT_PIXEL_FACTOR, ResolutionMapping, ScalingRequest};
pub use warning::StretchWarning;
