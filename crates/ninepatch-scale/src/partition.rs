//! Region partitioning
//!
//! Turns the stretch segments of one axis into an ordered, gap-free list
//! of fixed and stretch regions that covers the whole content length.

use crate::markers::{Axis, StretchMarkers, StretchSegment};

/// One slice of the content area along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisRegion {
    /// First content offset
    pub start: u32,
    /// Length in source pixels (always > 0)
    pub size: u32,
    /// Whether the region takes part in stretching
    pub stretch: bool,
}

impl AxisRegion {
    /// A region that keeps its source size.
    pub const fn fixed(start: u32, size: u32) -> Self {
        Self {
            start,
            size,
            stretch: false,
        }
    }

    /// A region that shares the stretch budget.
    pub const fn stretchable(start: u32, size: u32) -> Self {
        Self {
            start,
            size,
            stretch: true,
        }
    }

    /// One past the last content offset.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.size
    }
}

/// Full 2-D partition of the content area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionGrid {
    /// Vertical partition (top to bottom)
    pub rows: Vec<AxisRegion>,
    /// Horizontal partition (left to right)
    pub cols: Vec<AxisRegion>,
}

impl RegionGrid {
    /// Regions along one axis.
    pub fn for_axis(&self, axis: Axis) -> &[AxisRegion] {
        match axis {
            Axis::Horizontal => &self.cols,
            Axis::Vertical => &self.rows,
        }
    }
}

/// Sum of source sizes.
pub fn total_size(regions: &[AxisRegion]) -> u64 {
    regions.iter().map(|r| r.size as u64).sum()
}

/// Sum of source sizes of the fixed regions.
pub fn fixed_total(regions: &[AxisRegion]) -> u64 {
    regions
        .iter()
        .filter(|r| !r.stretch)
        .map(|r| r.size as u64)
        .sum()
}

/// Sum of source sizes of the stretch regions.
pub fn stretch_total(regions: &[AxisRegion]) -> u64 {
    regions
        .iter()
        .filter(|r| r.stretch)
        .map(|r| r.size as u64)
        .sum()
}

/// Partition `[0, length)` around the given stretch segments.
///
/// Segments must be ascending, non-overlapping and inside the axis, which
/// is what [`crate::read_stretch_segments`] produces. Gaps before, between
/// and after segments become fixed regions; an empty segment list yields a
/// single fixed region spanning the axis.
///
/// # Examples
///
/// ```
/// use ninepatch_scale::{AxisRegion, StretchSegment, split_axis};
///
/// let regions = split_axis(100, &[StretchSegment::new(40, 59)]);
/// assert_eq!(
///     regions,
///     vec![
///         AxisRegion::fixed(0, 40),
///         AxisRegion::stretchable(40, 20),
///         AxisRegion::fixed(60, 40),
///     ]
/// );
/// ```
pub fn split_axis(length: u32, segments: &[StretchSegment]) -> Vec<AxisRegion> {
    let mut regions = Vec::with_capacity(segments.len() * 2 + 1);
    let mut cursor = 0u32;

    for seg in segments {
        debug_assert!(seg.start >= cursor, "segments out of order: {segments:?}");
        debug_assert!(seg.end < length, "segment {seg:?} past axis length {length}");
        if seg.start > cursor {
            regions.push(AxisRegion::fixed(cursor, seg.start - cursor));
        }
        regions.push(AxisRegion::stretchable(seg.start, seg.pixel_count()));
        cursor = seg.end + 1;
    }
    if cursor < length {
        regions.push(AxisRegion::fixed(cursor, length - cursor));
    }

    regions
}

/// Partition both axes of a `content_width` x `content_height` area.
pub fn split_regions(content_width: u32, content_height: u32, markers: &StretchMarkers) -> RegionGrid {
    RegionGrid {
        rows: split_axis(content_height, &markers.vertical),
        cols: split_axis(content_width, &markers.horizontal),
    }
}
