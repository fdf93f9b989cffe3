//! Border marker decoding
//!
//! A nine-patch source carries a 1-pixel frame around its content. Runs of
//! opaque black pixels along the top row mark the columns that may
//! stretch; runs along the left column mark the stretchable rows. The
//! corner pixels belong to neither axis and are never scanned.

use ninepatch_core::PixelSource;

/// Axis of the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis; markers read from the top border row
    Horizontal,
    /// Y axis; markers read from the left border column
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Inclusive range `[start, end]` of content pixels covered by one marker run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StretchSegment {
    /// First content offset of the run
    pub start: u32,
    /// Last content offset of the run (inclusive)
    pub end: u32,
}

impl StretchSegment {
    /// Create a segment; `start` must not exceed `end`.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "segment start {start} > end {end}");
        Self { start, end }
    }

    /// Number of pixels covered; at least 1.
    #[inline]
    pub fn pixel_count(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// Stretch segments for both axes of one source image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StretchMarkers {
    /// Segments from the top row; offsets along the content width
    pub horizontal: Vec<StretchSegment>,
    /// Segments from the left column; offsets along the content height
    pub vertical: Vec<StretchSegment>,
}

impl StretchMarkers {
    /// Segments for one axis.
    pub fn for_axis(&self, axis: Axis) -> &[StretchSegment] {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

/// Whether an RGBA value is a stretch marker.
///
/// Only fully opaque, exactly black pixels count.
#[inline]
pub fn is_marker_pixel(r: u8, g: u8, b: u8, a: u8) -> bool {
    r == 0 && g == 0 && b == 0 && a == 255
}

/// Read the marker runs along one border of `src`.
///
/// Offsets are relative to the content area (border pixel 1 is offset 0).
/// Segments come back in ascending order and never touch: adjacent marker
/// pixels always merge into one run. A source with fewer than three pixels
/// on the scanned axis yields no segments.
pub fn read_stretch_segments<S: PixelSource + ?Sized>(src: &S, axis: Axis) -> Vec<StretchSegment> {
    let length = match axis {
        Axis::Horizontal => src.width(),
        Axis::Vertical => src.height(),
    }
    .saturating_sub(2);

    let mut segments = Vec::new();
    let mut run_start: Option<u32> = None;

    for i in 0..length {
        let (x, y) = match axis {
            Axis::Horizontal => (i + 1, 0),
            Axis::Vertical => (0, i + 1),
        };
        let marker = src
            .rgba_at(x, y)
            .is_some_and(|(r, g, b, a)| is_marker_pixel(r, g, b, a));

        match (marker, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                segments.push(StretchSegment::new(start, i - 1));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        segments.push(StretchSegment::new(start, length - 1));
    }

    log::trace!("{} markers: {:?}", axis, segments);
    segments
}

/// Read the marker runs of both axes.
pub fn read_stretch_markers<S: PixelSource + ?Sized>(src: &S) -> StretchMarkers {
    StretchMarkers {
        horizontal: read_stretch_segments(src, Axis::Horizontal),
        vertical: read_stretch_segments(src, Axis::Vertical),
    }
}
