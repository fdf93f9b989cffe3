//! Region compositing
//!
//! Every (row, column) region pair of the source content is resampled into
//! its destination rectangle. Destination rectangles are laid out left to
//! right and top to bottom in allocation order.
//!
//! A region of signed size `s` placed at layout cursor `c` covers
//! `[c, c + s)` when `s > 0` and `[c + s, c)` when `s < 0`; a region of
//! size 0 covers nothing. Later regions paint over earlier ones where
//! spans overlap, and everything is clipped to the output grid.
//!
//! Resampling is nearest-neighbor at pixel centers: destination pixel `d`
//! of a region `dst` pixels long reads source pixel
//! `floor((d + 0.5) * src / dst)`. A region copied at its own size is
//! therefore an exact copy.

use crate::error::{ScaleError, ScaleResult};
use crate::partition::{AxisRegion, RegionGrid};
use ninepatch_core::{PixelGrid, PixelGridMut, Rect};

/// Source offsets sampled for each of `dst` destination pixels.
fn sample_offsets(src: u32, dst: u32) -> Vec<u32> {
    let (src, dst) = (src as u64, dst as u64);
    (0..dst).map(|d| ((2 * d + 1) * src / (2 * dst)) as u32).collect()
}

/// Destination span `(start, len)` of a region of signed `size` at `cursor`.
fn dest_span(cursor: i64, size: i64) -> Option<(i64, u32)> {
    let len = u32::try_from(size.unsigned_abs()).unwrap_or(u32::MAX);
    match size {
        0 => None,
        s if s > 0 => Some((cursor, len)),
        s => Some((cursor + s, len)),
    }
}

/// Placement of every region along one axis: start offset plus the
/// source offset sampled by each destination pixel.
fn axis_layout(regions: &[AxisRegion], sizes: &[i64]) -> Vec<Option<(i64, Vec<u32>)>> {
    let mut cursor = 0i64;
    regions
        .iter()
        .zip(sizes)
        .map(|(region, &size)| {
            let span = dest_span(cursor, size);
            cursor += size;
            span.map(|(start, len)| (start, sample_offsets(region.size, len)))
        })
        .collect()
}

/// Copy `src` pixels `(src_x + xs[dx], src_y + ys[dy])` to
/// `(dst_x + dx, dst_y + dy)`, clipped to `dst`.
fn blit_sampled(
    src: &PixelGrid,
    (src_x, src_y): (u32, u32),
    xs: &[u32],
    ys: &[u32],
    dst: &mut PixelGridMut,
    (dst_x, dst_y): (i64, i64),
) {
    let out_w = dst.width() as i64;
    let out_h = dst.height() as i64;
    let span_w = xs.len() as i64;

    // Visible column span of the destination rectangle.
    let x0 = (-dst_x).clamp(0, span_w) as usize;
    let x1 = (out_w - dst_x).clamp(0, span_w) as usize;
    if x0 >= x1 {
        return;
    }

    for (dy, &sy) in ys.iter().enumerate() {
        let ty = dst_y + dy as i64;
        if ty < 0 {
            continue;
        }
        if ty >= out_h {
            break;
        }
        let src_row = src.row_data(src_y + sy);
        let dst_row = dst.row_data_mut(ty as u32);
        for dx in x0..x1 {
            let tx = (dst_x + dx as i64) as usize;
            dst_row[tx] = src_row[(src_x + xs[dx]) as usize];
        }
    }
}

/// Resample `src_rect` of `src` into a `dst_w` x `dst_h` rectangle at
/// (`dst_x`, `dst_y`) of `dst`.
///
/// The destination rectangle may hang over any edge of `dst`; only the
/// part inside is written. An empty source or destination draws nothing.
pub fn stretch_blit(
    src: &PixelGrid,
    src_rect: Rect,
    dst: &mut PixelGridMut,
    dst_x: i64,
    dst_y: i64,
    dst_w: u32,
    dst_h: u32,
) {
    if src_rect.is_empty() || dst_w == 0 || dst_h == 0 {
        return;
    }
    debug_assert!(src_rect.right() <= src.width() && src_rect.bottom() <= src.height());

    let xs = sample_offsets(src_rect.w, dst_w);
    let ys = sample_offsets(src_rect.h, dst_h);
    blit_sampled(src, (src_rect.x, src_rect.y), &xs, &ys, dst, (dst_x, dst_y));
}

/// Build the output grid from the source content and per-axis sizes.
///
/// `col_sizes` and `row_sizes` give the signed destination size of every
/// region in `regions.cols` / `regions.rows`; see the module docs for how
/// negative sizes are placed. Pixels not covered by any region stay
/// transparent.
///
/// # Errors
///
/// Returns [`ScaleError::InvalidParameters`] if the size lists do not match
/// the region lists, and a core error for an empty output size.
pub fn composite(
    content: &PixelGrid,
    regions: &RegionGrid,
    col_sizes: &[i64],
    row_sizes: &[i64],
    out_width: u32,
    out_height: u32,
) -> ScaleResult<PixelGrid> {
    if col_sizes.len() != regions.cols.len() || row_sizes.len() != regions.rows.len() {
        return Err(ScaleError::InvalidParameters(format!(
            "size lists ({} cols, {} rows) do not match regions ({} cols, {} rows)",
            col_sizes.len(),
            row_sizes.len(),
            regions.cols.len(),
            regions.rows.len()
        )));
    }

    let mut out = PixelGridMut::new(out_width, out_height)?;
    let columns = axis_layout(&regions.cols, col_sizes);
    let rows = axis_layout(&regions.rows, row_sizes);

    for (row, row_layout) in regions.rows.iter().zip(&rows) {
        let Some((dest_y, ys)) = row_layout else {
            continue;
        };
        for (col, col_layout) in regions.cols.iter().zip(&columns) {
            if let Some((dest_x, xs)) = col_layout {
                blit_sampled(
                    content,
                    (col.start, row.start),
                    xs,
                    ys,
                    &mut out,
                    (*dest_x, *dest_y),
                );
            }
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(w: u32, h: u32) -> PixelGrid {
        let mut g = PixelGridMut::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                g.set_pixel(x, y, (y << 16) | x).unwrap();
            }
        }
        g.into()
    }

    #[test]
    fn test_sample_offsets() {
        assert_eq!(sample_offsets(4, 4), vec![0, 1, 2, 3]);
        assert_eq!(sample_offsets(2, 4), vec![0, 0, 1, 1]);
        assert_eq!(sample_offsets(4, 2), vec![1, 3]);
        assert_eq!(sample_offsets(1, 3), vec![0, 0, 0]);
        assert_eq!(sample_offsets(3, 0), Vec::<u32>::new());
    }

    #[test]
    fn test_identity_composite() {
        let src = numbered(5, 4);
        let regions = RegionGrid {
            rows: vec![AxisRegion::fixed(0, 4)],
            cols: vec![AxisRegion::fixed(0, 2), AxisRegion::stretchable(2, 3)],
        };
        let out = composite(&src, &regions, &[2, 3], &[4], 5, 4).unwrap();
        assert_eq!(out.data(), src.data());
    }

    #[test]
    fn test_stretch_middle_column() {
        let src = numbered(3, 1);
        let regions = RegionGrid {
            rows: vec![AxisRegion::fixed(0, 1)],
            cols: vec![
                AxisRegion::fixed(0, 1),
                AxisRegion::stretchable(1, 1),
                AxisRegion::fixed(2, 1),
            ],
        };
        let out = composite(&src, &regions, &[1, 4, 1], &[1], 6, 1).unwrap();
        assert_eq!(out.row_data(0), &[0, 1, 1, 1, 1, 2]);
    }

    #[test]
    fn test_zero_region_draws_nothing() {
        let src = numbered(3, 1);
        let regions = RegionGrid {
            rows: vec![AxisRegion::fixed(0, 1)],
            cols: vec![
                AxisRegion::fixed(0, 2),
                AxisRegion::stretchable(2, 1),
            ],
        };
        let out = composite(&src, &regions, &[2, 0], &[1], 2, 1).unwrap();
        assert_eq!(out.row_data(0), &[0, 1]);

        // Corrected last region ending exactly at the output edge: its span
        // [1, 2) lies past the edge.
        let out = composite(&src, &regions, &[2, -1], &[1], 1, 1).unwrap();
        assert_eq!(out.row_data(0), &[0]);
    }

    #[test]
    fn test_negative_column_paints_span_before_cursor() {
        let src = numbered(2, 1);
        let regions = RegionGrid {
            rows: vec![AxisRegion::fixed(0, 1)],
            cols: vec![AxisRegion::fixed(0, 1), AxisRegion::fixed(1, 1)],
        };
        // Second column at cursor 4 with size -2 covers [2, 4).
        let out = composite(&src, &regions, &[4, -2], &[1], 4, 1).unwrap();
        assert_eq!(out.row_data(0), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_negative_row_paints_span_before_cursor() {
        let src = numbered(1, 2);
        let regions = RegionGrid {
            rows: vec![AxisRegion::fixed(0, 1), AxisRegion::fixed(1, 1)],
            cols: vec![AxisRegion::fixed(0, 1)],
        };
        let out = composite(&src, &regions, &[1], &[3, -1], 1, 3).unwrap();
        let column: Vec<u32> = (0..3).map(|y| out.get_pixel(0, y).unwrap()).collect();
        assert_eq!(column, vec![0, 0, 1 << 16]);
    }

    #[test]
    fn test_dest_span() {
        assert_eq!(dest_span(5, 3), Some((5, 3)));
        assert_eq!(dest_span(5, 0), None);
        assert_eq!(dest_span(40, -30), Some((10, 30)));
    }

    #[test]
    fn test_mismatched_sizes_rejected() {
        let src = numbered(2, 2);
        let regions = RegionGrid {
            rows: vec![AxisRegion::fixed(0, 2)],
            cols: vec![AxisRegion::fixed(0, 2)],
        };
        assert!(matches!(
            composite(&src, &regions, &[2, 0], &[2], 2, 2),
            Err(ScaleError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_stretch_blit_clips_all_edges() {
        let src = numbered(2, 2);
        let mut dst = PixelGridMut::new(3, 3).unwrap();
        stretch_blit(&src, Rect::new(0, 0, 2, 2), &mut dst, -1, -1, 4, 4);
        let dst: PixelGrid = dst.into();
        // Visible part is destination pixels 1..4 of a 2x upscale.
        assert_eq!(dst.row_data(0), &[0, 1, 1]);
        assert_eq!(dst.row_data(1), &[1 << 16, (1 << 16) | 1, (1 << 16) | 1]);
    }
}
