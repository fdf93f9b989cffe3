//! PNG image format support
//!
//! Every PNG flavor is normalized to 8-bit RGBA on read: palettes and
//! low bit depths are expanded by the decoder, 16-bit samples are
//! stripped, and a missing alpha channel becomes fully opaque. Writing
//! always produces 8-bit RGBA so the marker border survives a round trip.

use crate::{IoError, IoResult};
use ninepatch_core::{PixelGrid, PixelGridMut, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?} {:?}",
            color_type, bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    if data.len() < bytes_per_row * height as usize {
        return Err(IoError::InvalidData(format!(
            "PNG frame too short: {} bytes for {} rows of {}",
            data.len(),
            height,
            bytes_per_row
        )));
    }

    let mut grid = PixelGridMut::new(width, height)?;
    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..][..width as usize * samples];
        let out = grid.row_data_mut(y);
        for (dst, px) in out.iter_mut().zip(row.chunks_exact(samples)) {
            *dst = match samples {
                1 => color::compose_rgb(px[0], px[0], px[0]),
                2 => color::compose_rgba(px[0], px[0], px[0], px[1]),
                3 => color::compose_rgb(px[0], px[1], px[2]),
                _ => color::compose_rgba(px[0], px[1], px[2], px[3]),
            };
        }
    }

    log::trace!("decoded PNG {}x{} ({:?})", width, height, color_type);
    Ok(grid.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(grid: &PixelGrid, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&grid.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
