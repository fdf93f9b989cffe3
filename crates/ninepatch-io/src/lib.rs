//! ninepatch-io - Image I/O for the nine-patch scaler
//!
//! Decodes source images into [`PixelGrid`]s and encodes scaled output.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |---|---|---|---|
//! | PNG | yes | yes | `png-format` |
//! | JPEG | yes | no | `jpeg` |

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use ninepatch_core::ImageFormat;

use ninepatch_core::PixelGrid;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path, choosing the decoder by magic number.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    log::debug!("reading {} as {:?}", path.display(), format);
    let file = File::open(path)?;
    read_with_format(BufReader::new(file), format)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelGrid> {
    let format = detect_format_from_bytes(data)?;
    read_with_format(Cursor::new(data), format)
}

fn read_with_format<R>(reader: R, format: ImageFormat) -> IoResult<PixelGrid>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        other => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!(
                "cannot read {:?} images",
                other
            )))
        }
    }
}

/// Write an image to a file path.
pub fn write_image<P: AsRef<Path>>(
    grid: &PixelGrid,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_with_format(grid, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a new byte buffer.
pub fn write_image_mem(grid: &PixelGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_with_format(grid, &mut buffer, format)?;
    Ok(buffer)
}

fn write_with_format<W: Write>(grid: &PixelGrid, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        other => {
            let _ = (grid, writer);
            Err(IoError::UnsupportedFormat(format!(
                "cannot write {:?} images",
                other
            )))
        }
    }
}
