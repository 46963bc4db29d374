//! lbp-io - Image I/O for the LBP texture library
//!
//! Decodes image files into [`Image`] buffers for the grayscale normalizer
//! and writes gray code maps back out.
//!
//! | format | read | write | feature |
//! |--------|------|-------|---------|
//! | PNG    | gray, gray+alpha, RGB, RGBA, palette | gray | `png-format` |
//! | JPEG   | gray, RGB | - | `jpeg` |
//! | PNM    | P2, P3, P5, P6 | P5 | `pnm` |

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use lbp_core::ImageFormat;

use lbp_core::{GrayImage, Image};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is detected from the file contents, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let image = read_image_mem(&data)?;
    debug!(
        "read_image: {} -> {}x{} with {} channel(s)",
        path.display(),
        image.width(),
        image.height(),
        image.channels()
    );
    Ok(image)
}

/// Read an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not enabled",
            other
        ))),
    }
}

/// Write a gray image to a file path.
///
/// [`ImageFormat::Unknown`] picks the format from the path's extension.
pub fn write_image<P: AsRef<Path>>(gray: &GrayImage, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => ImageFormat::from_path(path),
        known => known,
    };
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(gray, &mut writer, format)?;
    writer.flush()?;
    debug!(
        "write_image: {}x{} -> {} ({:?})",
        gray.width(),
        gray.height(),
        path.display(),
        format
    );
    Ok(())
}

/// Encode a gray image into a writer.
pub fn write_image_to<W: Write>(gray: &GrayImage, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(gray, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(gray, writer),
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "writing {:?} is not supported",
                other
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(feature = "png-format", feature = "pnm"))]
    #[test]
    fn test_mem_roundtrip_all_writable_formats() {
        let gray = GrayImage::from_fn(6, 4, |x, y| (x * 40 + y * 3) as u8);
        for format in [ImageFormat::Png, ImageFormat::Pnm] {
            let mut buffer = Vec::new();
            write_image_to(&gray, &mut buffer, format).unwrap();
            let image = read_image_mem(&buffer).unwrap();
            assert_eq!(image.to_gray().unwrap(), gray, "{:?}", format);
        }
    }

    #[test]
    fn test_write_jpeg_unsupported() {
        let gray = GrayImage::new(2, 2);
        let mut buffer = Vec::new();
        assert!(matches!(
            write_image_to(&gray, &mut buffer, ImageFormat::Jpeg),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
