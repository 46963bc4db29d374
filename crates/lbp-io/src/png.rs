//! PNG image format support

use crate::{IoError, IoResult};
use lbp_core::{GrayImage, Image};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palettes and sub-byte depths are expanded and 16-bit samples are
/// truncated to their high byte, so the result always has 8-bit samples:
///
/// - Grayscale -> 1 channel
/// - Grayscale + alpha -> 2 channels
/// - RGB and palette -> 3 channels
/// - RGBA and palette with transparency -> 4 channels
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let channels: u32 = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::DecodeError(
                "palette was not expanded".to_string(),
            ));
        }
    };
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = width as usize * channels as usize;
    let mut data = Vec::with_capacity(bytes_per_row * height as usize);
    for row in buf[..output_info.buffer_size()]
        .chunks(output_info.line_size)
        .take(height as usize)
    {
        data.extend_from_slice(&row[..bytes_per_row]);
    }

    Ok(Image::from_raw(width, height, channels, data)?)
}

/// Write a gray image as an 8-bit grayscale PNG
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for zero-sized images, which PNG cannot
/// represent.
pub fn write_png<W: Write>(gray: &GrayImage, writer: W) -> IoResult<()> {
    if gray.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode {}x{} image as PNG",
            gray.width(),
            gray.height()
        )));
    }

    let mut encoder = Encoder::new(writer, gray.width(), gray.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(gray.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
