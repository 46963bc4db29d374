//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Writing is not
//! supported: the code maps are written losslessly as PNG or PNM instead.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use lbp_core::Image;
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Returns
/// A 1-channel image for grayscale JPEGs or a 3-channel RGB image.
/// Grayscale frames with more than 8 bits of precision are scaled down to
/// their top 8 bits.
///
/// # Errors
/// CMYK JPEGs are rejected with [`IoError::UnsupportedFormat`].
pub fn read_jpeg<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut decoder = Decoder::new(&bytes[..]);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let image = match info.pixel_format {
        PixelFormat::L8 => Image::from_raw(width, height, 1, pixels)?,
        PixelFormat::L16 => {
            let precision = frame_precision(&bytes).unwrap_or(16);
            Image::from_raw(width, height, 1, narrow_samples(&pixels, precision))?
        }
        PixelFormat::RGB24 => Image::from_raw(width, height, 3, pixels)?,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };
    Ok(image)
}

/// Sample precision in bits, read from the first start-of-frame segment.
fn frame_precision(data: &[u8]) -> Option<u8> {
    let mut pos = 2;
    loop {
        if *data.get(pos)? != 0xFF {
            return None;
        }
        let marker = *data.get(pos + 1)?;
        match marker {
            // fill byte
            0xFF => pos += 1,
            // standalone markers
            0x01 | 0xD0..=0xD7 => pos += 2,
            0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => {
                return data.get(pos + 4).copied();
            }
            // start of scan or end of image before any frame header
            0xDA | 0xD9 => return None,
            _ => {
                let len = u16::from_be_bytes([*data.get(pos + 2)?, *data.get(pos + 3)?]);
                pos += 2 + len as usize;
            }
        }
    }
}

/// Reduce native-endian 16-bit samples of the given precision to 8 bits.
fn narrow_samples(pixels: &[u8], precision: u8) -> Vec<u8> {
    let shift = precision.clamp(8, 16) - 8;
    pixels
        .chunks_exact(2)
        .map(|px| (u16::from_ne_bytes([px[0], px[1]]) >> shift).min(255) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Baseline frames of flat 8x8 blocks: quantizer 1, DC-only coefficients.
    // Gray: left block 60, right block 200.
    const GRAY_16X8: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x08, 0x00, 0x10, 0x01, 0x01, 0x11, 0x00,
        0xFF, 0xC4, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02,
        0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0xFF, 0xC4, 0x00,
        0x15, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xFF, 0xDA, 0x00, 0x08,
        0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xA7, 0x7C, 0xB8, 0xC0, 0x7F, 0xFF,
        0xD9,
    ];

    // RGB, component ids 'R' 'G' 'B' so no YCbCr transform: (200, 100, 30).
    const RGB_8X8: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0xFF,
        0xC0, 0x00, 0x11, 0x08, 0x00, 0x08, 0x00, 0x08, 0x03, 0x52, 0x11, 0x00,
        0x47, 0x11, 0x00, 0x42, 0x11, 0x00, 0xFF, 0xC4, 0x00, 0x1F, 0x00, 0x00,
        0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
        0x09, 0x0A, 0x0B, 0xFF, 0xC4, 0x00, 0x15, 0x10, 0x00, 0x02, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0xF0, 0xFF, 0xDA, 0x00, 0x0C, 0x03, 0x52, 0x00, 0x47, 0x00, 0x42,
        0x00, 0x00, 0x3F, 0x00, 0xA9, 0x00, 0x81, 0xF2, 0x8E, 0xF3, 0xFF, 0xD9,
    ];

    fn assert_near(actual: u8, expected: u8) {
        assert!(
            actual.abs_diff(expected) <= 1,
            "sample {} not within 1 of {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_read_gray_jpeg() {
        let image = read_jpeg(GRAY_16X8).unwrap();
        assert_eq!(image.dimensions(), (16, 8));
        assert_eq!(image.channels(), 1);

        let gray = image.to_gray().unwrap();
        for y in 0..8 {
            assert_near(gray.pixel(0, y), 60);
            assert_near(gray.pixel(7, y), 60);
            assert_near(gray.pixel(8, y), 200);
            assert_near(gray.pixel(15, y), 200);
        }
    }

    #[test]
    fn test_read_rgb_jpeg() {
        let image = read_jpeg(RGB_8X8).unwrap();
        assert_eq!(image.dimensions(), (8, 8));
        assert_eq!(image.channels(), 3);

        let px = image.get(5, 3).unwrap();
        assert_near(px[0], 200);
        assert_near(px[1], 100);
        assert_near(px[2], 30);

        // 0.299 * 200 + 0.587 * 100 + 0.114 * 30 = 121.92
        let gray = image.to_gray().unwrap();
        assert_eq!(gray.dimensions(), (8, 8));
        assert!(gray.data().iter().all(|&v| v.abs_diff(122) <= 2));
    }

    #[test]
    fn test_frame_precision() {
        assert_eq!(frame_precision(GRAY_16X8), Some(8));
        assert_eq!(frame_precision(RGB_8X8), Some(8));

        // SOI, APP0 with a 2-byte payload, then a lossless 12-bit SOF3
        let data = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00, 0xFF, 0xC3, 0x00, 0x0B, 0x0C, 0x00,
            0x01,
        ];
        assert_eq!(frame_precision(&data), Some(12));
        assert_eq!(frame_precision(&[0xFF, 0xD8, 0xFF, 0xD9]), None);
        assert_eq!(frame_precision(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), None);
    }

    #[test]
    fn test_narrow_samples() {
        let mut pixels = Vec::new();
        for v in [0u16, 2048, 4095] {
            pixels.extend_from_slice(&v.to_ne_bytes());
        }
        assert_eq!(narrow_samples(&pixels, 12), vec![0, 128, 255]);

        let mut pixels = Vec::new();
        for v in [0x00FFu16, 0xAB00, 0xFFFF] {
            pixels.extend_from_slice(&v.to_ne_bytes());
        }
        assert_eq!(narrow_samples(&pixels, 16), vec![0x00, 0xAB, 0xFF]);
    }

    #[test]
    fn test_read_garbage_fails() {
        let data = [0xFFu8, 0xD8, 0xFF, 0x00, 0x01, 0x02];
        assert!(matches!(
            read_jpeg(&data[..]),
            Err(IoError::DecodeError(_))
        ));
    }
}
