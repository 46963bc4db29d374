//! Image containers
//!
//! Two containers are provided:
//!
//! - [`Image`] holds interleaved 8-bit samples with an arbitrary channel
//!   count. It is what decoders produce and what the grayscale normalizer
//!   consumes.
//! - [`GrayImage`] holds a single plane of 8-bit samples. Every texture
//!   operation reads and writes this type.
//!
//! # Memory layout
//!
//! Samples are stored row-major in a flat `Vec<u8>` with no row padding:
//! sample `c` of pixel `(x, y)` lives at `(y * width + x) * channels + c`.
//!
//! # Ownership model
//!
//! Both types own their buffers outright. Cloning copies the samples, so an
//! output can never alias the image it was computed from.

mod access;
pub mod compose;
pub mod convert;

pub use convert::GrayWeights;

use crate::error::{Error, Result};
use std::path::Path;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// PNM format (PGM / PPM)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }

    /// Guess the format from a file extension.
    ///
    /// Returns [`ImageFormat::Unknown`] when the extension is missing or
    /// not recognized.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Self::Png,
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            Some("pnm") | Some("pgm") | Some("ppm") => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}

/// Number of samples needed for the given geometry, `None` on overflow.
#[inline]
fn sample_count(width: u32, height: u32, channels: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(channels as usize)
}

fn checked_sample_count(width: u32, height: u32, channels: u32) -> Result<usize> {
    sample_count(width, height, channels).ok_or(Error::InvalidDimension { width, height })
}

/// Buffer length for the infallible gray constructors. An overflowing
/// geometry saturates, which makes the allocation itself fail.
#[inline]
fn gray_len(width: u32, height: u32) -> usize {
    sample_count(width, height, 1).unwrap_or(usize::MAX)
}

/// Single-channel 8-bit image
///
/// Used both for grayscale input and for the code maps produced by the
/// texture operators. A zero-sized `GrayImage` is valid and represents an
/// empty map.
///
/// # Examples
///
/// ```
/// use lbp_core::GrayImage;
///
/// let gray = GrayImage::from_fn(4, 3, |x, y| (x + y) as u8);
/// assert_eq!(gray.dimensions(), (4, 3));
/// assert_eq!(gray.pixel(3, 2), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrayImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image with every sample set to zero.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` samples cannot be allocated, which on
    /// 64-bit targets only happens when memory runs out.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a new image with every sample set to `value`.
    ///
    /// Panics under the same condition as [`GrayImage::new`].
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        GrayImage {
            width,
            height,
            data: vec![value; gray_len(width, height)],
        }
    }

    /// Create a zero-sized image.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows and
    /// [`Error::BufferSizeMismatch`] if `data.len()` is not `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = checked_sample_count(width, height, 1)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(GrayImage {
            width,
            height,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> u8,
    {
        let mut data = Vec::with_capacity(gray_len(width, height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        GrayImage {
            width,
            height,
            data,
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get raw access to the row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the row-major samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its sample buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &GrayImage) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Count pixels with a non-zero value.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

/// Multi-channel 8-bit image with interleaved samples
///
/// The channel count is not restricted at construction so that decoders can
/// hand over whatever they read; operations that need a particular layout
/// validate it themselves. Three-channel images are interpreted as RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
}

impl Image {
    /// Create a new image with every sample set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `channels` is 0 and
    /// [`Error::InvalidDimension`] if the sample count overflows `usize`.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidParameter(
                "image must have at least one channel".into(),
            ));
        }
        let len = checked_sample_count(width, height, channels)?;
        Ok(Image {
            width,
            height,
            channels,
            data: vec![0; len],
        })
    }

    /// Wrap an existing interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `channels` is 0,
    /// [`Error::InvalidDimension`] if the sample count overflows `usize` and
    /// [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidParameter(
                "image must have at least one channel".into(),
            ));
        }
        let expected = checked_sample_count(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Image {
            width,
            height,
            channels,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the number of interleaved samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and return its sample buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl From<GrayImage> for Image {
    fn from(gray: GrayImage) -> Self {
        Image {
            width: gray.width,
            height: gray.height,
            channels: 1,
            data: gray.data,
        }
    }
}
