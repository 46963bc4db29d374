//! Grayscale conversion
//!
//! The normalizer accepts exactly two layouts: single-channel images are
//! copied, three-channel RGB images are reduced with luma weights. Anything
//! else is rejected with [`Error::UnsupportedChannelCount`].

use super::{GrayImage, Image};
use crate::error::{Error, Result};

/// Weights applied to the R, G and B samples when reducing to gray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayWeights {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl GrayWeights {
    /// ITU-R BT.601 luma weights.
    pub const BT601: GrayWeights = GrayWeights {
        red: 0.299,
        green: 0.587,
        blue: 0.114,
    };

    /// Build weights, normalizing them so they sum to 1.0.
    ///
    /// If all weights are 0.0, [`GrayWeights::BT601`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any weight is negative or not
    /// finite.
    pub fn new(red: f32, green: f32, blue: f32) -> Result<Self> {
        if [red, green, blue].iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::InvalidParameter(
                "weights must all be finite and >= 0.0".into(),
            ));
        }
        if red == 0.0 && green == 0.0 && blue == 0.0 {
            return Ok(Self::BT601);
        }
        let sum = red + green + blue;
        if (sum - 1.0).abs() > 0.0001 {
            Ok(GrayWeights {
                red: red / sum,
                green: green / sum,
                blue: blue / sum,
            })
        } else {
            Ok(GrayWeights { red, green, blue })
        }
    }

    #[inline]
    fn apply(&self, r: u8, g: u8, b: u8) -> u8 {
        let gray = self.red * r as f32 + self.green * g as f32 + self.blue * b as f32 + 0.5;
        gray.min(255.0) as u8
    }
}

impl Default for GrayWeights {
    fn default() -> Self {
        Self::BT601
    }
}

impl Image {
    /// Convert to a single-channel gray image using BT.601 luma weights.
    ///
    /// - **1 channel**: copied sample for sample
    /// - **3 channels**: `0.299 R + 0.587 G + 0.114 B`, rounded to nearest
    ///
    /// The result never shares storage with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannelCount`] for any other channel count.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbp_core::Image;
    ///
    /// let rgb = Image::from_raw(1, 1, 3, vec![255, 255, 255]).unwrap();
    /// assert_eq!(rgb.to_gray().unwrap().pixel(0, 0), 255);
    ///
    /// let rgba = Image::new(1, 1, 4).unwrap();
    /// assert!(rgba.to_gray().is_err());
    /// ```
    pub fn to_gray(&self) -> Result<GrayImage> {
        self.to_gray_with(GrayWeights::BT601)
    }

    /// Convert to gray with custom RGB weights.
    ///
    /// See [`GrayWeights::new`] for how the weights are normalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for negative weights and
    /// [`Error::UnsupportedChannelCount`] unless the image has 1 or 3
    /// channels.
    pub fn to_gray_weighted(&self, rwt: f32, gwt: f32, bwt: f32) -> Result<GrayImage> {
        self.to_gray_with(GrayWeights::new(rwt, gwt, bwt)?)
    }

    fn to_gray_with(&self, weights: GrayWeights) -> Result<GrayImage> {
        let (w, h) = self.dimensions();
        match self.channels() {
            1 => GrayImage::from_raw(w, h, self.data().to_vec()),
            3 => {
                log::trace!("converting {w}x{h} RGB image to gray with {weights:?}");
                let data = self
                    .data()
                    .chunks_exact(3)
                    .map(|px| weights.apply(px[0], px[1], px[2]))
                    .collect();
                GrayImage::from_raw(w, h, data)
            }
            n => Err(Error::UnsupportedChannelCount(n)),
        }
    }

    /// Drop the alpha channel.
    ///
    /// Gray+alpha (2 channels) becomes gray, RGBA (4 channels) becomes RGB.
    /// Images with any other channel count are returned as a copy.
    pub fn remove_alpha(&self) -> Image {
        let keep = match self.channels() {
            2 => 1,
            4 => 3,
            _ => return self.clone(),
        };
        let data = self
            .data()
            .chunks_exact(self.channels() as usize)
            .flat_map(|px| px[..keep].iter().copied())
            .collect();
        Image {
            width: self.width(),
            height: self.height(),
            channels: keep as u32,
            data,
        }
    }
}

impl GrayImage {
    /// Convert into a single-channel [`Image`].
    pub fn into_image(self) -> Image {
        Image::from(self)
    }
}
