//! LBP Core - Basic data structures for texture analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the LBP texture library:
//!
//! - [`Image`] - Interleaved multi-channel 8-bit image, as decoded from a file
//! - [`GrayImage`] - Single-channel 8-bit image; also the type of LBP and
//!   ULBP code maps
//! - [`GrayWeights`] - Luma weights for the grayscale normalizer
//! - [`ImageFormat`] - File formats understood by `lbp-io`

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{GrayImage, GrayWeights, Image, ImageFormat};
