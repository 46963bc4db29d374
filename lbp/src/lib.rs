//! LBP - Local binary pattern texture descriptors for Rust
//!
//! # Overview
//!
//! This crate bundles the workspace crates behind one dependency:
//!
//! - Gray and multi-channel image buffers with a BT.601 grayscale
//!   normalizer (`lbp-core`)
//! - LBP and uniform LBP encoding plus code histograms (`lbp-texture`)
//! - PNG, JPEG and PNM image I/O (`lbp-io`)
//!
//! # Example
//!
//! ```
//! use lbp::{GrayImage, Image};
//! use lbp::texture::{compute_lbp, compute_ulbp};
//!
//! let gray = GrayImage::from_fn(32, 24, |x, y| ((x * 7) ^ (y * 13)) as u8);
//! let image = Image::from(gray);
//! let lbp = compute_lbp(&image, 2).unwrap();
//! let ulbp = compute_ulbp(&image, 2).unwrap();
//! assert_eq!(lbp.dimensions(), (28, 20));
//! assert_eq!(ulbp.dimensions(), lbp.dimensions());
//! ```

pub mod preview;

// Re-export core types (primary data structures used everywhere)
pub use lbp_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use lbp_io as io;
pub use lbp_texture as texture;
