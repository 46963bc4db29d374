//! lbp-texture - Local binary pattern texture descriptors
//!
//! This crate provides:
//!
//! - LBP encoding: one 8-bit code per interior pixel, from eight ring
//!   neighbors at a configurable radius
//! - Uniform LBP: the 256 codes collapsed into 58 uniform classes plus one
//!   non-uniform class through a fixed lookup table
//! - Histograms of LBP and ULBP maps
//!
//! # Example
//!
//! ```
//! use lbp_core::GrayImage;
//! use lbp_texture::{compute_lbp_gray, compute_ulbp_gray};
//!
//! let gray = GrayImage::from_fn(16, 16, |x, y| (x * y) as u8);
//! let lbp = compute_lbp_gray(&gray, 1).unwrap();
//! let ulbp = compute_ulbp_gray(&gray, 1).unwrap();
//! assert_eq!(lbp.dimensions(), (14, 14));
//! assert!(ulbp.data().iter().all(|&class| class <= 58));
//! ```

mod error;
pub mod histogram;
pub mod lbp;
pub mod uniform;

pub use error::{LbpError, LbpResult};

// Re-export commonly used functions
pub use histogram::{ULBP_BINS, lbp_histogram, ulbp_histogram};
pub use lbp::{RING_OFFSETS, compute_lbp, compute_lbp_gray, lbp_dimensions, local_binary_pattern};
pub use uniform::{
    NUM_UNIFORM_CLASSES, ULBP_LUT, compute_ulbp, compute_ulbp_gray, count_transitions,
    is_uniform, map_uniform, uniform_class,
};
