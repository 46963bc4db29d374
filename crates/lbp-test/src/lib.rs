//! lbp-test - Regression test framework for the LBP texture library
//!
//! Regression tests create a [`RegParams`], run a sequence of numbered
//! checks against it and assert on [`RegParams::cleanup`]. Two modes are
//! supported:
//!
//! - **Compare** (default): run the checks
//! - **Display**: run the checks and also write intermediate images to
//!   `tests/regout/` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use lbp_test::RegParams;
//!
//! let mut rp = RegParams::new("lbp");
//! rp.compare_values(58.0, classes as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//!
//! The suite has no image fixtures; inputs come from [`synthetic_gray`] and
//! [`synthetic_rgb`], which are deterministic for a given seed.

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use lbp_core::{GrayImage, Image};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // lbp-test is at crates/lbp-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// xorshift32 step
fn next_random(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Build a textured gray test image.
///
/// A smooth diagonal ramp with a checkerboard and pseudo-random noise on
/// top, so that the image holds flat runs, edges and fine texture.
pub fn synthetic_gray(width: u32, height: u32, seed: u32) -> GrayImage {
    let mut state = seed.max(1);
    GrayImage::from_fn(width, height, |x, y| {
        let ramp = (x + y) * 255 / (width + height).max(1);
        let checker = if ((x / 4) + (y / 4)) % 2 == 0 { 40 } else { 0 };
        let noise = next_random(&mut state) % 24;
        (ramp + checker + noise).min(255) as u8
    })
}

/// Build an RGB test image whose channels are shifted copies of
/// [`synthetic_gray`] patterns.
pub fn synthetic_rgb(width: u32, height: u32, seed: u32) -> Image {
    let planes = [
        synthetic_gray(width, height, seed),
        synthetic_gray(width, height, seed.wrapping_add(1)),
        synthetic_gray(width, height, seed.wrapping_add(2)),
    ];
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for i in 0..planes[0].data().len() {
        data.extend(planes.iter().map(|p| p.data()[i]));
    }
    // the buffer length is width * height * 3 by construction
    Image::from_raw(width, height, 3, data).expect("synthetic RGB buffer size")
}
