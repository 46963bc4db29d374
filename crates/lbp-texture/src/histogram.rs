//! Code histograms
//!
//! Texture descriptors are usually compared through the histogram of their
//! codes rather than the code maps themselves.

use crate::uniform::NUM_UNIFORM_CLASSES;
use crate::{LbpError, LbpResult};
use lbp_core::GrayImage;

/// Number of bins in a uniform-class histogram (58 uniform + 1 non-uniform).
pub const ULBP_BINS: usize = NUM_UNIFORM_CLASSES as usize + 1;

/// Count occurrences of each of the 256 codes in an LBP map.
pub fn lbp_histogram(lbp: &GrayImage) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for &code in lbp.data() {
        hist[code as usize] += 1;
    }
    hist
}

/// Count occurrences of each uniform class in a ULBP map.
///
/// Bin 0 holds the non-uniform codes.
///
/// # Errors
///
/// Returns [`LbpError::InvalidArgument`] if the map holds a value above
/// 58, which means it is not a ULBP map.
pub fn ulbp_histogram(ulbp: &GrayImage) -> LbpResult<[u32; ULBP_BINS]> {
    let mut hist = [0u32; ULBP_BINS];
    for &class in ulbp.data() {
        let bin = hist.get_mut(class as usize).ok_or_else(|| {
            LbpError::InvalidArgument(format!(
                "value {class} is not a uniform class (expected 0..={NUM_UNIFORM_CLASSES})"
            ))
        })?;
        *bin += 1;
    }
    Ok(hist)
}
