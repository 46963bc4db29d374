//! Uniform local binary patterns
//!
//! A pattern is *uniform* when its eight bits, read as a circular string,
//! contain at most two 0/1 transitions. There are 58 such patterns. The
//! mapper replaces every uniform code with its class index in `1..=58` and
//! every other code with 0, collapsing 256 codes into 59 classes.
//!
//! Class indices are assigned to uniform codes in increasing code order, so
//! `0x00` is class 1 and `0xFF` is class 58.

use crate::LbpResult;
use crate::lbp::{compute_lbp, compute_lbp_gray};
use lbp_core::{GrayImage, Image};
use log::debug;

/// Number of uniform pattern classes (excluding the non-uniform class 0).
pub const NUM_UNIFORM_CLASSES: u8 = 58;

/// Uniform class of every 8-bit code, indexed by code.
///
/// Non-uniform codes map to 0.
#[rustfmt::skip]
pub const ULBP_LUT: [u8; 256] = [
     1,  2,  3,  4,  5,  0,  6,  7,  8,  0,  0,  0,  9,  0, 10, 11, //   0.. 15
    12,  0,  0,  0,  0,  0,  0,  0, 13,  0,  0,  0, 14,  0, 15, 16, //  16.. 31
    17,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, //  32.. 47
    18,  0,  0,  0,  0,  0,  0,  0, 19,  0,  0,  0, 20,  0, 21, 22, //  48.. 63
    23,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, //  64.. 79
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, //  80.. 95
    24,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, //  96..111
    25,  0,  0,  0,  0,  0,  0,  0, 26,  0,  0,  0, 27,  0, 28, 29, // 112..127
    30, 31,  0, 32,  0,  0,  0, 33,  0,  0,  0,  0,  0,  0,  0, 34, // 128..143
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, 35, // 144..159
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 160..175
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, 36, // 176..191
    37, 38,  0, 39,  0,  0,  0, 40,  0,  0,  0,  0,  0,  0,  0, 41, // 192..207
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, 42, // 208..223
    43, 44,  0, 45,  0,  0,  0, 46,  0,  0,  0,  0,  0,  0,  0, 47, // 224..239
    48, 49,  0, 50,  0,  0,  0, 51, 52, 53,  0, 54, 55, 56, 57, 58, // 240..255
];

/// Number of bit transitions in a code, counting the first and last bits as
/// adjacent.
///
/// # Examples
///
/// ```
/// use lbp_texture::count_transitions;
///
/// assert_eq!(count_transitions(0b1111_0000), 2);
/// assert_eq!(count_transitions(0b0000_0000), 0);
/// assert_eq!(count_transitions(0b1001_1001), 4);
/// assert_eq!(count_transitions(0b1011_0010), 6);
/// ```
#[inline]
pub fn count_transitions(code: u8) -> u32 {
    (code ^ code.rotate_right(1)).count_ones()
}

/// True if `code` has at most two circular transitions.
#[inline]
pub fn is_uniform(code: u8) -> bool {
    count_transitions(code) <= 2
}

/// Uniform class of a single code: `1..=58` for uniform codes, 0 otherwise.
///
/// # Examples
///
/// ```
/// use lbp_texture::uniform_class;
///
/// assert_eq!(uniform_class(0x00), 1);
/// assert_eq!(uniform_class(0xFF), 58);
/// assert_eq!(uniform_class(0b0101_0101), 0);
/// ```
#[inline]
pub fn uniform_class(code: u8) -> u8 {
    ULBP_LUT[code as usize]
}

/// Map every code of an LBP map to its uniform class.
///
/// The result is newly allocated and has the same dimensions as `lbp`.
pub fn map_uniform(lbp: &GrayImage) -> GrayImage {
    let mut ulbp = lbp.clone();
    for code in ulbp.data_mut() {
        *code = ULBP_LUT[*code as usize];
    }
    ulbp
}

/// Compute the uniform LBP class map of a gray image.
///
/// Equivalent to [`map_uniform`] applied to [`compute_lbp_gray`].
///
/// # Errors
///
/// Returns [`crate::LbpError::InvalidRadius`] if `radius` is 0.
pub fn compute_ulbp_gray(gray: &GrayImage, radius: u32) -> LbpResult<GrayImage> {
    let lbp = compute_lbp_gray(gray, radius)?;
    let ulbp = map_uniform(&lbp);
    debug!(
        "compute_ulbp: {} of {} codes uniform",
        ulbp.count_nonzero(),
        ulbp.data().len()
    );
    Ok(ulbp)
}

/// Compute the uniform LBP class map of a 1- or 3-channel image.
///
/// # Errors
///
/// Returns [`crate::LbpError::InvalidInput`] if the image has neither 1
/// nor 3 channels and [`crate::LbpError::InvalidRadius`] if `radius` is 0.
pub fn compute_ulbp(image: &Image, radius: u32) -> LbpResult<GrayImage> {
    let lbp = compute_lbp(image, radius)?;
    Ok(map_uniform(&lbp))
}
