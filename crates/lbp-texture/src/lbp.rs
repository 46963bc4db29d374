//! Local binary pattern encoding
//!
//! Every pixel with a full `radius` margin is compared against the eight
//! samples on the square ring at Chebyshev distance `radius`:
//!
//! <pre>
//! 0 . 1 . 2
//! .       .
//! 7   p   3
//! .       .
//! 6 . 5 . 4
//! </pre>
//!
//! Neighbor `i` sets bit `7 - i` of the code when it is strictly brighter
//! than the center `p`, so the top-left neighbor is the most significant
//! bit and the middle-left neighbor the least significant one. Ties give 0.
//!
//! Border pixels are not padded: the code map is `2 * radius` smaller than
//! the input in both directions.

use crate::{LbpError, LbpResult};
use lbp_core::{GrayImage, Image};
use log::debug;

/// Unit-radius ring offsets `(dx, dy)` in sampling order.
///
/// Index `i` of this table drives bit `7 - i` of a pattern.
pub const RING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Size of the code map produced for a `width` x `height` input.
///
/// Returns `(0, 0)` when `2 * radius` is not smaller than both dimensions,
/// i.e. when no pixel has a full margin.
///
/// # Examples
///
/// ```
/// use lbp_texture::lbp_dimensions;
///
/// assert_eq!(lbp_dimensions(640, 480, 3), (634, 474));
/// assert_eq!(lbp_dimensions(4, 10, 2), (0, 0));
/// ```
pub fn lbp_dimensions(width: u32, height: u32, radius: u32) -> (u32, u32) {
    let margin = radius.saturating_mul(2);
    if margin >= width || margin >= height {
        (0, 0)
    } else {
        (width - margin, height - margin)
    }
}

/// Pack ring samples into a code, first sample in the most significant bit.
#[inline]
fn pack_pattern(center: u8, ring: [u8; 8]) -> u8 {
    ring.iter()
        .fold(0u8, |code, &neighbor| (code << 1) | u8::from(neighbor > center))
}

/// Compute the local binary pattern of a single pixel.
///
/// Returns `None` if the ring around `(x, y)` leaves the image or if
/// `radius` is 0.
///
/// # Examples
///
/// ```
/// use lbp_core::GrayImage;
/// use lbp_texture::local_binary_pattern;
///
/// let gray = GrayImage::from_raw(3, 3, vec![
///     06, 11, 14,
///     09, 10, 10,
///     19, 00, 22,
/// ]).unwrap();
///
/// // brighter than 10: top-center, top-right, bottom-right, bottom-left
/// assert_eq!(local_binary_pattern(&gray, 1, 1, 1), Some(0b0110_1010));
/// assert_eq!(local_binary_pattern(&gray, 0, 1, 1), None);
/// ```
pub fn local_binary_pattern(gray: &GrayImage, x: u32, y: u32, radius: u32) -> Option<u8> {
    if radius == 0 || x < radius || y < radius {
        return None;
    }
    let center = gray.get(x, y)?;
    let r = radius as i64;
    let mut ring = [0u8; 8];
    for (sample, &(dx, dy)) in ring.iter_mut().zip(RING_OFFSETS.iter()) {
        let nx = u32::try_from(x as i64 + dx as i64 * r).ok()?;
        let ny = u32::try_from(y as i64 + dy as i64 * r).ok()?;
        *sample = gray.get(nx, ny)?;
    }
    Some(pack_pattern(center, ring))
}

/// Compute the LBP code map of a gray image.
///
/// The output has dimensions [`lbp_dimensions`]`(width, height, radius)`;
/// output pixel `(x, y)` is the pattern of input pixel
/// `(x + radius, y + radius)`. When `2 * radius >= min(width, height)` the
/// result is an empty map rather than an error.
///
/// # Errors
///
/// Returns [`LbpError::InvalidRadius`] if `radius` is 0.
///
/// # Examples
///
/// ```
/// use lbp_core::GrayImage;
/// use lbp_texture::compute_lbp_gray;
///
/// let flat = GrayImage::filled(8, 6, 42);
/// let lbp = compute_lbp_gray(&flat, 2).unwrap();
/// assert_eq!(lbp.dimensions(), (4, 2));
/// assert!(lbp.data().iter().all(|&code| code == 0));
/// ```
pub fn compute_lbp_gray(gray: &GrayImage, radius: u32) -> LbpResult<GrayImage> {
    if radius == 0 {
        return Err(LbpError::InvalidRadius(radius));
    }

    let (out_w, out_h) = lbp_dimensions(gray.width(), gray.height(), radius);
    let mut lbp = GrayImage::new(out_w, out_h);
    debug!(
        "compute_lbp: {}x{} radius={} -> {}x{}",
        gray.width(),
        gray.height(),
        radius,
        out_w,
        out_h
    );
    if lbp.is_empty() {
        return Ok(lbp);
    }

    let r = radius as usize;
    for oy in 0..out_h {
        let y = oy + radius;
        let above = gray.row(y - radius);
        let middle = gray.row(y);
        let below = gray.row(y + radius);

        for (ox, code) in lbp.row_mut(oy).iter_mut().enumerate() {
            let x = ox + r;
            let ring = [
                above[x - r],
                above[x],
                above[x + r],
                middle[x + r],
                below[x + r],
                below[x],
                below[x - r],
                middle[x - r],
            ];
            *code = pack_pattern(middle[x], ring);
        }
    }

    Ok(lbp)
}

/// Compute the LBP code map of a 1- or 3-channel image.
///
/// Three-channel images are first reduced to gray with
/// [`Image::to_gray`]; single-channel images are copied.
///
/// # Errors
///
/// Returns [`LbpError::InvalidInput`] if the image has neither 1 nor 3
/// channels and [`LbpError::InvalidRadius`] if `radius` is 0. No partial
/// map is produced on error.
pub fn compute_lbp(image: &Image, radius: u32) -> LbpResult<GrayImage> {
    let gray = image.to_gray()?;
    compute_lbp_gray(&gray, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(gray: &GrayImage, radius: u32) -> GrayImage {
        let (w, h) = lbp_dimensions(gray.width(), gray.height(), radius);
        GrayImage::from_fn(w, h, |x, y| {
            local_binary_pattern(gray, x + radius, y + radius, radius).unwrap()
        })
    }

    #[test]
    fn test_pack_pattern_bit_order() {
        for i in 0..8 {
            let mut ring = [0u8; 8];
            ring[i] = 1;
            assert_eq!(pack_pattern(0, ring), 1 << (7 - i));
        }
        assert_eq!(pack_pattern(5, [5; 8]), 0);
        assert_eq!(pack_pattern(5, [6; 8]), 0xFF);
    }

    #[test]
    fn test_each_neighbor_drives_its_bit() {
        for radius in 1..=3u32 {
            let size = 2 * radius + 1;
            for (i, &(dx, dy)) in RING_OFFSETS.iter().enumerate() {
                let mut gray = GrayImage::filled(size, size, 50);
                let nx = (radius as i32 + dx * radius as i32) as u32;
                let ny = (radius as i32 + dy * radius as i32) as u32;
                gray.set(nx, ny, 51).unwrap();
                let lbp = compute_lbp_gray(&gray, radius).unwrap();
                assert_eq!(lbp.dimensions(), (1, 1));
                assert_eq!(lbp.pixel(0, 0), 1 << (7 - i), "radius {radius} neighbor {i}");
            }
        }
    }

    #[test]
    fn test_matches_single_pixel_pattern() {
        let gray = GrayImage::from_fn(13, 11, |x, y| ((x * 37 + y * 91) % 251) as u8);
        for radius in 1..=4 {
            let lbp = compute_lbp_gray(&gray, radius).unwrap();
            assert_eq!(lbp, brute_force(&gray, radius), "radius {radius}");
        }
    }

    #[test]
    fn test_zero_radius() {
        let gray = GrayImage::new(5, 5);
        assert_eq!(compute_lbp_gray(&gray, 0), Err(LbpError::InvalidRadius(0)));
        assert_eq!(local_binary_pattern(&gray, 2, 2, 0), None);
    }

    #[test]
    fn test_too_large_radius_is_empty() {
        let gray = GrayImage::filled(6, 9, 1);
        let lbp = compute_lbp_gray(&gray, 3).unwrap();
        assert!(lbp.is_empty());
        assert_eq!(lbp.dimensions(), (0, 0));
        let lbp = compute_lbp_gray(&gray, u32::MAX).unwrap();
        assert!(lbp.is_empty());
        assert!(compute_lbp_gray(&GrayImage::empty(), 1).unwrap().is_empty());
    }

    #[test]
    fn test_single_pixel_pattern_bounds() {
        let gray = GrayImage::filled(5, 5, 1);
        assert_eq!(local_binary_pattern(&gray, 2, 2, 2), Some(0));
        assert_eq!(local_binary_pattern(&gray, 3, 2, 2), None);
        assert_eq!(local_binary_pattern(&gray, 1, 2, 2), None);
        assert_eq!(local_binary_pattern(&gray, 9, 9, 1), None);
    }

    #[test]
    fn test_compute_lbp_channel_check() {
        for channels in [2, 4] {
            let image = Image::new(6, 6, channels).unwrap();
            assert_eq!(
                compute_lbp(&image, 1),
                Err(LbpError::InvalidInput { channels })
            );
        }
        let rgb = Image::new(6, 6, 3).unwrap();
        assert_eq!(compute_lbp(&rgb, 1).unwrap().dimensions(), (4, 4));
    }
}
