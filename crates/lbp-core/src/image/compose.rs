//! Image composition
//!
//! Lays several gray images out next to each other on one canvas, which is
//! how the preview harness shows an input beside its code maps.

use super::GrayImage;

impl GrayImage {
    /// Tile images left to right, top-aligned, on a `background` canvas.
    ///
    /// Images are separated by `spacing` pixels of background. The canvas is
    /// as tall as the tallest image. Empty images still contribute their
    /// spacing so that the tile order stays visible. The canvas width
    /// saturates at `u32::MAX`; tiles past that edge are clipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbp_core::GrayImage;
    ///
    /// let a = GrayImage::filled(2, 2, 10);
    /// let b = GrayImage::filled(1, 3, 20);
    /// let tiled = GrayImage::tile_horizontal(&[&a, &b], 1, 0);
    /// assert_eq!(tiled.dimensions(), (4, 3));
    /// assert_eq!(tiled.pixel(3, 2), 20);
    /// assert_eq!(tiled.pixel(0, 2), 0);
    /// ```
    pub fn tile_horizontal(images: &[&GrayImage], spacing: u32, background: u8) -> GrayImage {
        if images.is_empty() {
            return GrayImage::empty();
        }
        let (width, height) = tiled_dimensions(images, spacing);

        let mut canvas = GrayImage::filled(width, height, background);
        let canvas_w = width as usize;
        let mut x0 = 0usize;
        for image in images {
            if x0 >= canvas_w {
                break;
            }
            let end = x0.saturating_add(image.width() as usize).min(canvas_w);
            for (y, src) in image.rows().enumerate().take(image.height() as usize) {
                let dst = canvas.row_mut(y as u32);
                dst[x0..end].copy_from_slice(&src[..end - x0]);
            }
            x0 = end.saturating_add(spacing as usize);
        }
        canvas
    }
}

/// Canvas size for [`GrayImage::tile_horizontal`], saturating in width.
fn tiled_dimensions(images: &[&GrayImage], spacing: u32) -> (u32, u32) {
    let gap_count = u32::try_from(images.len().saturating_sub(1)).unwrap_or(u32::MAX);
    let gaps = spacing.saturating_mul(gap_count);
    let width = images
        .iter()
        .fold(gaps, |acc, im| acc.saturating_add(im.width()));
    let height = images.iter().map(|im| im.height()).max().unwrap_or(0);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_layout() {
        let a = GrayImage::from_fn(2, 1, |x, _| x as u8 + 1);
        let b = GrayImage::filled(1, 2, 9);
        let tiled = GrayImage::tile_horizontal(&[&a, &b], 2, 255);
        assert_eq!(tiled.dimensions(), (5, 2));
        assert_eq!(tiled.row(0), &[1, 2, 255, 255, 9]);
        assert_eq!(tiled.row(1), &[255, 255, 255, 255, 9]);
    }

    #[test]
    fn test_tile_with_empty() {
        let a = GrayImage::filled(1, 1, 5);
        let empty = GrayImage::empty();
        let tiled = GrayImage::tile_horizontal(&[&a, &empty, &a], 1, 0);
        assert_eq!(tiled.dimensions(), (4, 1));
        assert_eq!(tiled.row(0), &[5, 0, 0, 5]);
        assert!(GrayImage::tile_horizontal(&[], 3, 0).is_empty());
    }

    #[test]
    fn test_tiled_dimensions_saturate() {
        let a = GrayImage::filled(3, 2, 0);
        assert_eq!(tiled_dimensions(&[&a, &a], 4), (10, 2));
        assert_eq!(tiled_dimensions(&[&a, &a, &a], u32::MAX / 2), (u32::MAX, 2));
        assert_eq!(tiled_dimensions(&[&a], u32::MAX), (3, 2));
    }
}
