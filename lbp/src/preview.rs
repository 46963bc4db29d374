//! Side-by-side preview of an image and its texture maps
//!
//! The preview strip holds three panels, left to right: the grayscale
//! input, its LBP map and its ULBP class map. The code maps are smaller
//! than the input by `2 * radius` in each direction and sit top-aligned.

use lbp_core::{GrayImage, Image};
use lbp_texture::{LbpResult, compute_lbp_gray, compute_ulbp_gray};
use log::info;
use std::path::{Path, PathBuf};

/// Gap between panels, in pixels.
pub const PANEL_SPACING: u32 = 8;

/// Gutter and padding value.
pub const PANEL_BACKGROUND: u8 = 0;

/// The three panels of a preview.
#[derive(Debug, Clone)]
pub struct PreviewPanels {
    pub gray: GrayImage,
    pub lbp: GrayImage,
    pub ulbp: GrayImage,
}

impl PreviewPanels {
    /// Tile the panels into one strip.
    pub fn compose(&self) -> GrayImage {
        GrayImage::tile_horizontal(
            &[&self.gray, &self.lbp, &self.ulbp],
            PANEL_SPACING,
            PANEL_BACKGROUND,
        )
    }
}

/// Compute the preview panels for a decoded image.
///
/// An alpha channel, if present, is dropped before the grayscale
/// conversion.
pub fn build_panels(image: &Image, radius: u32) -> LbpResult<PreviewPanels> {
    let gray = image.remove_alpha().to_gray()?;
    let lbp = compute_lbp_gray(&gray, radius)?;
    let ulbp = compute_ulbp_gray(&gray, radius)?;
    info!(
        "preview: {}x{} input, {}x{} code maps at radius {}",
        gray.width(),
        gray.height(),
        lbp.width(),
        lbp.height(),
        radius
    );
    Ok(PreviewPanels { gray, lbp, ulbp })
}

/// Output path for the preview of `input`: `<stem>_lbp_preview.png` in
/// the same directory.
pub fn preview_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}_lbp_preview.png", stem))
}
