//! Local binary pattern regression test
//!
//! Checks output geometry, the bit layout of the eight ring neighbors,
//! flat and extremal inputs, determinism, and channel validation.

use lbp_core::{GrayImage, Image, ImageFormat};
use lbp_texture::{LbpError, compute_lbp, compute_lbp_gray, lbp_dimensions};
use lbp_test::{RegParams, synthetic_gray, synthetic_rgb};

#[test]
fn lbp_reg() {
    let mut rp = RegParams::new("lbp");

    // --- Test 1: output dimensions shrink by 2 * radius ---
    let pixs = synthetic_gray(64, 48, 7);
    for radius in 1..=5u32 {
        let lbp = compute_lbp_gray(&pixs, radius).expect("compute_lbp_gray");
        rp.compare_values((64 - 2 * radius) as f64, lbp.width() as f64, 0.0);
        rp.compare_values((48 - 2 * radius) as f64, lbp.height() as f64, 0.0);
        rp.write_pix(&lbp, ImageFormat::Png).expect("write lbp");
        eprintln!(
            "  radius {}: {}x{} nonzero={}",
            radius,
            lbp.width(),
            lbp.height(),
            lbp.count_nonzero()
        );
    }

    // --- Test 2: constant images give all-zero codes ---
    for value in [0u8, 100, 255] {
        let flat = GrayImage::filled(11, 9, value);
        let lbp = compute_lbp_gray(&flat, 2).expect("flat");
        rp.compare_values(0.0, lbp.count_nonzero() as f64, 0.0);
    }

    // --- Test 3: 5x5 scenario with a bright center ---
    let mut peak = GrayImage::filled(5, 5, 100);
    peak.set(2, 2, 200).expect("set center");
    let lbp = compute_lbp_gray(&peak, 1).expect("peak");
    let expected = GrayImage::from_raw(
        3,
        3,
        vec![
            0x08, 0x04, 0x02, //
            0x10, 0x00, 0x01, //
            0x20, 0x40, 0x80,
        ],
    )
    .expect("expected map");
    rp.compare_pix(&expected, &lbp);

    // --- Test 4: local extrema at a larger radius ---
    let mut maximum = GrayImage::filled(7, 7, 50);
    maximum.set(3, 3, 51).expect("set max");
    let mut minimum = GrayImage::filled(7, 7, 50);
    minimum.set(3, 3, 49).expect("set min");
    for radius in 1..=3u32 {
        let off = 3 - radius;
        let lbp_max = compute_lbp_gray(&maximum, radius).expect("max");
        let lbp_min = compute_lbp_gray(&minimum, radius).expect("min");
        rp.compare_values(0x00 as f64, lbp_max.pixel(off, off) as f64, 0.0);
        rp.compare_values(0xFF as f64, lbp_min.pixel(off, off) as f64, 0.0);
    }

    // --- Test 5: determinism ---
    let lbp1 = compute_lbp_gray(&pixs, 3).expect("run 1");
    let lbp2 = compute_lbp_gray(&pixs, 3).expect("run 2");
    rp.compare_strings(lbp1.data(), lbp2.data());

    // --- Test 6: gray input through the Image entry point ---
    let image = Image::from(pixs.clone());
    let via_image = compute_lbp(&image, 3).expect("compute_lbp");
    rp.compare_pix(&lbp1, &via_image);

    // --- Test 7: RGB input equals LBP of its gray conversion ---
    let rgb = synthetic_rgb(40, 30, 11);
    let lbp_rgb = compute_lbp(&rgb, 2).expect("rgb");
    let lbp_gray = compute_lbp_gray(&rgb.to_gray().expect("to_gray"), 2).expect("gray");
    rp.compare_pix(&lbp_gray, &lbp_rgb);

    // --- Test 8: unsupported channel counts fail ---
    for channels in [2u32, 4] {
        let bad = Image::new(10, 10, channels).expect("image");
        let result = compute_lbp(&bad, 1);
        let is_invalid_input = result == Err(LbpError::InvalidInput { channels });
        rp.compare_values(1.0, if is_invalid_input { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 9: degenerate radius policy ---
    let zero = compute_lbp_gray(&pixs, 0);
    rp.compare_values(
        1.0,
        if zero == Err(LbpError::InvalidRadius(0)) { 1.0 } else { 0.0 },
        0.0,
    );
    let huge = compute_lbp_gray(&pixs, 24).expect("huge radius");
    rp.compare_values(1.0, if huge.is_empty() { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(0.0, lbp_dimensions(64, 48, 24).0 as f64, 0.0);

    assert!(rp.cleanup(), "lbp regression test failed");
}
