use image::{Pixel, Rgb, Rgba};

use crate::utils::rgb_distance::rgb_distance;

/// Background assumed when the top-left sample can't be trusted.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Pixels strictly closer than this to the background are cleared.
pub const CUTOFF: f32 = 50.0;

pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Pick the background color from the top-left pixel.
///
/// The sample is only used when it is itself near-white, otherwise the
/// background falls back to pure white.
pub fn detect_background(top_left: Rgba<u8>) -> Rgb<u8> {
    let sample = top_left.to_rgb();

    if rgb_distance(sample, WHITE) < CUTOFF {
        sample
    } else {
        WHITE
    }
}

// Alpha is ignored, only the color decides.
pub fn is_background(pixel: Rgba<u8>, background: Rgb<u8>) -> bool {
    rgb_distance(pixel.to_rgb(), background) < CUTOFF
}
