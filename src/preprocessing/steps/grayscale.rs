use crate::error::ExtractError;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::map::map_colors;

/// BT.601 luma weights, the ones the threshold level was tuned against
const RED_WEIGHT: f32 = 0.299;
const GREEN_WEIGHT: f32 = 0.587;
const BLUE_WEIGHT: f32 = 0.114;

/// Convert the cropped region to single-channel intensity
pub fn apply(image: DynamicImage) -> Result<GrayImage, ExtractError> {
    if let DynamicImage::ImageLuma8(gray) = image {
        return Ok(gray);
    }

    let rgb = image.to_rgb8();
    Ok(map_colors(&rgb, |pixel| {
        let [r, g, b] = pixel.0;
        Luma([luma(r, g, b)])
    }))
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let value = RED_WEIGHT * r as f32 + GREEN_WEIGHT * g as f32 + BLUE_WEIGHT * b as f32;
    value.round().clamp(0.0, 255.0) as u8
}
