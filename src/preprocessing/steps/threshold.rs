use crate::error::ExtractError;
use image::GrayImage;
use imageproc::contrast::otsu_level;
use std::fmt;
use std::str::FromStr;

/// Default cut-off tuned for light names on the original dark screenshots
pub const DEFAULT_LEVEL: u8 = 150;

/// How the binarization level is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Pixels at or above this intensity become white
    Fixed(u8),
    /// Level computed per region with Otsu's method
    Otsu,
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Fixed(DEFAULT_LEVEL)
    }
}

impl Threshold {
    /// Resolve the level to apply to `image`
    pub fn level(&self, image: &GrayImage) -> u8 {
        match self {
            Self::Fixed(level) => *level,
            // otsu_level puts its own level in the dark class
            Self::Otsu => otsu_level(image).saturating_add(1),
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(level) => write!(f, "{}", level),
            Self::Otsu => f.write_str("otsu"),
        }
    }
}

impl FromStr for Threshold {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("otsu") {
            return Ok(Self::Otsu);
        }
        s.parse::<u8>().map(Self::Fixed).map_err(|_| {
            ExtractError::InvalidConfig(format!(
                "threshold '{}' must be 0-255 or \"otsu\"",
                s
            ))
        })
    }
}

/// Binarize: pixels `>= level` become 255, everything else 0
pub fn binarize(image: &GrayImage, level: u8) -> GrayImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if pixel.0[0] >= level { 255 } else { 0 };
    }
    out
}

pub fn apply(image: GrayImage, threshold: Threshold) -> Result<GrayImage, ExtractError> {
    let level = threshold.level(&image);
    tracing::debug!("Binarizing at level {} ({})", level, threshold);
    Ok(binarize(&image, level))
}
