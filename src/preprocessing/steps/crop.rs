use crate::error::ExtractError;
use image::{DynamicImage, GenericImageView};
use std::fmt;
use std::str::FromStr;

/// Pixel rectangle of the screenshot that holds the player names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersection with an image of the given size, or `None` if they don't overlap
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Option<CropRegion> {
        if self.x >= image_width || self.y >= image_height {
            return None;
        }
        let width = self.width.min(image_width - self.x);
        let height = self.height.min(image_height - self.y);
        if width == 0 || height == 0 {
            return None;
        }
        Some(CropRegion::new(self.x, self.y, width, height))
    }
}

/// The names column of the original screenshot layout: (100,100) to (450,500)
impl Default for CropRegion {
    fn default() -> Self {
        Self::new(100, 100, 350, 400)
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for CropRegion {
    type Err = ExtractError;

    /// Parse `x,y,width,height`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ExtractError::InvalidConfig(format!("crop region '{}': {}", s, e)))?;

        let [x, y, width, height] = parts[..] else {
            return Err(ExtractError::InvalidConfig(format!(
                "crop region '{}' must be x,y,width,height",
                s
            )));
        };

        if width == 0 || height == 0 {
            return Err(ExtractError::InvalidConfig(format!(
                "crop region '{}' has zero size",
                s
            )));
        }

        Ok(Self::new(x, y, width, height))
    }
}

/// Output of the crop step
pub struct Cropped {
    pub image: DynamicImage,
    /// Set when the region had to be shrunk to fit inside the image
    pub warning: Option<String>,
}

/// Cut `region` out of `image`, clamping it to the image bounds
pub fn apply(image: DynamicImage, region: &CropRegion) -> Result<Cropped, ExtractError> {
    let (width, height) = image.dimensions();

    let effective = region.clamp_to(width, height).ok_or_else(|| {
        ExtractError::PreprocessingError(format!(
            "crop region {} lies outside the {}x{} image",
            region, width, height
        ))
    })?;

    let warning = (effective != *region).then(|| {
        format!(
            "crop region {} exceeds the {}x{} image, using {}",
            region, width, height, effective
        )
    });

    let image = image.crop_imm(effective.x, effective.y, effective.width, effective.height);

    Ok(Cropped { image, warning })
}
