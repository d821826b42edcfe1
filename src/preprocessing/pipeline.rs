use crate::error::ExtractError;
use image::{DynamicImage, GrayImage};
use std::time::Instant;

use super::steps;
use super::steps::crop::CropRegion;
use super::steps::threshold::Threshold;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone)]
pub struct PreprocessingResult {
    /// Binarized region
    pub image: GrayImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
    pub warnings: Vec<String>,
}

/// Fixed crop → grayscale → threshold pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    crop: CropRegion,
    threshold: Threshold,
}

impl Pipeline {
    pub fn new(crop: CropRegion, threshold: Threshold) -> Self {
        Self { crop, threshold }
    }

    /// Turn a full screenshot into the binarized names region
    pub fn process(&self, image: DynamicImage) -> Result<PreprocessingResult, ExtractError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();
        let mut warnings = Vec::new();

        let cropped = run_step("crop", &mut steps_timing, || {
            steps::crop::apply(image, &self.crop)
        })?;
        warnings.extend(cropped.warning);

        let gray = run_step("grayscale", &mut steps_timing, || {
            steps::grayscale::apply(cropped.image)
        })?;

        let binary = run_step("threshold", &mut steps_timing, || {
            steps::threshold::apply(gray, self.threshold)
        })?;

        Ok(PreprocessingResult {
            image: binary,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
            warnings,
        })
    }
}

fn run_step<T, F>(name: &str, timings: &mut Vec<StepTiming>, step_fn: F) -> Result<T, ExtractError>
where
    F: FnOnce() -> Result<T, ExtractError>,
{
    let step_start = Instant::now();
    let result = step_fn()?;
    timings.push(StepTiming {
        name: name.to_string(),
        time_ms: step_start.elapsed().as_millis() as u64,
    });
    Ok(result)
}
