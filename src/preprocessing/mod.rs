//! Screenshot preprocessing: crop the names column, grayscale, binarize.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessingResult, StepTiming};
pub use steps::crop::CropRegion;
pub use steps::threshold::Threshold;
