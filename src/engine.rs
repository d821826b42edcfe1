use crate::error::ExtractError;
use image::DynamicImage;

/// OCR processing result
#[derive(Debug, Clone, Default)]
pub struct OcrResult {
    /// Raw recognized text, one line per text line found
    pub text: String,
    /// Engine-reported confidence in 0.0-1.0, if the engine has one
    pub confidence: Option<f32>,
}

/// Trait that all OCR engines must implement
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "ocrs", "leptess")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize the text in an already preprocessed image
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, ExtractError>;

    /// Get supported languages
    fn supported_languages(&self) -> Vec<String>;
}
