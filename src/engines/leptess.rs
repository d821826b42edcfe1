//! Leptess/Tesseract engine implementation
//!
//! Tesseract-based OCR engine, the engine the name screenshots were first tuned for.
//! Uses tesseract-static crate for static linking (no system dependencies).
//! Downloads tessdata (training data) automatically on first use unless a
//! tessdata directory is configured.

use super::download;
use crate::config::Config;
use crate::engine::{OcrEngine, OcrResult};
use crate::error::ExtractError;
use image::DynamicImage;
use std::path::Path;
use tesseract_static::tesseract::Tesseract;

/// Tesseract OCR Engine
pub struct LeptessEngine {
    /// Path to tessdata directory
    tessdata_path: String,
    language: String,
}

impl LeptessEngine {
    /// Create a new Tesseract-based OCR engine
    pub fn new(config: &Config) -> Result<Self, ExtractError> {
        let language = config.language.clone();

        let tessdata_path = match &config.tessdata_path {
            Some(path) => {
                tracing::info!("Using tessdata from {}", path);
                path.clone()
            }
            None => ensure_tessdata_available(&language)?,
        };

        // Fail at start-up rather than on the first screenshot
        Tesseract::new(Some(&tessdata_path), Some(&language)).map_err(|e| {
            ExtractError::InitializationError(format!("Failed to initialize Tesseract: {}", e))
        })?;

        tracing::info!(
            "Leptess engine initialized (tessdata: {}, language: {})",
            tessdata_path,
            language
        );

        Ok(Self {
            tessdata_path,
            language,
        })
    }
}

impl OcrEngine for LeptessEngine {
    fn name(&self) -> &'static str {
        "leptess"
    }

    fn description(&self) -> &'static str {
        "Tesseract OCR engine - better for noisy/messy images like phone photos"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult, ExtractError> {
        // BMP is always supported by leptonica
        let rgb_img = image.to_rgb8();
        let (width, height) = rgb_img.dimensions();

        let mut bmp_data = Vec::new();
        rgb_img
            .write_to(&mut std::io::Cursor::new(&mut bmp_data), image::ImageFormat::Bmp)
            .map_err(|e| ExtractError::ProcessingError(format!("Failed to convert to BMP: {}", e)))?;

        tracing::debug!(
            "Recognizing region: {}x{}, BMP size: {} bytes",
            width,
            height,
            bmp_data.len()
        );

        let mut tess = Tesseract::new(Some(&self.tessdata_path), Some(&self.language)).map_err(
            |e| ExtractError::ProcessingError(format!("Failed to create Tesseract: {}", e)),
        )?;

        tess = tess.set_image_from_mem(&bmp_data).map_err(|e| {
            ExtractError::ProcessingError(format!(
                "Failed to set image ({}x{}, {} bytes): {}",
                width,
                height,
                bmp_data.len(),
                e
            ))
        })?;

        tess = tess.recognize().map_err(|e| {
            ExtractError::ProcessingError(format!("Failed to recognize text: {}", e))
        })?;

        let text = tess
            .get_text()
            .map_err(|e| ExtractError::ProcessingError(format!("Failed to get text: {}", e)))?;

        // 0-100 scale
        let confidence = tess.mean_text_conf() as f32 / 100.0;

        Ok(OcrResult {
            text,
            confidence: Some(confidence),
        })
    }

    fn supported_languages(&self) -> Vec<String> {
        vec![self.language.clone()]
    }
}

/// Ensure tessdata for `language` is cached, downloading if needed
fn ensure_tessdata_available(language: &str) -> Result<String, ExtractError> {
    let cache_dir = download::cache_dir().join("tessdata");
    let traineddata_file = format!("{}.traineddata", language);

    download::ensure_downloaded(&tessdata_url(language), &cache_dir, &traineddata_file)?;

    // Tesseract expects the directory, not the file
    path_to_string(&cache_dir)
}

fn path_to_string(path: &Path) -> Result<String, ExtractError> {
    path.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ExtractError::InitializationError("Invalid tessdata path".to_string()))
}

/// tessdata_fast keeps downloads small
fn tessdata_url(language: &str) -> String {
    format!(
        "https://github.com/tesseract-ocr/tessdata_fast/raw/main/{}.traineddata",
        language
    )
}
