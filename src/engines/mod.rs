//! OCR engine implementations
//!
//! This module contains implementations of the OcrEngine trait for different
//! OCR backends. Engines are conditionally compiled based on feature flags.

#[cfg(any(feature = "engine-ocrs", feature = "engine-leptess"))]
mod download;

#[cfg(feature = "engine-ocrs")]
pub mod ocrs;

#[cfg(feature = "engine-leptess")]
pub mod leptess;

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::ExtractError;
use std::sync::Arc;

/// Names of the engines compiled into this build, in preference order
pub fn available_engines() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut names = Vec::new();

    #[cfg(feature = "engine-ocrs")]
    names.push("ocrs");

    #[cfg(feature = "engine-leptess")]
    names.push("leptess");

    names
}

/// Initialize the engine named in the config, or the first available one
pub fn create_engine(config: &Config) -> Result<Arc<dyn OcrEngine>, ExtractError> {
    let available = available_engines();

    let name = match config.engine.as_deref() {
        Some(requested) => requested,
        None => available.first().copied().ok_or_else(|| {
            ExtractError::InitializationError(
                "No OCR engines available. Build with --features engine-ocrs or --features engine-leptess".to_string()
            )
        })?,
    };

    if !available.contains(&name) {
        return Err(ExtractError::InitializationError(format!(
            "Unknown OCR engine '{}' (available: {})",
            name,
            available.join(", ")
        )));
    }

    tracing::info!("Initializing {} engine...", name);

    let engine: Arc<dyn OcrEngine> = match name {
        #[cfg(feature = "engine-ocrs")]
        "ocrs" => Arc::new(ocrs::OcrsEngine::new(config)?),

        #[cfg(feature = "engine-leptess")]
        "leptess" => Arc::new(leptess::LeptessEngine::new(config)?),

        _ => {
            return Err(ExtractError::InitializationError(format!(
                "OCR engine '{}' is not compiled in",
                name
            )))
        }
    };

    check_language(engine.as_ref(), &config.language)?;
    tracing::info!("Using {}: {}", engine.name(), engine.description());

    Ok(engine)
}

/// Reject a language the engine cannot recognize
pub fn check_language(engine: &dyn OcrEngine, language: &str) -> Result<(), ExtractError> {
    let supported = engine.supported_languages();
    if supported.iter().any(|l| l == language) {
        return Ok(());
    }
    Err(ExtractError::InvalidConfig(format!(
        "{} engine does not support language '{}' (supported: {})",
        engine.name(),
        language,
        supported.join(", ")
    )))
}
