//! Model and training data downloads shared by the engines

use crate::error::ExtractError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Per-user cache directory for downloaded models
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("roster-ocr")
}

/// Ensure `filename` exists in `dir`, downloading it from `url` if needed
pub fn ensure_downloaded(url: &str, dir: &Path, filename: &str) -> Result<PathBuf, ExtractError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ExtractError::InitializationError(format!(
            "Failed to create cache directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(filename);

    if !path.exists() {
        tracing::info!("Downloading {} (this may take a moment)...", filename);
        download_file(url, &path)?;
        tracing::info!("Downloaded {} to {:?}", filename, path);
    } else {
        tracing::info!("Using cached {} from {:?}", filename, path);
    }

    Ok(path)
}

/// Download `url` into a `.part` file next to `path`, then rename it into place
fn download_file(url: &str, path: &Path) -> Result<(), ExtractError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| ExtractError::InitializationError(format!("Failed to download {}: {}", url, e)))?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        ExtractError::InitializationError(format!("Failed to read response body: {}", e))
    })?;

    let partial = path.with_extension("part");
    let mut file = File::create(&partial).map_err(|e| {
        ExtractError::InitializationError(format!("Failed to create {:?}: {}", partial, e))
    })?;
    file.write_all(&buffer)
        .map_err(|e| ExtractError::InitializationError(format!("Failed to write {:?}: {}", partial, e)))?;

    std::fs::rename(&partial, path).map_err(|e| {
        ExtractError::InitializationError(format!("Failed to move {:?} into place: {}", partial, e))
    })?;

    Ok(())
}
