//! Folder processing: screenshot files in, name records out.

use crate::config::Config;
use crate::date::parse_filename_date;
use crate::engine::OcrEngine;
use crate::error::ExtractError;
use crate::preprocessing::Pipeline;
use crate::record::{BatchOutcome, FileWarning, Record, SkippedFile};
use crate::text::clean_text;
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Cleaned text recognized in one screenshot
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Newline-separated names, trimmed, no blank lines
    pub names: String,
    /// Non-fatal preprocessing problems, such as a clamped crop region
    pub warnings: Vec<String>,
}

/// Runs the crop → binarize → recognize pass over every matching file of a folder
pub struct FolderProcessor {
    engine: Arc<dyn OcrEngine>,
    pipeline: Pipeline,
    extension: String,
    fail_fast: bool,
    debug_dir: Option<PathBuf>,
}

impl FolderProcessor {
    pub fn new(config: &Config, engine: Arc<dyn OcrEngine>) -> Self {
        Self {
            engine,
            pipeline: Pipeline::new(config.crop, config.threshold),
            extension: config.extension.clone(),
            fail_fast: config.fail_fast,
            debug_dir: config.debug_dir.clone(),
        }
    }

    /// Recognize the names in one screenshot
    pub fn extract_names(&self, path: &Path) -> Result<Extraction, ExtractError> {
        let start = Instant::now();

        let image = load_image(path)?;

        let preprocessed = self.pipeline.process(image)?;
        tracing::debug!(
            "Preprocessed {} in {}ms ({})",
            path.display(),
            preprocessed.total_time_ms,
            preprocessed
                .steps
                .iter()
                .map(|step| format!("{} {}ms", step.name, step.time_ms))
                .collect::<Vec<_>>()
                .join(", ")
        );
        for warning in &preprocessed.warnings {
            tracing::warn!("{}: {}", path.display(), warning);
        }

        if let Some(dir) = &self.debug_dir {
            save_debug_region(dir, path, &preprocessed.image);
        }

        let result = self
            .engine
            .recognize(&DynamicImage::ImageLuma8(preprocessed.image))?;
        let names = clean_text(&result.text);

        tracing::info!(
            "Recognized {} lines in {} ({}ms{})",
            names.lines().count(),
            path.display(),
            start.elapsed().as_millis(),
            result
                .confidence
                .map(|c| format!(", confidence {:.2}", c))
                .unwrap_or_default()
        );

        Ok(Extraction {
            names,
            warnings: preprocessed.warnings,
        })
    }

    /// Build one record per recognized line across all matching files in `dir`
    pub fn process_folder(&self, dir: &Path) -> Result<BatchOutcome, ExtractError> {
        let files = list_matching_files(dir, &self.extension)?;
        tracing::info!(
            "Found {} '{}' files in {}",
            files.len(),
            self.extension,
            dir.display()
        );

        let mut outcome = BatchOutcome {
            files_matched: files.len(),
            ..BatchOutcome::default()
        };

        for path in files {
            let extraction = match self.extract_names(&path) {
                Ok(extraction) => extraction,
                Err(e) if !self.fail_fast => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    outcome.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            let date = parse_filename_date(&filename);
            if date.is_none() {
                tracing::debug!("No date token in {}", filename);
            }

            outcome
                .warnings
                .extend(extraction.warnings.into_iter().map(|message| FileWarning {
                    path: path.clone(),
                    message,
                }));
            outcome.records.extend(
                extraction
                    .names
                    .split('\n')
                    .filter(|name| !name.is_empty())
                    .map(|name| Record::new(name, date.clone())),
            );
            outcome.files_processed += 1;
        }

        Ok(outcome)
    }
}

/// Regular files in `dir` whose name ends with `extension` (case-sensitive), sorted by name
pub fn list_matching_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ExtractError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ExtractError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExtractError::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!("Ignoring non-UTF-8 file name {:?}", name);
            continue;
        };
        if !name.ends_with(extension) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Decode by content rather than file name, so any configured suffix works
fn load_image(path: &Path) -> Result<DynamicImage, ExtractError> {
    let load_err = |message: String| ExtractError::ImageLoad {
        path: path.to_path_buf(),
        message,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_err(e.to_string()))?
        .decode()
        .map_err(|e| load_err(e.to_string()))
}

fn save_debug_region(dir: &Path, source: &Path, region: &image::GrayImage) {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "region".to_string());
    let target = dir.join(format!("{}.png", stem));

    let saved = std::fs::create_dir_all(dir)
        .map_err(|e| e.to_string())
        .and_then(|_| region.save(&target).map_err(|e| e.to_string()));

    match saved {
        Ok(()) => tracing::debug!("Saved binarized region to {}", target.display()),
        Err(e) => tracing::warn!("Could not save debug region {}: {}", target.display(), e),
    }
}
