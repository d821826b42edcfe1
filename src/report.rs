use crate::error::ExtractError;
use crate::export::ExportFormat;
use crate::record::{BatchOutcome, FileWarning, SkippedFile};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSON summary of one run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub output: PathBuf,
    pub format: ExportFormat,
    pub files_matched: usize,
    pub files_processed: usize,
    pub records: usize,
    pub skipped: Vec<SkippedFile>,
    pub warnings: Vec<FileWarning>,
}

impl RunReport {
    pub fn new(outcome: &BatchOutcome, output: &Path, format: ExportFormat) -> Self {
        Self {
            output: output.to_path_buf(),
            format,
            files_matched: outcome.files_matched,
            files_processed: outcome.files_processed,
            records: outcome.records.len(),
            skipped: outcome.skipped.clone(),
            warnings: outcome.warnings.clone(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), ExtractError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExtractError::Export(format!("Failed to serialize report: {}", e)))?;
        std::fs::write(path, json).map_err(|e| ExtractError::io(path, e))
    }
}
