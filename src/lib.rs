//! Read player names from game screenshots and export them, with the date
//! embedded in each file name, to a spreadsheet.

pub mod cli;
pub mod config;
pub mod date;
pub mod engine;
pub mod engines;
pub mod error;
pub mod export;
pub mod preprocessing;
pub mod processor;
pub mod record;
pub mod report;
pub mod text;

use config::Config;
use engine::OcrEngine;
use error::ExtractError;
use export::ExportFormat;
use processor::FolderProcessor;
use record::BatchOutcome;
use report::RunReport;
use std::sync::Arc;

/// Result of a complete run
#[derive(Debug)]
pub struct RunSummary {
    pub outcome: BatchOutcome,
    pub format: ExportFormat,
}

/// Check the input folder before any engine is initialized
pub fn validate_input(config: &Config) -> Result<(), ExtractError> {
    if !config.input_dir.is_dir() {
        return Err(ExtractError::InvalidConfig(format!(
            "input folder {} does not exist or is not a directory",
            config.input_dir.display()
        )));
    }
    // Surface a bad output extension before spending time on OCR
    ExportFormat::from_path(&config.output)?;
    Ok(())
}

/// Process the configured folder with `engine` and export the records
pub fn run(config: &Config, engine: Arc<dyn OcrEngine>) -> Result<RunSummary, ExtractError> {
    validate_input(config)?;

    tracing::info!(
        "Processing {} with {} engine (crop {}, threshold {})",
        config.input_dir.display(),
        engine.name(),
        config.crop,
        config.threshold
    );

    let processor = FolderProcessor::new(config, engine);
    let outcome = processor.process_folder(&config.input_dir)?;

    if !outcome.skipped.is_empty() {
        tracing::warn!(
            "Skipped {} of {} files",
            outcome.skipped.len(),
            outcome.files_matched
        );
    }

    let format = export::export_records(&outcome.records, &config.output)?;

    if let Some(report_path) = &config.report {
        RunReport::new(&outcome, &config.output, format).write(report_path)?;
        tracing::info!("Wrote run report to {}", report_path.display());
    }

    Ok(RunSummary { outcome, format })
}
