use crate::cli::Args;
use crate::preprocessing::{CropRegion, Threshold};
use std::path::PathBuf;

/// Batch configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub extension: String,
    pub crop: CropRegion,
    pub threshold: Threshold,
    pub engine: Option<String>,
    pub language: String,
    pub tessdata_path: Option<String>,
    pub fail_fast: bool,
    pub debug_dir: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output: PathBuf::from("player_names_with_dates.xlsx"),
            extension: ".webp".to_string(),
            crop: CropRegion::default(),
            threshold: Threshold::default(),
            engine: None,
            language: "eng".to_string(),
            tessdata_path: None,
            fail_fast: false,
            debug_dir: None,
            report: None,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input_dir: args.input_dir,
            output: args.output,
            extension: args.extension,
            crop: args.crop,
            threshold: args.threshold,
            engine: args.engine,
            language: args.language,
            tessdata_path: args.tessdata_path,
            fail_fast: args.fail_fast,
            debug_dir: args.debug_dir,
            report: args.report,
        }
    }
}
