use crate::preprocessing::{CropRegion, Threshold};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster-ocr")]
#[command(about = "Read player names from screenshots and export them with dates to a spreadsheet")]
#[command(version)]
pub struct Args {
    /// Folder containing the screenshots
    #[arg(long, env = "ROSTER_INPUT_DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Spreadsheet to write (.xlsx or .csv); overwritten if it exists
    #[arg(
        long,
        short,
        env = "ROSTER_OUTPUT",
        default_value = "player_names_with_dates.xlsx"
    )]
    pub output: PathBuf,

    /// File name suffix to process (case-sensitive)
    #[arg(long, env = "ROSTER_EXTENSION", default_value = ".webp")]
    pub extension: String,

    /// Region holding the names, as x,y,width,height in pixels
    #[arg(long, env = "ROSTER_CROP", default_value = "100,100,350,400")]
    pub crop: CropRegion,

    /// Binarization threshold (0-255) or "otsu"
    #[arg(long, env = "ROSTER_THRESHOLD", default_value = "150")]
    pub threshold: Threshold,

    /// OCR engine to use (e.g., "ocrs", "leptess"); defaults to the first one compiled in
    #[arg(long, env = "ROSTER_ENGINE")]
    pub engine: Option<String>,

    /// Language for OCR (e.g., "eng", "deu", "fra")
    #[arg(long, env = "ROSTER_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Path to tessdata directory (uses TESSDATA_PREFIX env var if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<String>,

    /// Abort on the first unreadable screenshot instead of skipping it
    #[arg(long, env = "ROSTER_FAIL_FAST")]
    pub fail_fast: bool,

    /// Save each binarized region here as PNG for tuning the crop box
    #[arg(long, env = "ROSTER_DEBUG_DIR")]
    pub debug_dir: Option<PathBuf>,

    /// Write a JSON run summary to this path
    #[arg(long, env = "ROSTER_REPORT")]
    pub report: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_layout() {
        let args = Args::try_parse_from(["roster-ocr"]).unwrap();
        assert_eq!(args.extension, ".webp");
        assert_eq!(args.crop, CropRegion::new(100, 100, 350, 400));
        assert_eq!(args.threshold, Threshold::Fixed(150));
        assert!(!args.fail_fast);
    }

    #[test]
    fn test_parses_custom_values() {
        let args = Args::try_parse_from([
            "roster-ocr",
            "--input-dir",
            "shots",
            "-o",
            "out.csv",
            "--crop",
            "0,10,200,300",
            "--threshold",
            "otsu",
            "--fail-fast",
        ])
        .unwrap();
        assert_eq!(args.input_dir, PathBuf::from("shots"));
        assert_eq!(args.output, PathBuf::from("out.csv"));
        assert_eq!(args.crop, CropRegion::new(0, 10, 200, 300));
        assert_eq!(args.threshold, Threshold::Otsu);
        assert!(args.fail_fast);
    }

    #[test]
    fn test_rejects_malformed_crop() {
        assert!(Args::try_parse_from(["roster-ocr", "--crop", "1,2,3"]).is_err());
    }
}
