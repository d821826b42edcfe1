use serde::Serialize;
use std::path::PathBuf;

/// One recognized player name and the date taken from its screenshot's file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "Player Name")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: Option<String>,
}

impl Record {
    pub fn new(name: impl Into<String>, date: Option<String>) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// An input file that failed and was left out of the export
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// A problem with an input file that still produced records
#[derive(Debug, Clone, Serialize)]
pub struct FileWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Result of processing one folder
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedFile>,
    pub warnings: Vec<FileWarning>,
    pub files_matched: usize,
    pub files_processed: usize,
}
