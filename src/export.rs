//! Spreadsheet export of the collected records.

use crate::error::ExtractError;
use crate::record::Record;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;
use std::fmt;
use std::path::Path;

pub const HEADERS: [&str; 2] = ["Player Name", "Date"];

const WORKSHEET_NAME: &str = "Players";
const NAME_COLUMN_WIDTH: f64 = 32.0;
const DATE_COLUMN_WIDTH: f64 = 12.0;

/// Output format, chosen from the output file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            _ => Err(ExtractError::UnsupportedFormat(format!(
                "{} (expected .xlsx or .csv)",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xlsx => f.write_str("xlsx"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

/// Write `records` to `path`, one row each under a `Player Name`/`Date` header.
///
/// An existing file at `path` is overwritten.
pub fn export_records(records: &[Record], path: &Path) -> Result<ExportFormat, ExtractError> {
    let format = ExportFormat::from_path(path)?;

    match format {
        ExportFormat::Xlsx => write_xlsx(records, path).map_err(|e| {
            ExtractError::Export(format!("{}: {}", path.display(), e))
        })?,
        ExportFormat::Csv => write_csv(records, path)?,
    }

    tracing::info!(
        "Wrote {} rows to {} ({})",
        records.len(),
        path.display(),
        format
    );

    Ok(format)
}

fn write_xlsx(records: &[Record], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(WORKSHEET_NAME)?;
    worksheet.set_column_width(0, NAME_COLUMN_WIDTH)?;
    worksheet.set_column_width(1, DATE_COLUMN_WIDTH)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &record.name)?;
        if let Some(date) = &record.date {
            worksheet.write_string(row, 1, date)?;
        }
    }

    workbook.save(path)
}

fn write_csv(records: &[Record], path: &Path) -> Result<(), ExtractError> {
    let csv_err = |e: csv::Error| ExtractError::Export(format!("{}: {}", path.display(), e));

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(HEADERS).map_err(csv_err)?;
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ExtractError::io(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Alice", Some("2023-09-01".to_string())),
            Record::new("Bob, Jr.", None),
        ]
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.XLSX")).unwrap(),
            ExportFormat::Xlsx
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.csv")).unwrap(),
            ExportFormat::Csv
        );
        assert!(matches!(
            ExportFormat::from_path(Path::new("out.ods")),
            Err(ExtractError::UnsupportedFormat(_))
        ));
        assert!(ExportFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv");

        export_records(&sample(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Player Name,Date\nAlice,2023-09-01\n\"Bob, Jr.\",\n"
        );
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv");

        export_records(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Player Name,Date\n");
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv");
        fs::write(&path, "stale contents that are longer than the new file\n".repeat(10)).unwrap();

        export_records(&sample()[..1], &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Player Name,Date\nAlice,2023-09-01\n"
        );
    }

    fn read_xlsx(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        use calamine::{open_workbook, Reader, Xlsx};

        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let sheets = workbook.sheet_names();
        let range = workbook.worksheet_range(WORKSHEET_NAME).unwrap();
        let rows = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        (sheets, rows)
    }

    #[test]
    fn test_xlsx_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.xlsx");

        let format = export_records(&sample(), &path).unwrap();
        assert_eq!(format, ExportFormat::Xlsx);

        let (sheets, rows) = read_xlsx(&path);
        assert_eq!(sheets, vec!["Players"]);
        assert_eq!(
            rows,
            vec![
                vec!["Player Name", "Date"],
                vec!["Alice", "2023-09-01"],
                vec!["Bob, Jr.", ""],
            ]
        );
    }

    #[test]
    fn test_xlsx_header_only_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.xlsx");

        export_records(&[], &path).unwrap();

        let (_, rows) = read_xlsx(&path);
        assert_eq!(rows, vec![vec!["Player Name", "Date"]]);
    }

    #[test]
    fn test_unwritable_path_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("players.csv");
        assert!(matches!(
            export_records(&sample(), &path),
            Err(ExtractError::Export(_))
        ));
    }
}
