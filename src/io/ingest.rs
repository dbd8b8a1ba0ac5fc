//! CSV ingestion: the upstream edge that turns a delimited export into
//! typed [`LanguageRecord`]s.
//!
//! Headers are trimmed before matching, ragged rows are tolerated, and rows
//! with no values at all are skipped. Cell-level coercion failures never
//! fail the file; only I/O and CSV framing errors do.

use crate::core::{fields, LanguageRecord};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open dataset {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV headers")]
    Headers(#[source] csv::Error),
    #[error("failed to read CSV row {row}")]
    Row {
        /// 1-based line number including the header row.
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Parse CSV text from any reader into records.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<LanguageRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(IngestError::Headers)?
        .iter()
        .map(|h| fields::normalize_header(h).to_string())
        .collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|source| IngestError::Row {
            row: index + 2,
            source,
        })?;
        let record =
            LanguageRecord::from_fields(headers.iter().map(String::as_str).zip(row.iter()));
        if record.is_blank() {
            continue;
        }
        records.push(record);
    }

    log::debug!("ingested {} records from CSV", records.len());
    Ok(records)
}

/// Open and parse a CSV dataset file.
pub fn read_records_from_path(path: &Path) -> Result<Vec<LanguageRecord>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_rows_with_padded_headers() {
        let csv_text = indoc! {r#"
            Language Name, All Access Status ,All Access Chapter Goal,Translation Status
            Amani,Translation Not Started,260,
            Zorua,"Translation in Progress","1,189",Expressed Need
        "#};
        let records = read_records(csv_text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].access_status(), "Translation Not Started");
        assert_eq!(records[0].chapter_goal, Some(260.0));
        assert_eq!(records[1].chapter_goal, Some(1189.0));
        assert_eq!(records[1].translation_status(), "Expressed Need");
    }

    #[test]
    fn skips_blank_rows() {
        let csv_text = "Language Name,All Access Chapter Goal\nAmani,25\n,\nKari,260\n";
        let records = read_records(csv_text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn tolerates_ragged_rows() {
        let csv_text = "Language Name,All Access Status,All Access Chapter Goal\nAmani,Translation Not Started\n";
        let records = read_records(csv_text.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chapter_goal, None);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_records_from_path(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/data.csv"));
    }
}
