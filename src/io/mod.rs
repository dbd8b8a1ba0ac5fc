pub mod ingest;
pub mod output;

pub use ingest::{read_records, read_records_from_path, IngestError};
pub use output::{create_writer, OutputFormat, OutputWriter};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
