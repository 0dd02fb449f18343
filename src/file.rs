// src/file.rs

use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::Error;
use crate::extract::TableBundle;
use crate::params::ExportFormat;

/// A CSV read back into memory. Column names come from the file's first
/// line; files written without a header degrade to the first data row as
/// column names, same as any spreadsheet import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn ensure_directory(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Write the extraction result. Header line only when a header exists;
/// records follow in order. The file is created or truncated; parent
/// directories are created as needed. Returns the number of data rows.
pub fn write_table(path: &Path, bundle: &TableBundle, format: ExportFormat) -> Result<usize, Error> {
    ensure_parent(path)?;

    // flexible: records may be longer than the header (never truncated)
    let mut wtr = WriterBuilder::new()
        .delimiter(format.delim())
        .flexible(true)
        .from_path(path)?;

    if let Some(header) = &bundle.header {
        wtr.write_record(header)?;
    }
    for row in &bundle.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(bundle.rows.len())
}

/// Read a CSV produced by the scraper (or anything close enough).
pub fn read_dataset(path: &Path) -> Result<Dataset, Error> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let columns: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(String::from).collect());
    }
    Ok(Dataset { columns, rows })
}
