//! IO module for format-specific reading of record files.
//!
//! Each format module handles reading for a specific file format; this module
//! picks one by file extension and converts into typed records.
//!
//! # Format Modules
//!
//! - `csv` - CSV files with a header row naming the record fields (read through polars)
//! - `json` - JSON arrays of record objects (read through serde_json)

pub(crate) mod csv;
pub(crate) mod json;

use std::path::Path;

use anyhow::{Result, bail};

use crate::types::{County, State};

/// Supported on-disk formats for record files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Json,
}

impl RecordFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("csv") => Ok(RecordFormat::Csv),
            Some("json") => Ok(RecordFormat::Json),
            Some(other) => bail!("[io] Unsupported record file extension '.{other}': {}", path.display()),
            None => bail!("[io] Record file has no extension: {}", path.display()),
        }
    }
}

/// Read state records from `path`, in file order.
pub fn read_states(path: &Path) -> Result<Vec<State>> {
    match RecordFormat::from_path(path)? {
        RecordFormat::Csv => csv::states_from_frame(&csv::read_csv(path)?),
        RecordFormat::Json => json::read_json_records(path),
    }
}

/// Read county records from `path`, in file order.
pub fn read_counties(path: &Path) -> Result<Vec<County>> {
    match RecordFormat::from_path(path)? {
        RecordFormat::Csv => csv::counties_from_frame(&csv::read_csv(path)?),
        RecordFormat::Json => json::read_json_records(path),
    }
}
