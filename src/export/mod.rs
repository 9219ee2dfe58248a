//! Export module for the expense tracker
//!
//! Provides data export in multiple formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, write_expenses_csv, CSV_HEADER};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::DateRange;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (full export with metadata)
    Json,
    /// YAML format (full export, human-readable)
    Yaml,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Guess the format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Csv,
        }
    }
}

/// Write the expenses in `range` to an export file, returning how many
/// were written
pub fn export_to_file(
    storage: &Storage,
    path: &Path,
    format: ExportFormat,
    range: DateRange,
) -> ExpenseResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let count = match format {
        ExportFormat::Csv => export_expenses_csv(storage, &mut writer, range)?,
        ExportFormat::Json => export_full_json(storage, &mut writer, range, true)?,
        ExportFormat::Yaml => export_full_yaml(storage, &mut writer, range)?,
    };

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    tracing::info!(path = %path.display(), ?format, count, "export written");
    Ok(count)
}
