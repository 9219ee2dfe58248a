//! YAML Export functionality
//!
//! Exports the stored expenses to YAML for a human-readable backup.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::models::DateRange;
use crate::storage::Storage;
use std::io::Write;

/// Export the expenses in `range` to YAML, returning the number written
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    writer: &mut W,
    range: DateRange,
) -> ExpenseResult<usize> {
    let export = FullExport::from_storage(storage, range)?;

    let header = format!(
        "# Expense Tracker Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(export.metadata.expense_count)
}
