//! CLI command for data export

use clap::Args;
use std::path::PathBuf;

use super::PeriodArgs;
use crate::config::TrackerPaths;
use crate::error::ExpenseResult;
use crate::export::{export_to_file, ExportFormat};
use crate::storage::Storage;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the exports directory)
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    #[command(flatten)]
    pub period: PeriodArgs,
}

/// Handle export command
pub fn handle_export_command(
    storage: &Storage,
    paths: &TrackerPaths,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let output = args.output.unwrap_or_else(|| {
        paths
            .exports_dir()
            .join(format!("expenses.{}", args.format.extension()))
    });

    let count = export_to_file(storage, &output, args.format, args.period.range()?)?;
    println!("Exported {} expense(s) to: {}", count, output.display());

    Ok(())
}
