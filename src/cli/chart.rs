//! CLI command for SVG charts

use clap::Args;
use std::path::PathBuf;

use super::PeriodArgs;
use crate::charts::{save_chart, ChartKind};
use crate::config::{Settings, TrackerPaths};
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Chart arguments
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Chart type
    #[arg(value_enum)]
    pub kind: ChartKind,

    /// Output SVG path (defaults to the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub period: PeriodArgs,
}

/// Handle chart command
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    paths: &TrackerPaths,
    args: ChartArgs,
) -> ExpenseResult<()> {
    let range = args.period.range()?;
    let output = args
        .output
        .unwrap_or_else(|| paths.exports_dir().join(args.kind.file_name()));

    save_chart(storage, args.kind, range, &settings.currency_symbol, &output)?;
    println!("Chart written to: {}", output.display());

    Ok(())
}
