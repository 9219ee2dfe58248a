//! CLI commands for reports
//!
//! Provides the spending summary and the recommendations.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::PeriodArgs;
use crate::config::Settings;
use crate::display::{format_category_bars, format_percentage};
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{RecommendationReport, SpendingReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Summarize spending by category and month
    Report {
        #[command(flatten)]
        period: PeriodArgs,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Draw category shares as bars
        #[arg(long)]
        bars: bool,
    },

    /// Suggest where to cut back
    #[command(alias = "recommendations")]
    Recommend {
        #[command(flatten)]
        period: PeriodArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Report {
            period,
            output,
            top,
            bars,
        } => handle_spending_report(storage, settings, period, output, top, bars),
        ReportCommands::Recommend { period } => handle_recommendations(storage, settings, period),
    }
}

/// Handle spending report
fn handle_spending_report(
    storage: &Storage,
    settings: &Settings,
    period: PeriodArgs,
    output: Option<PathBuf>,
    top: Option<usize>,
    bars: bool,
) -> ExpenseResult<()> {
    let report = SpendingReport::generate(storage, period.range()?)?;
    let currency = settings.currency_symbol.as_str();

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Spending report exported to: {}", path.display());
    } else if let Some(n) = top {
        println!("Top {} Spending Categories: {}\n", n, report.range);
        println!("{:<35} {:>12} {:>8}", "Category", "Amount", "%");
        println!("{}", "-".repeat(58));

        for cat in report.top_categories(n) {
            println!(
                "{:<35} {:>12} {:>8}",
                cat.category,
                cat.total.format_with_symbol(currency),
                format_percentage(cat.percentage)
            );
        }
        println!(
            "\nTotal Spending: {}",
            report.total_spending.format_with_symbol(currency)
        );
    } else if bars {
        println!("Spending by Category: {}\n", report.range);
        print!("{}", format_category_bars(&report, currency, 30));
        println!(
            "Total Spending: {}",
            report.total_spending.format_with_symbol(currency)
        );
    } else {
        println!("{}", report.format_terminal(currency));
    }

    Ok(())
}

/// Handle recommendations
fn handle_recommendations(
    storage: &Storage,
    settings: &Settings,
    period: PeriodArgs,
) -> ExpenseResult<()> {
    let report = SpendingReport::generate(storage, period.range()?)?;
    let recommendations = RecommendationReport::from_settings(&report, settings);

    print!("{}", recommendations.format_terminal());
    Ok(())
}
