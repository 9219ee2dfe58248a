use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_chart_command, handle_expense_command, handle_export_command, handle_report_command,
    ChartArgs, ExpenseCommands, ExportArgs, ReportCommands,
};
use expense_tracker::config::logging::{init_tracing, LogTarget};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker with reports and charts",
    long_about = "Record daily expenses, review spending by category and month, \
                  get suggestions on where to cut back, and export your data or \
                  charts. Runs the interactive interface when no command is given."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Export expenses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Render a spending chart as SVG
    Chart(ChartArgs),

    /// Create the data directory, default settings and database
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let log_target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::File,
        Some(_) => LogTarget::Stderr,
    };
    init_tracing(&paths, log_target);

    match cli.command {
        None | Some(Commands::Tui) => {
            let settings = expense_tracker::storage::initialize_storage(&paths)?;
            let storage = Storage::new(&paths)?;
            expense_tracker::tui::run_tui(&storage, &settings, &paths)?;
        }
        Some(Commands::Expense(cmd)) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::new(&paths)?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::new(&paths)?;
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let storage = Storage::new(&paths)?;
            handle_export_command(&storage, &paths, args)?;
        }
        Some(Commands::Chart(args)) => {
            let settings = Settings::load_or_create(&paths)?;
            let storage = Storage::new(&paths)?;
            handle_chart_command(&storage, &settings, &paths, args)?;
        }
        Some(Commands::Init) => {
            if expense_tracker::storage::needs_initialization(&paths) {
                println!("Initializing expense tracker at: {}", paths.base_dir().display());
            } else {
                println!("Already initialized at: {}", paths.base_dir().display());
            }
            let settings = expense_tracker::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Recommendation rules:");
            for rule in &settings.recommendation_rules {
                println!("  - {} above {}%", rule.label, rule.threshold_percent);
            }
            println!();
            println!("Run 'expenses add <category> <amount>' to record an expense.");
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Database:         {}", paths.database_file().display());
            println!("Exports:          {}", paths.exports_dir().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recommendation rules:");
            for rule in &settings.recommendation_rules {
                println!(
                    "    {} (matches '{}') above {}%",
                    rule.label, rule.pattern, rule.threshold_percent
                );
            }
        }
    }

    Ok(())
}
