//! Expense CLI commands
//!
//! Implements CLI commands for adding, showing, deleting and listing expenses.

use clap::Subcommand;

use super::PeriodArgs;
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table, format_period_total};
use crate::error::ExpenseResult;
use crate::models::ExpenseId;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Category label (e.g. "Groceries")
        category: String,
        /// Amount spent (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show a single expense
    Show {
        /// Expense id
        id: String,
    },
    /// Delete expenses by id
    #[command(alias = "rm")]
    Delete {
        /// Expense ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Delete every expense and restart ids at 1
    DeleteAll {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List expenses
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        period: PeriodArgs,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Show only the most recent N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
        } => {
            let date = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format(crate::models::DATE_FORMAT)
                    .to_string()
            });
            let expense = service.add_from_input(&date, &category, &amount)?;
            println!(
                "Added expense {}: {} {} on {}",
                expense.id,
                expense.category,
                expense.amount.format_with_symbol(currency),
                expense.date
            );
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(id.parse()?)?;
            println!("{}", format_expense_details(&expense, currency));
        }

        ExpenseCommands::Delete { ids } => {
            let ids = ids
                .iter()
                .map(|s| s.parse::<ExpenseId>())
                .collect::<ExpenseResult<Vec<_>>>()?;
            let removed = service.delete(&ids)?;

            if removed == 0 {
                println!("No matching expenses found.");
            } else {
                println!("Deleted {} expense(s).", removed);
            }
        }

        ExpenseCommands::DeleteAll { force } => {
            let count = service.count()?;
            if !force {
                println!("This will permanently delete {} expense(s).", count);
                println!("Use --force to confirm deletion");
                return Ok(());
            }
            let removed = service.delete_all()?;
            println!("Deleted all {} expense(s).", removed);
        }

        ExpenseCommands::List {
            period,
            category,
            limit,
        } => {
            let range = period.range()?;
            let mut filter = period.filter()?;
            if let Some(category) = category {
                filter = filter.category(category);
            }

            // The total covers the whole period even when the listing is cut short
            let total = service.total(&filter)?;
            if let Some(n) = limit {
                filter = filter.limit(n);
            }
            let expenses = service.list(&filter)?;

            println!("{}", format_expense_table(&expenses, currency));
            println!("{}", format_period_total(&range, total, currency));
        }
    }

    Ok(())
}
