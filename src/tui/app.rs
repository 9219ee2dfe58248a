//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Expense data is not cached here; views query the store on every draw so
//! what is shown always matches the database.

use std::time::{Duration, Instant};

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::models::{DateRange, Expense, ExpenseId};
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

use super::dialogs::date_range::DateRangeFormState;
use super::dialogs::expense::{ExpenseField, ExpenseFormState};
use super::dialogs::export::ExportFormState;

/// How long a status message stays visible
pub const STATUS_TTL: Duration = Duration::from_secs(6);

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Expenses,
    Reports,
    Charts,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [Self::Expenses, Self::Reports, Self::Charts];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Reports => "Reports",
            Self::Charts => "Charts",
        }
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
    Command,
}

/// A destructive action waiting for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteSelected(Vec<ExpenseId>),
    DeleteAll,
}

impl ConfirmAction {
    /// Question shown in the confirmation dialog
    pub fn message(&self) -> String {
        match self {
            Self::DeleteSelected(ids) if ids.len() == 1 => {
                format!("Delete expense {}?", ids[0])
            }
            Self::DeleteSelected(ids) => format!("Delete {} selected expenses?", ids.len()),
            Self::DeleteAll => "Delete ALL expenses? This cannot be undone.".to_string(),
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    DateRange,
    Export,
    CommandPalette,
    Help,
    Confirm(ConfirmAction),
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a TrackerPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Highlighted row in the expenses table
    pub selected_index: usize,

    /// Expenses marked with Space for deletion
    pub selected_expenses: Vec<ExpenseId>,

    /// Date range applied to the expenses table, reports and charts
    pub date_filter: Option<DateRange>,

    /// Status message to display
    pub status_message: Option<String>,

    status_set_at: Option<Instant>,

    /// Command palette input
    pub command_input: String,

    /// Selected command index in palette
    pub selected_command_index: usize,

    pub expense_form: ExpenseFormState,
    pub date_range_form: DateRangeFormState,
    pub export_form: ExportFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings, paths: &'a TrackerPaths) -> Self {
        Self {
            storage,
            settings,
            paths,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            selected_expenses: Vec::new(),
            date_filter: None,
            status_message: None,
            status_set_at: None,
            command_input: String::new(),
            selected_command_index: 0,
            expense_form: ExpenseFormState::new(),
            date_range_form: DateRangeFormState::new(None),
            export_form: ExportFormState::new(paths.exports_dir().join("expenses.csv")),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_at = None;
    }

    /// Drop the status message once it has been visible long enough
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(set_at) = self.status_set_at {
            if now.duration_since(set_at) >= STATUS_TTL {
                self.clear_status();
            }
        }
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::CommandPalette => {
                self.command_input.clear();
                self.selected_command_index = 0;
                self.input_mode = InputMode::Command;
            }
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new();
                self.expense_form.set_focus(ExpenseField::Date);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::DateRange => {
                self.date_range_form = DateRangeFormState::new(self.date_filter);
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::Export => {
                let path = self.export_form.path_input.value().to_string();
                self.export_form = ExportFormState::new(path.into());
                self.input_mode = InputMode::Editing;
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Range used by every view; all time when no filter is set
    pub fn current_range(&self) -> DateRange {
        self.date_filter.unwrap_or_else(DateRange::all_time)
    }

    /// Filter for the expenses table
    pub fn filter(&self) -> ExpenseFilter {
        match self.date_filter {
            Some(range) => ExpenseFilter::new().date_range(range.start, range.end),
            None => ExpenseFilter::new(),
        }
    }

    /// Expenses shown in the table, oldest first
    pub fn visible_expenses(&self) -> ExpenseResult<Vec<Expense>> {
        ExpenseService::new(self.storage).list(&self.filter())
    }

    /// Apply a date range filter to every view
    pub fn set_date_filter(&mut self, range: DateRange) {
        self.date_filter = Some(range);
        self.selected_index = 0;
        self.selected_expenses.clear();
    }

    /// Show every expense again
    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
        self.selected_index = 0;
        self.selected_expenses.clear();
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Jump to the last row
    pub fn move_to_end(&mut self, len: usize) {
        self.selected_index = len.saturating_sub(1);
    }

    /// Keep the highlight inside the table after rows disappear
    pub fn clamp_selection(&mut self, len: usize) {
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Mark or unmark the highlighted expense
    pub fn toggle_selection(&mut self, expenses: &[Expense]) {
        if let Some(expense) = expenses.get(self.selected_index) {
            if self.selected_expenses.contains(&expense.id) {
                self.selected_expenses.retain(|&id| id != expense.id);
            } else {
                self.selected_expenses.push(expense.id);
            }
        }
    }

    /// Marked expenses, or the highlighted one when nothing is marked
    pub fn deletion_targets(&self, expenses: &[Expense]) -> Vec<ExpenseId> {
        if !self.selected_expenses.is_empty() {
            return expenses
                .iter()
                .map(|e| e.id)
                .filter(|id| self.selected_expenses.contains(id))
                .collect();
        }
        expenses
            .get(self.selected_index)
            .map(|e| vec![e.id])
            .unwrap_or_default()
    }

    /// Ask for confirmation before deleting the marked or highlighted rows
    pub fn request_delete_selected(&mut self) {
        let expenses = match self.visible_expenses() {
            Ok(expenses) => expenses,
            Err(e) => {
                self.set_status(format!("Failed to load expenses: {}", e));
                return;
            }
        };
        let targets = self.deletion_targets(&expenses);
        if targets.is_empty() {
            self.set_status("No expense selected");
        } else {
            self.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteSelected(targets)));
        }
    }

    /// Ask for confirmation before wiping the store
    pub fn request_delete_all(&mut self) {
        match ExpenseService::new(self.storage).count() {
            Ok(0) => self.set_status("No expenses to delete"),
            Ok(_) => self.open_dialog(ActiveDialog::Confirm(ConfirmAction::DeleteAll)),
            Err(e) => self.set_status(format!("Failed to count expenses: {}", e)),
        }
    }

    /// Carry out a confirmed action and report the result in the status bar
    pub fn run_confirmed(&mut self, action: ConfirmAction) {
        let service = ExpenseService::new(self.storage);
        let result = match &action {
            ConfirmAction::DeleteSelected(ids) => service.delete(ids),
            ConfirmAction::DeleteAll => service.delete_all(),
        };

        match result {
            Ok(0) => self.set_status("No matching expenses found"),
            Ok(n) => {
                self.selected_expenses.clear();
                self.set_status(format!("Deleted {} expense(s)", n));
            }
            Err(e) => {
                tracing::error!(error = %e, "delete failed");
                self.set_status(format!("Failed to delete: {}", e));
            }
        }

        let remaining = self.visible_expenses().map(|e| e.len()).unwrap_or(0);
        self.clamp_selection(remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewExpense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn seed(storage: &Storage, day: u32, category: &str, cents: i64) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        let expense = NewExpense::new(date, category, Money::from_cents(cents)).unwrap();
        ExpenseService::new(storage).add(expense).unwrap()
    }

    #[test]
    fn test_open_and_close_dialog() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.open_dialog(ActiveDialog::AddExpense);
        assert!(app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Editing);

        app.close_dialog();
        assert!(!app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_deletion_targets_prefer_marked_rows() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        let a = seed(&storage, 1, "Food", 1000);
        let b = seed(&storage, 2, "Rent", 50000);
        let expenses = app.visible_expenses().unwrap();

        assert_eq!(app.deletion_targets(&expenses), vec![a.id]);

        app.move_down(expenses.len());
        app.toggle_selection(&expenses);
        assert_eq!(app.deletion_targets(&expenses), vec![b.id]);

        app.toggle_selection(&expenses);
        assert!(app.selected_expenses.is_empty());
    }

    #[test]
    fn test_confirmed_delete_updates_status_and_selection() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        seed(&storage, 1, "Food", 1000);
        let last = seed(&storage, 2, "Rent", 50000);
        app.selected_index = 1;

        app.request_delete_selected();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(ConfirmAction::DeleteSelected(vec![last.id]))
        );

        app.close_dialog();
        app.run_confirmed(ConfirmAction::DeleteSelected(vec![last.id]));
        assert_eq!(app.status_message.as_deref(), Some("Deleted 1 expense(s)"));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_delete_all_requires_expenses() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.request_delete_all();
        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("No expenses to delete"));

        seed(&storage, 1, "Food", 1000);
        app.request_delete_all();
        assert_eq!(app.active_dialog, ActiveDialog::Confirm(ConfirmAction::DeleteAll));

        app.run_confirmed(ConfirmAction::DeleteAll);
        assert!(app.visible_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_date_filter_limits_visible_expenses() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        seed(&storage, 1, "Food", 1000);
        seed(&storage, 20, "Rent", 50000);

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap();
        app.set_date_filter(range);
        assert_eq!(app.visible_expenses().unwrap().len(), 1);

        app.clear_date_filter();
        assert_eq!(app.visible_expenses().unwrap().len(), 2);
        assert!(app.current_range().is_all_time());
    }

    #[test]
    fn test_status_expires() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.set_status("Saved");
        app.expire_status(Instant::now());
        assert!(app.status_message.is_some());

        app.expire_status(Instant::now() + STATUS_TTL);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_confirm_messages() {
        assert_eq!(
            ConfirmAction::DeleteSelected(vec![ExpenseId::new(7)]).message(),
            "Delete expense 7?"
        );
        assert_eq!(
            ConfirmAction::DeleteSelected(vec![ExpenseId::new(1), ExpenseId::new(2)]).message(),
            "Delete 2 selected expenses?"
        );
    }
}
