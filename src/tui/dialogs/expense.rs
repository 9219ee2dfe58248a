//! Add-expense dialog
//!
//! Three fields (date, category, amount). Validation problems are shown
//! inline and keep the form open so the user can correct them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::DATE_FORMAT;
use crate::services::ExpenseService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::{dialog_frame, dialog_inner};

/// Which field in the expense form is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Date,
    Category,
    Amount,
}

impl ExpenseField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub date_input: TextInput,
    pub category_input: TextInput,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a blank form with today's date filled in
    pub fn new() -> Self {
        let today = chrono::Local::now().date_naive();
        let mut state = Self {
            focused_field: ExpenseField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format(DATE_FORMAT).to_string()),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g. Groceries"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: ExpenseField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == ExpenseField::Date;
        self.category_input.focused = self.focused_field == ExpenseField::Category;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Date => &mut self.date_input,
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Amount => &mut self.amount_input,
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(56, 10, frame.area());
    let block = dialog_frame(frame, area, "Add Expense", Color::Cyan);
    frame.render_widget(block, area);
    let inner = dialog_inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(&form.date_input, chunks[0]);
    frame.render_widget(&form.category_input, chunks[1]);
    frame.render_widget(&form.amount_input, chunks[2]);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[4],
        );
    }

    frame.render_widget(Paragraph::new(form_hints("Save")), chunks[6]);
}

/// Key hints shared by the form dialogs
pub(crate) fn form_hints(action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", action)),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ])
}

/// Handle key input for the expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => save_expense(app),
        code => {
            form.clear_error();
            return form.focused_input().handle_key(code);
        }
    }
    true
}

/// Validate the form and store the expense
fn save_expense(app: &mut App) {
    let form = &app.expense_form;
    let result = ExpenseService::new(app.storage).add_from_input(
        form.date_input.value(),
        form.category_input.value(),
        form.amount_input.value(),
    );

    match result {
        Ok(expense) => {
            app.close_dialog();
            app.set_status(format!(
                "Added expense {}: {} {}",
                expense.id,
                expense.category,
                expense.amount.format_with_symbol(&app.settings.currency_symbol)
            ));
        }
        Err(e) if e.is_validation() => app.expense_form.set_error(e.user_message()),
        Err(e) => {
            tracing::error!(error = %e, "failed to save expense");
            app.expense_form.set_error(format!("Failed to save: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::storage::Storage;
    use crate::tui::app::ActiveDialog;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(ExpenseField::Date.next(), ExpenseField::Category);
        assert_eq!(ExpenseField::Amount.next(), ExpenseField::Date);
        assert_eq!(ExpenseField::Date.prev(), ExpenseField::Amount);
    }

    #[test]
    fn test_new_form_defaults_to_today() {
        let form = ExpenseFormState::new();
        let today = chrono::Local::now().date_naive().format(DATE_FORMAT).to_string();
        assert_eq!(form.date_input.value(), today);
        assert!(form.date_input.focused);
        assert!(!form.amount_input.focused);
    }

    #[test]
    fn test_invalid_amount_keeps_form_open() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.open_dialog(ActiveDialog::AddExpense);
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "Food");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "-5");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Invalid amount! Enter a positive number.")
        );

        // Typing clears the error
        handle_key(&mut app, key(KeyCode::Backspace));
        assert!(app.expense_form.error_message.is_none());
    }

    #[test]
    fn test_empty_category_rejected() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form.set_focus(ExpenseField::Amount);
        type_text(&mut app, "12.50");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Category cannot be empty.")
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form.date_input = TextInput::new().content("2024-02-30");
        app.expense_form.category_input = TextInput::new().content("Food");
        app.expense_form.amount_input = TextInput::new().content("3");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Invalid date! Use YYYY-MM-DD format.")
        );
    }

    #[test]
    fn test_valid_expense_saved() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form.date_input = TextInput::new().content("2024-01-15");
        app.expense_form.category_input = TextInput::new().content("Groceries");
        app.expense_form.amount_input = TextInput::new().content("42.10");
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Added expense 1: Groceries $42.10")
        );
        assert_eq!(ExpenseService::new(&storage).count().unwrap(), 1);
    }
}
