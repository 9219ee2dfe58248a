//! Export dialog
//!
//! Asks for a destination path. The format follows the file extension and
//! defaults to CSV; the active date range limits what is written.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::export::{export_to_file, ExportFormat};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::expense::form_hints;
use super::{dialog_frame, dialog_inner};

/// State for the export dialog
#[derive(Debug, Clone)]
pub struct ExportFormState {
    pub path_input: TextInput,
    pub error_message: Option<String>,
}

impl ExportFormState {
    pub fn new(default_path: PathBuf) -> Self {
        let mut path_input = TextInput::new()
            .label("File")
            .placeholder("expenses.csv")
            .content(default_path.display().to_string());
        path_input.focused = true;
        Self {
            path_input,
            error_message: None,
        }
    }

    /// Destination path, or None when the field is blank
    pub fn path(&self) -> Option<PathBuf> {
        let raw = self.path_input.value().trim();
        (!raw.is_empty()).then(|| PathBuf::from(raw))
    }
}

/// Render the export dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let width = frame.area().width.saturating_sub(10).clamp(40, 90);
    let area = centered_rect_fixed(width, 8, frame.area());
    let block = dialog_frame(frame, area, "Export Expenses", Color::Cyan);
    frame.render_widget(block, area);
    let inner = dialog_inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Path
            Constraint::Length(1), // Range / format
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.export_form;
    frame.render_widget(&form.path_input, chunks[0]);

    let format = form
        .path()
        .map(|p| ExportFormat::from_path(&p))
        .unwrap_or(ExportFormat::Csv);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "{:>10}  {} ({})",
                "",
                format.extension().to_uppercase(),
                app.current_range()
            ),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[1],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[2],
        );
    }

    frame.render_widget(Paragraph::new(form_hints("Export")), chunks[4]);
}

/// Handle key input for the export dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => run_export(app),
        code => {
            app.export_form.error_message = None;
            return app.export_form.path_input.handle_key(code);
        }
    }
    true
}

fn run_export(app: &mut App) {
    let Some(path) = app.export_form.path() else {
        app.export_form.error_message = Some("Enter a file path.".to_string());
        return;
    };
    let format = ExportFormat::from_path(&path);

    match export_to_file(app.storage, &path, format, app.current_range()) {
        Ok(count) => {
            app.close_dialog();
            app.set_status(format!(
                "Exported {} expense(s) to {}",
                count,
                path.display()
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "export failed");
            app.export_form.error_message = Some(e.user_message());
            app.set_status("Export failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::models::{DateRange, Money, NewExpense};
    use crate::services::ExpenseService;
    use crate::storage::Storage;
    use crate::tui::app::ActiveDialog;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    #[test]
    fn test_blank_path_rejected() {
        let form = ExportFormState::new(PathBuf::new());
        assert!(form.path().is_none());
    }

    #[test]
    fn test_export_writes_csv() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        ExpenseService::new(&storage)
            .add(NewExpense::new(date, "Books", Money::from_cents(1999)).unwrap())
            .unwrap();

        let target = dir.path().join("out").join("mine.csv");
        app.open_dialog(ActiveDialog::Export);
        app.export_form = ExportFormState::new(target.clone());
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(!app.has_dialog());
        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.starts_with("ID,Date,Category,Amount"));
        assert!(written.contains("Books"));
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Exported 1 expense(s)"));
    }

    #[test]
    fn test_export_uses_active_range() {
        let dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(dir.path().to_path_buf());
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        let service = ExpenseService::new(&storage);
        for (day, category) in [(1, "Books"), (20, "Travel")] {
            let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
            service
                .add(NewExpense::new(date, category, Money::from_cents(500)).unwrap())
                .unwrap();
        }
        let june = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        service
            .add(NewExpense::new(june, "Rent", Money::from_cents(90000)).unwrap())
            .unwrap();

        app.set_date_filter(
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            )
            .unwrap(),
        );

        let target = dir.path().join("ranged.csv");
        app.open_dialog(ActiveDialog::Export);
        app.export_form = ExportFormState::new(target.clone());
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.contains("Travel"));
        assert!(!written.contains("Books"));
        assert!(!written.contains("Rent"));
        assert_eq!(written.lines().count(), 2);
    }
}
