//! Date range dialog
//!
//! Start and end dates typed as YYYY-MM-DD. Applying the range filters the
//! expenses table, the reports and the charts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::error::ExpenseResult;
use crate::models::{parse_date, DateRange, DATE_FORMAT};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::expense::form_hints;
use super::{dialog_frame, dialog_inner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeField {
    #[default]
    Start,
    End,
}

/// State for the date range dialog
#[derive(Debug, Clone)]
pub struct DateRangeFormState {
    pub focused_field: DateRangeField,
    pub start_input: TextInput,
    pub end_input: TextInput,
    pub error_message: Option<String>,
}

impl DateRangeFormState {
    /// Prefill with the active filter, or the current month so far
    pub fn new(current: Option<DateRange>) -> Self {
        let range = current.unwrap_or_else(DateRange::month_to_date);
        let mut state = Self {
            focused_field: DateRangeField::Start,
            start_input: TextInput::new()
                .label("From")
                .placeholder("YYYY-MM-DD")
                .content(range.start.format(DATE_FORMAT).to_string()),
            end_input: TextInput::new()
                .label("To")
                .placeholder("YYYY-MM-DD")
                .content(range.end.format(DATE_FORMAT).to_string()),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn toggle_field(&mut self) {
        self.focused_field = match self.focused_field {
            DateRangeField::Start => DateRangeField::End,
            DateRangeField::End => DateRangeField::Start,
        };
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.start_input.focused = self.focused_field == DateRangeField::Start;
        self.end_input.focused = self.focused_field == DateRangeField::End;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            DateRangeField::Start => &mut self.start_input,
            DateRangeField::End => &mut self.end_input,
        }
    }

    /// Parse both fields into a range
    pub fn build(&self) -> ExpenseResult<DateRange> {
        let start = parse_date(self.start_input.value())?;
        let end = parse_date(self.end_input.value())?;
        DateRange::new(start, end)
    }
}

/// Render the date range dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(50, 9, frame.area());
    let block = dialog_frame(frame, area, "Date Range", Color::Cyan);
    frame.render_widget(block, area);
    let inner = dialog_inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // From
            Constraint::Length(1), // To
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Length(1), // Clear hint
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.date_range_form;
    frame.render_widget(&form.start_input, chunks[0]);
    frame.render_widget(&form.end_input, chunks[1]);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[3],
        );
    }

    frame.render_widget(Paragraph::new(form_hints("Apply")), chunks[4]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[Ctrl+r]", Style::default().fg(Color::Yellow)),
            Span::raw(" Show all dates"),
        ])),
        chunks[5],
    );
}

/// Handle key input for the date range dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.date_range_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.close_dialog();
            app.clear_date_filter();
            app.set_status("Showing all expenses");
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
        KeyCode::Enter => match form.build() {
            Ok(range) => {
                app.close_dialog();
                app.set_date_filter(range);
                app.set_status(format!("Showing expenses from {}", range));
            }
            Err(e) => form.error_message = Some(e.user_message()),
        },
        code => {
            form.error_message = None;
            return form.focused_input().handle_key(code);
        }
    }
    true
}
