//! Confirmation dialog
//!
//! Simple yes/no confirmation for destructive actions

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, ConfirmAction};
use crate::tui::layout::centered_rect_fixed;

use super::dialog_frame;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_rect_fixed(50, 7, frame.area());
    let block = dialog_frame(frame, area, "Confirm", Color::Yellow);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            action.message(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key input while a confirmation is pending
pub fn handle_key(app: &mut App, action: ConfirmAction, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            app.run_confirmed(action);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            app.set_status("Cancelled");
        }
        _ => {}
    }
}
