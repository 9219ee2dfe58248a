//! Status bar view
//!
//! Shows the active range, the total expense count, the last status
//! message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::ExpenseService;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let count = ExpenseService::new(app.storage).count().unwrap_or(0);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.current_range()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│ "),
        Span::styled(
            format!("{} stored", count),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(ref message) = app.status_message {
        let color = if message.starts_with("Failed") || message.ends_with("failed") {
            Color::Red
        } else {
            Color::Yellow
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(color)));
    }

    let hints = " q:Quit  ?:Help  ::Command ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
