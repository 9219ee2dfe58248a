//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

use super::dialog_frame;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());
    let block = dialog_frame(frame, area, "Help", Color::Cyan);

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Help lines for the current view
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line(":", "Open command palette"),
        key_line("1/2/3", "Expenses / Reports / Charts"),
        key_line("Tab", "Next view"),
        key_line("a", "Add expense"),
        key_line("r", "Set date range"),
        key_line("R", "Clear date range"),
        key_line("e", "Export to file"),
        Line::from(""),
    ];

    match view {
        ActiveView::Expenses => {
            lines.push(heading("Expenses"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("g/G", "Go to top/bottom"));
            lines.push(key_line("Space", "Mark/unmark expense"));
            lines.push(key_line("d", "Delete marked (or highlighted)"));
            lines.push(key_line("D", "Delete all expenses"));
        }
        ActiveView::Reports => {
            lines.push(heading("Reports"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Spending per category and month for the active date range,",
            ));
            lines.push(Line::from("followed by suggestions on where to cut back."));
        }
        ActiveView::Charts => {
            lines.push(heading("Charts"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Monthly totals and category shares for the active date range.",
            ));
            lines.push(Line::from("Use `expenses chart bar|pie` to save them as SVG."));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
