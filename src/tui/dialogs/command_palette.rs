//! Command palette dialog
//!
//! Type to narrow the command list, Enter runs the highlighted command

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::commands::filter_commands;
use crate::tui::layout::centered_rect_fixed;

use super::dialog_frame;

/// Render the command palette
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(64, 20, frame.area());
    let block = dialog_frame(frame, area, "Command Palette", Color::Cyan);
    frame.render_widget(block, area);

    let input_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(app.command_input.clone(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let results_area = Rect {
        x: area.x + 1,
        y: area.y + 3,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(4),
    };

    let filtered = filter_commands(&app.command_input);
    if filtered.is_empty() {
        let text =
            Paragraph::new("No matching commands").style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, results_area);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|cmd| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", cmd.name), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:<7}", cmd.shortcut.unwrap_or("")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(cmd.description, Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(
        app.selected_command_index
            .min(filtered.len().saturating_sub(1)),
    ));

    frame.render_stateful_widget(list, results_area, &mut state);
}
