//! Dialog modules for the TUI
//!
//! Contains modal dialogs for data entry and confirmation

pub mod command_palette;
pub mod confirm;
pub mod date_range;
pub mod expense;
pub mod export;
pub mod help;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Clear `area` and draw a titled dialog border in `color`
pub(crate) fn dialog_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Block<'static> {
    frame.render_widget(Clear, area);
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Area inside a dialog border with a one-column margin on each side
pub(crate) fn dialog_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}
