//! Charts view
//!
//! Monthly totals as vertical bars and category shares as horizontal bars.
//! The SVG versions are written by the `chart` command.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::truncate;
use crate::reports::SpendingReport;
use crate::tui::app::App;
use crate::tui::layout::split_columns;

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Render the charts view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let report = match SpendingReport::generate(app.storage, app.current_range()) {
        Ok(report) => report,
        Err(e) => {
            let text = Paragraph::new(format!("Failed to build charts: {}", e))
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(text, area);
            return;
        }
    };

    let (left, right) = split_columns(area, 55);
    let currency = app.settings.currency_symbol.as_str();

    if report.is_empty() {
        for (rect, title) in [(left, " Monthly Spending "), (right, " Category Share ")] {
            let text = Paragraph::new("No expenses in this period.")
                .block(chart_block(title))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, rect);
        }
        return;
    }

    render_monthly(frame, &report, currency, left);
    render_shares(frame, &report, right);
}

fn chart_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_monthly(frame: &mut Frame, report: &SpendingReport, currency: &str, area: Rect) {
    let bars: Vec<Bar> = report
        .months
        .iter()
        .map(|m| {
            Bar::default()
                .value(m.total.cents().max(0) as u64)
                .text_value(format!("{}{}", currency, m.total.units()))
                .label(Line::from(m.month.clone()))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(" Monthly Spending "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}

fn render_shares(frame: &mut Frame, report: &SpendingReport, area: Rect) {
    let bars: Vec<Bar> = report
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::default()
                // tenths of a percent keep small shares visible
                .value((c.percentage * 10.0).round().max(0.0) as u64)
                .text_value(format!("{:.1}%", c.percentage))
                .label(Line::from(truncate(&c.category, 14)))
                .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(" Category Share "))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .max(1000);

    frame.render_widget(chart, area);
}
