//! Reports view
//!
//! Category and month breakdown of the active range plus recommendations

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::display::{format_bar, format_percentage, truncate};
use crate::reports::{RecommendationReport, SpendingReport};
use crate::tui::app::App;
use crate::tui::layout::split_columns;

const BAR_WIDTH: usize = 20;

/// Render the reports view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let report = match SpendingReport::generate(app.storage, app.current_range()) {
        Ok(report) => report,
        Err(e) => {
            let text = Paragraph::new(format!("Failed to build report: {}", e))
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(text, area);
            return;
        }
    };

    let (left, right) = split_columns(area, 62);
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(left);

    render_categories(frame, app, &report, left_chunks[0]);
    render_months(frame, app, &report, left_chunks[1]);
    render_recommendations(frame, app, &report, right);
}

fn titled_block(title: String) -> Block<'static> {
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

fn render_categories(frame: &mut Frame, app: &App, report: &SpendingReport, area: Rect) {
    let currency = app.settings.currency_symbol.as_str();
    let block = titled_block(format!(
        " Spending by Category: {} ",
        report.total_spending.format_with_symbol(currency)
    ));

    if report.is_empty() {
        let text = Paragraph::new("No expenses in this period.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let max = report
        .categories
        .first()
        .map(|c| c.total.cents() as f64)
        .unwrap_or(0.0);

    let header = Row::new(vec!["Category", "Amount", "%", ""])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let rows: Vec<Row> = report
        .categories
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(truncate(&c.category, 24)),
                Cell::from(Line::from(c.total.format_with_symbol(currency)).right_aligned()),
                Cell::from(Line::from(format_percentage(c.percentage)).right_aligned()),
                Cell::from(format_bar(c.total.cents() as f64, max, BAR_WIDTH))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(BAR_WIDTH as u16),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

fn render_months(frame: &mut Frame, app: &App, report: &SpendingReport, area: Rect) {
    let currency = app.settings.currency_symbol.as_str();
    let block = titled_block(" Spending by Month ".to_string());

    let header = Row::new(vec!["Month", "Amount", "Count"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = report
        .months
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(m.month.clone()),
                Cell::from(Line::from(m.total.format_with_symbol(currency)).right_aligned()),
                Cell::from(Line::from(m.expense_count.to_string()).right_aligned()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(7),
    ];

    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn render_recommendations(frame: &mut Frame, app: &App, report: &SpendingReport, area: Rect) {
    let recommendations = RecommendationReport::from_settings(report, app.settings);
    let color = if recommendations.triggered.is_empty() {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut lines = Vec::new();
    for message in recommendations.messages() {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(color)),
            Span::raw(message),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(titled_block(" Recommendations ".to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
