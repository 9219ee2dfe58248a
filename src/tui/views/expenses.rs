//! Expenses view
//!
//! Table of stored expenses for the active date range with the period
//! total underneath

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_period_total, truncate};
use crate::models::{Expense, Money};
use crate::tui::app::App;
use crate::tui::layout::ExpensesLayout;

/// Render the expenses view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ExpensesLayout::new(area);

    let expenses = match app.visible_expenses() {
        Ok(expenses) => expenses,
        Err(e) => {
            let text = Paragraph::new(format!("Failed to load expenses: {}", e))
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(text, area);
            return;
        }
    };
    app.clamp_selection(expenses.len());

    render_table(frame, app, &expenses, layout.table);
    render_footer(frame, app, &expenses, layout.footer);
}

fn render_table(frame: &mut Frame, app: &App, expenses: &[Expense], area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.current_range()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Mark
        Constraint::Length(6),  // ID
        Constraint::Length(12), // Date
        Constraint::Min(16),    // Category
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("ID").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from(Line::from("Amount").right_aligned()).style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let currency = app.settings.currency_symbol.as_str();

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let marked = app.selected_expenses.contains(&expense.id);
            let row = Row::new(vec![
                Cell::from(if marked { "■" } else { " " }),
                Cell::from(expense.id.to_string()),
                Cell::from(app.settings.format_date(expense.date)),
                Cell::from(truncate(&expense.category, 40)),
                Cell::from(
                    Line::from(expense.amount.format_with_symbol(currency)).right_aligned(),
                ),
            ]);
            if marked {
                row.style(Style::default().fg(Color::Magenta))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, expenses: &[Expense], area: Rect) {
    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let currency = app.settings.currency_symbol.as_str();

    let mut spans = vec![
        Span::styled(
            format_period_total(&app.current_range(), total, currency),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  ({} expenses)", expenses.len())),
    ];
    if !app.selected_expenses.is_empty() {
        spans.push(Span::styled(
            format!("  {} marked", app.selected_expenses.len()),
            Style::default().fg(Color::Magenta),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}
