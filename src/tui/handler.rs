//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the active view.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::commands::{filter_commands, CommandAction};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status(Instant::now());
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing | InputMode::Command => {
            // No dialog owns the input any more
            app.input_mode = InputMode::Normal;
            Ok(())
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char(':') | KeyCode::Char('/') => app.open_dialog(ActiveDialog::CommandPalette),

        KeyCode::Char('1') => app.switch_view(ActiveView::Expenses),
        KeyCode::Char('2') => app.switch_view(ActiveView::Reports),
        KeyCode::Char('3') => app.switch_view(ActiveView::Charts),
        KeyCode::Tab => {
            let next = match app.active_view {
                ActiveView::Expenses => ActiveView::Reports,
                ActiveView::Reports => ActiveView::Charts,
                ActiveView::Charts => ActiveView::Expenses,
            };
            app.switch_view(next);
        }

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('r') => app.open_dialog(ActiveDialog::DateRange),
        KeyCode::Char('R') => execute_command_action(app, CommandAction::ClearDateRange)?,
        KeyCode::Char('e') => app.open_dialog(ActiveDialog::Export),
        KeyCode::F(5) => execute_command_action(app, CommandAction::Refresh)?,

        _ if app.active_view == ActiveView::Expenses => handle_expenses_view_key(app, key)?,
        _ => {}
    }
    Ok(())
}

/// Handle keys in the expenses view
fn handle_expenses_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let expenses = app.visible_expenses()?;

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(expenses.len()),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_to_end(expenses.len()),
        KeyCode::Char(' ') => {
            app.toggle_selection(&expenses);
            app.move_down(expenses.len());
        }
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('D') => app.request_delete_all(),
        KeyCode::Esc if !app.selected_expenses.is_empty() => {
            app.selected_expenses.clear();
            app.set_status("Selection cleared");
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys in the command palette
fn handle_command_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let filtered = filter_commands(&app.command_input);
            let action = filtered
                .get(
                    app.selected_command_index
                        .min(filtered.len().saturating_sub(1)),
                )
                .map(|cmd| cmd.action);

            app.close_dialog();
            if let Some(action) = action {
                execute_command_action(app, action)?;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
            app.selected_command_index = 0;
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            app.selected_command_index = 0;
        }
        KeyCode::Up => {
            app.selected_command_index = app.selected_command_index.saturating_sub(1);
        }
        KeyCode::Down => {
            let count = filter_commands(&app.command_input).len();
            if app.selected_command_index + 1 < count {
                app.selected_command_index += 1;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Execute a command action from the command palette
fn execute_command_action(app: &mut App, action: CommandAction) -> Result<()> {
    match action {
        CommandAction::ViewExpenses => app.switch_view(ActiveView::Expenses),
        CommandAction::ViewReports => app.switch_view(ActiveView::Reports),
        CommandAction::ViewCharts => app.switch_view(ActiveView::Charts),

        CommandAction::AddExpense => app.open_dialog(ActiveDialog::AddExpense),
        CommandAction::ToggleSelection => {
            let expenses = app.visible_expenses()?;
            app.toggle_selection(&expenses);
        }
        CommandAction::DeleteSelected => app.request_delete_selected(),
        CommandAction::DeleteAll => app.request_delete_all(),

        CommandAction::SetDateRange => app.open_dialog(ActiveDialog::DateRange),
        CommandAction::ClearDateRange => {
            app.clear_date_filter();
            app.set_status("Showing all expenses");
        }
        CommandAction::Export => app.open_dialog(ActiveDialog::Export),

        CommandAction::Help => app.open_dialog(ActiveDialog::Help),
        CommandAction::Quit => app.quit(),
        CommandAction::Refresh => {
            app.selected_expenses.clear();
            let len = app.visible_expenses()?.len();
            app.clamp_selection(len);
            app.set_status("Data refreshed");
        }
    }
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::CommandPalette => handle_command_key(app, key)?,
        ActiveDialog::Confirm(action) => dialogs::confirm::handle_key(app, action, key),
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::DateRange => {
            dialogs::date_range::handle_key(app, key);
        }
        ActiveDialog::Export => {
            dialogs::export::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}
