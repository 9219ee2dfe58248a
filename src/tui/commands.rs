//! Command definitions for the command palette
//!
//! Defines all available commands that can be executed via the command palette

/// A command that can be executed
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Keyboard shortcut (if any)
    pub shortcut: Option<&'static str>,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    // Navigation
    ViewExpenses,
    ViewReports,
    ViewCharts,

    // Expense operations
    AddExpense,
    ToggleSelection,
    DeleteSelected,
    DeleteAll,

    // Filtering and output
    SetDateRange,
    ClearDateRange,
    Export,

    // General
    Help,
    Quit,
    Refresh,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "expenses",
        description: "View expense list",
        shortcut: Some("1"),
        action: CommandAction::ViewExpenses,
    },
    Command {
        name: "reports",
        description: "View spending report and recommendations",
        shortcut: Some("2"),
        action: CommandAction::ViewReports,
    },
    Command {
        name: "charts",
        description: "View spending charts",
        shortcut: Some("3"),
        action: CommandAction::ViewCharts,
    },
    Command {
        name: "add-expense",
        description: "Record a new expense",
        shortcut: Some("a"),
        action: CommandAction::AddExpense,
    },
    Command {
        name: "toggle-select",
        description: "Mark or unmark the highlighted expense",
        shortcut: Some("Space"),
        action: CommandAction::ToggleSelection,
    },
    Command {
        name: "delete-selected",
        description: "Delete marked or highlighted expenses",
        shortcut: Some("d"),
        action: CommandAction::DeleteSelected,
    },
    Command {
        name: "delete-all",
        description: "Delete every expense",
        shortcut: Some("D"),
        action: CommandAction::DeleteAll,
    },
    Command {
        name: "date-range",
        description: "Filter by date range",
        shortcut: Some("r"),
        action: CommandAction::SetDateRange,
    },
    Command {
        name: "clear-range",
        description: "Show expenses from all dates",
        shortcut: Some("R"),
        action: CommandAction::ClearDateRange,
    },
    Command {
        name: "export",
        description: "Export expenses to a file",
        shortcut: Some("e"),
        action: CommandAction::Export,
    },
    Command {
        name: "help",
        description: "Show help",
        shortcut: Some("?"),
        action: CommandAction::Help,
    },
    Command {
        name: "quit",
        description: "Quit application",
        shortcut: Some("q"),
        action: CommandAction::Quit,
    },
    Command {
        name: "refresh",
        description: "Reload data and clear selection",
        shortcut: Some("F5"),
        action: CommandAction::Refresh,
    },
];

/// Commands whose name or description contains the query (case-insensitive)
pub fn filter_commands(query: &str) -> Vec<&'static Command> {
    let query = query.to_lowercase();
    COMMANDS
        .iter()
        .filter(|cmd| {
            query.is_empty()
                || cmd.name.to_lowercase().contains(&query)
                || cmd.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_everything() {
        assert_eq!(filter_commands("").len(), COMMANDS.len());
    }

    #[test]
    fn test_filter_matches_name_and_description() {
        let names: Vec<_> = filter_commands("DELETE").iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["delete-selected", "delete-all"]);

        let by_description = filter_commands("spending");
        assert!(by_description.iter().any(|c| c.action == CommandAction::ViewCharts));
    }

    #[test]
    fn test_command_names_unique() {
        let mut names: Vec<_> = COMMANDS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
