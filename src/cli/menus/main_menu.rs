use crate::cli::output;

/// Commands reachable from the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Remove,
    Summary,
    Exit,
}

struct MenuEntry {
    number: usize,
    choice: MenuChoice,
    description: &'static str,
}

/// The numbered main menu rendered at the top of every shell iteration.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                number: 1,
                choice: MenuChoice::Add,
                description: "Add expense",
            },
            MenuEntry {
                number: 2,
                choice: MenuChoice::View,
                description: "View expenses",
            },
            MenuEntry {
                number: 3,
                choice: MenuChoice::Remove,
                description: "Remove expense",
            },
            MenuEntry {
                number: 4,
                choice: MenuChoice::Summary,
                description: "Monthly summary",
            },
            MenuEntry {
                number: 5,
                choice: MenuChoice::Exit,
                description: "Exit",
            },
        ];
        Self { entries }
    }

    pub fn print(&self) {
        output::section("Expense Tracker");
        for entry in &self.entries {
            output::plain(format!("  {}) {}", entry.number, entry.description));
        }
    }

    /// Maps a typed selection to a menu choice; `None` for anything that is
    /// not one of the listed numbers.
    pub fn parse(&self, input: &str) -> Option<MenuChoice> {
        let number: usize = input.trim().parse().ok()?;
        self.entries
            .iter()
            .find(|entry| entry.number == number)
            .map(|entry| entry.choice)
    }

    pub fn prompt_label(&self) -> String {
        let last = self.entries.last().map(|entry| entry.number).unwrap_or(1);
        format!("Select an option (1-{last})")
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
