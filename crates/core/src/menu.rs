/// A top-level tour selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Exit,
    AgentCreator,
    ToolBuilder,
    KnowledgeBase,
    Ecommerce,
    Documentation,
    Configuration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub code: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub choice: MenuChoice,
}

/// Entries in display order. Exit is listed last even though its code is `0`.
pub const MENU_ENTRIES: [MenuEntry; 7] = [
    MenuEntry {
        code: "1",
        icon: "🤖",
        label: "Agent Creator - Generate AI agents",
        choice: MenuChoice::AgentCreator,
    },
    MenuEntry {
        code: "2",
        icon: "🛠️ ",
        label: "Tool Builder - Create custom tools",
        choice: MenuChoice::ToolBuilder,
    },
    MenuEntry {
        code: "3",
        icon: "📚",
        label: "Knowledge Base - RAG agent demo",
        choice: MenuChoice::KnowledgeBase,
    },
    MenuEntry {
        code: "4",
        icon: "🛒",
        label: "E-commerce - Customer service demo",
        choice: MenuChoice::Ecommerce,
    },
    MenuEntry {
        code: "5",
        icon: "📖",
        label: "Documentation - View setup guide",
        choice: MenuChoice::Documentation,
    },
    MenuEntry {
        code: "6",
        icon: "🔧",
        label: "Configuration - Check setup",
        choice: MenuChoice::Configuration,
    },
    MenuEntry { code: "0", icon: "🚪", label: "Exit", choice: MenuChoice::Exit },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Menu {
    entries: &'static [MenuEntry],
}

impl Default for Menu {
    fn default() -> Self {
        Self { entries: &MENU_ENTRIES }
    }
}

impl Menu {
    pub fn entries(&self) -> &'static [MenuEntry] {
        self.entries
    }

    /// Resolves one line of user input. Surrounding whitespace is ignored;
    /// anything else must match a code exactly.
    pub fn resolve(&self, input: &str) -> Option<MenuChoice> {
        let code = input.trim();
        self.entries.iter().find(|entry| entry.code == code).map(|entry| entry.choice)
    }

    /// Inclusive code range for prompts, e.g. `0-6`.
    pub fn code_range(&self) -> String {
        let mut codes: Vec<&str> = self.entries.iter().map(|entry| entry.code).collect();
        codes.sort_unstable();
        match (codes.first(), codes.last()) {
            (Some(first), Some(last)) => format!("{first}-{last}"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Menu, MenuChoice};

    #[test]
    fn every_code_resolves_to_its_choice() {
        let menu = Menu::default();
        let resolved: Vec<_> =
            ["0", "1", "2", "3", "4", "5", "6"].iter().map(|code| menu.resolve(code)).collect();

        assert_eq!(
            resolved,
            vec![
                Some(MenuChoice::Exit),
                Some(MenuChoice::AgentCreator),
                Some(MenuChoice::ToolBuilder),
                Some(MenuChoice::KnowledgeBase),
                Some(MenuChoice::Ecommerce),
                Some(MenuChoice::Documentation),
                Some(MenuChoice::Configuration),
            ]
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let menu = Menu::default();

        assert_eq!(menu.resolve("  3 \n"), Some(MenuChoice::KnowledgeBase));
        assert_eq!(menu.resolve("\t0\r\n"), Some(MenuChoice::Exit));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let menu = Menu::default();

        for input in ["", "   ", "7", "10", "01", "one", "1 2", "-1"] {
            assert_eq!(menu.resolve(input), None, "input {input:?} should be rejected");
        }
    }

    #[test]
    fn code_range_spans_all_entries() {
        assert_eq!(Menu::default().code_range(), "0-6");
    }
}
