use owo_colors::OwoColorize;
use std::fmt;

/// The central theme definition for the toolbox CLI.
pub struct Theme;

impl Theme {
    /// Primary "Directory" color (blue) - headings, tool names.
    pub fn primary(text: impl fmt::Display) -> String {
        format!("{}", text.blue().bold())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        format!("{}", text.bold())
    }

    /// Secondary "Category" color (magenta) - categories, counts.
    pub fn secondary(text: impl fmt::Display) -> String {
        format!("{}", text.magenta().bold())
    }

    /// Success color (green) - active tools, completed actions.
    pub fn success(text: impl fmt::Display) -> String {
        format!("{}", text.green().bold())
    }

    /// Warning color (yellow) - coming-soon tools, degraded actions.
    pub fn warning(text: impl fmt::Display) -> String {
        format!("{}", text.yellow().bold())
    }

    /// Error color (red)
    pub fn error(text: impl fmt::Display) -> String {
        format!("{}", text.red().bold())
    }

    /// Muted/dimmed color - metadata, timestamps, hints.
    pub fn muted(text: impl fmt::Display) -> String {
        format!("{}", text.dimmed())
    }
}

/// Standardized icons.
/// Usage: `println!("{} Searching...", Icon::Search)`
pub enum Icon {
    Toolbox,
    Search,
    Star,
    Clock,
    Database,
    Link,
    Gear,
    Whale,
    File,
    Check,
    Cross,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Toolbox => "🧰",
            Icon::Search => "🔍",
            Icon::Star => "⭐",
            Icon::Clock => "🕘",
            Icon::Database => "💾",
            Icon::Link => "🔗",
            Icon::Gear => "⚙️ ",
            Icon::Whale => "🐳",
            Icon::File => "📄",
            Icon::Check => "✔",
            Icon::Cross => "✖",
        };
        write!(f, "{}", icon)
    }
}
