//! Theme system for lapwatch.
//!
//! Provides preset color schemes that can be selected by the user.

use ratatui::style::Color;

/// A color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Unique identifier for the theme.
    pub id: &'static str,
    /// Display name for the theme.
    pub name: &'static str,

    // Semantic colors
    /// Primary color for the selected row and action keys.
    pub primary: Color,
    /// Secondary color for titles and the music bar.
    pub secondary: Color,
    /// Normal text content.
    pub text: Color,
    /// Dimmed text for footers and unselected rows.
    pub dimmed: Color,
    /// Time display of a running stopwatch.
    pub running: Color,
    /// Time display of a paused stopwatch.
    pub paused: Color,
}

/// Default theme.
pub const DEFAULT: Theme = Theme {
    id: "default",
    name: "Default",
    primary: Color::Yellow,
    secondary: Color::Cyan,
    text: Color::White,
    dimmed: Color::DarkGray,
    running: Color::Green,
    paused: Color::Gray,
};

/// Dark theme - warm gold and cool blue for high contrast.
pub const DARK: Theme = Theme {
    id: "dark",
    name: "Dark",
    primary: Color::Rgb(255, 215, 0),     // Gold
    secondary: Color::Rgb(100, 149, 237), // Cornflower blue
    text: Color::Rgb(220, 220, 220),      // Light gray
    dimmed: Color::Rgb(128, 128, 128),    // Gray
    running: Color::Rgb(50, 205, 50),     // Lime green
    paused: Color::Rgb(169, 169, 169),    // Dark gray
};

/// Light theme - darker tones for light terminal backgrounds.
pub const LIGHT: Theme = Theme {
    id: "light",
    name: "Light",
    primary: Color::Rgb(184, 134, 11),  // Dark goldenrod
    secondary: Color::Rgb(0, 139, 139), // Dark cyan
    text: Color::Rgb(33, 33, 33),       // Near black
    dimmed: Color::Rgb(105, 105, 105),  // Dim gray
    running: Color::Rgb(34, 139, 34),   // Forest green
    paused: Color::Rgb(112, 128, 144),  // Slate gray
};

impl Theme {
    /// All available themes.
    pub const ALL: &'static [Theme] = &[DEFAULT, DARK, LIGHT];

    /// Look up a theme by its ID.
    ///
    /// Returns the DEFAULT theme if the ID is not found.
    pub fn by_id(id: &str) -> &'static Theme {
        Theme::ALL.iter().find(|t| t.id == id).unwrap_or(&DEFAULT)
    }
}
