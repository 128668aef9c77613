//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;
    pub const BANNER_BG: Color = Color::LightCyan;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;
    pub const BANNER_FG: Color = Color::Black;

    // Accents
    pub const ACCENT: Color = Color::Cyan;
    pub const NEGATIVE: Color = Color::Red;
    pub const MISSING: Color = Color::Green;
    pub const CHECKED: Color = Color::Yellow;

    // Chart series
    pub const SERIES_LINE: Color = Color::Cyan;
    pub const SERIES_SCATTER: Color = Color::Magenta;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Header cell under the column cursor.
    pub fn focused_header() -> Style {
        Self::table_header().fg(Theme::ACCENT).add_modifier(Modifier::UNDERLINED)
    }

    /// Checked row selection box.
    pub fn checked() -> Style {
        Style::default().fg(Theme::CHECKED).add_modifier(Modifier::BOLD)
    }

    /// Negative money amount.
    pub fn negative() -> Style {
        Style::default().fg(Theme::NEGATIVE)
    }

    /// Placeholder for an absent value.
    pub fn missing() -> Style {
        Style::default().fg(Theme::MISSING)
    }

    /// Selection banner strip.
    pub fn banner() -> Style {
        Style::default()
            .fg(Theme::BANNER_FG)
            .bg(Theme::BANNER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Accent text (month label, popup borders).
    pub fn accent() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Filter input style.
    pub fn filter_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Month inside the picked range.
    pub fn in_range() -> Style {
        Style::default().fg(Color::Black).bg(Color::LightBlue)
    }

    /// Start or end month of the picked range.
    pub fn range_end() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    }
}
