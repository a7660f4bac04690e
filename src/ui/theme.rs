//! Color palette and style helpers for the TUI
//!
//! A warm late-night-radio palette, plus mood themes derived from the
//! tags of the station that is playing.

use ratatui::style::{Color, Modifier, Style};

/// Base palette
pub struct Theme;

impl Theme {
    /// Background: deep near-black blue
    pub const BACKGROUND: Color = Color::Rgb(0x0d, 0x0f, 0x14);

    /// Primary: warm amber, the dial light
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb0, 0x3a);

    /// Secondary: soft teal
    pub const SECONDARY: Color = Color::Rgb(0x3a, 0xc9, 0xb0);

    /// Text: soft white
    pub const TEXT: Color = Color::Rgb(0xdc, 0xdc, 0xd2);

    /// Dim: muted grey-blue
    pub const DIM: Color = Color::Rgb(0x4a, 0x4f, 0x5a);

    /// Error: signal red
    pub const ERROR: Color = Color::Rgb(0xff, 0x45, 0x4f);

    /// Border, unfocused
    pub const BORDER: Color = Color::Rgb(0x3a, 0x40, 0x4d);

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item (inverted on the accent color)
    pub fn selected(accent: Color) -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// Mood Themes
// =============================================================================

/// Visual theme picked from the tags of the playing station.
///
/// The first tag with a known mapping wins; stations without a mapped
/// tag get the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodTheme {
    Chill,
    Workout,
    Focus,
    Classical,
    Jazz,
    Party,
    #[default]
    Default,
}

impl MoodTheme {
    /// Resolve the theme for a comma-separated tag string
    pub fn from_tags(tags: &str) -> Self {
        for tag in tags.split(',') {
            let theme = match tag.trim().to_lowercase().as_str() {
                "chillout" | "ambient" | "lounge" | "relax" | "sleep" => Some(MoodTheme::Chill),
                "workout" | "electronic" | "dance" | "techno" | "house" => Some(MoodTheme::Workout),
                "focus" | "instrumental" | "lofi" => Some(MoodTheme::Focus),
                "classical" => Some(MoodTheme::Classical),
                "jazz" => Some(MoodTheme::Jazz),
                "party" | "pop" | "disco" => Some(MoodTheme::Party),
                _ => None,
            };
            if let Some(theme) = theme {
                return theme;
            }
        }
        MoodTheme::Default
    }

    /// Accent color for this mood
    pub fn accent(&self) -> Color {
        match self {
            MoodTheme::Chill => Color::Rgb(0x6f, 0xb8, 0xd9),
            MoodTheme::Workout => Color::Rgb(0xff, 0x5c, 0x39),
            MoodTheme::Focus => Color::Rgb(0x8a, 0xa8, 0x6a),
            MoodTheme::Classical => Color::Rgb(0xc9, 0xa8, 0x6a),
            MoodTheme::Jazz => Color::Rgb(0xb8, 0x6f, 0xd9),
            MoodTheme::Party => Color::Rgb(0xff, 0x4f, 0x9a),
            MoodTheme::Default => Theme::PRIMARY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodTheme::Chill => "chill",
            MoodTheme::Workout => "workout",
            MoodTheme::Focus => "focus",
            MoodTheme::Classical => "classical",
            MoodTheme::Jazz => "jazz",
            MoodTheme::Party => "party",
            MoodTheme::Default => "on air",
        }
    }
}
