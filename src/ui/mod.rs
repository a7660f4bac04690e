//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout; the accent
//! color follows the mood of whatever is playing.

pub mod browser;
pub mod player;
pub mod search;
pub mod theme;

pub use theme::{MoodTheme, Theme};
