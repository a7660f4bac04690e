//! wavedial - terminal client for internet radio
//!
//! Browse the Radio Browser station directory, filter by genre, mood,
//! country and language, page through results, and play a station
//! through mpv or VLC.
//!
//! # Modules
//!
//! - `models` - stations, reference lists, filter state, query planning
//! - `api` - directory client with mirror fallback
//! - `app` - application state: pager, lookup cache, in-flight guard
//! - `stream` - local player process and playback session
//! - `ui` - TUI components
//! - `cli` / `commands` - scriptable CLI mode
//! - `config` - config file handling

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod stream;
pub mod ui;

// Re-export commonly used types
pub use api::{RadioBrowserClient, RadioBrowserError, DEFAULT_MIRRORS};
pub use app::{App, AppAction, Banner, LookupCache, Pager, BANNER_TTL, PAGE_SIZE};
pub use models::{
    mood_by_name, Endpoint, FilterState, Mood, QueryPlan, QuickFilter, ReferenceEntry, Station,
    MOODS,
};
pub use stream::{LocalPlayer, PlaybackSession, PlayerError, PlayerType, SessionEvent, SessionState};
