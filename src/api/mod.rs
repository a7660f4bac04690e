//! API clients
//!
//! Currently a single client: the Radio Browser station directory.

pub mod radio_browser;

pub use radio_browser::{RadioBrowserClient, RadioBrowserError, DEFAULT_MIRRORS};
