//! Stream playback
//!
//! The audio device is an external player process (mpv or VLC): set a
//! source, start it, and watch for it to exit or fail. `session` owns
//! the single "currently playing station" on top of that.

pub mod player;
pub mod session;

pub use player::{LocalPlayer, PlayerError, PlayerType};
pub use session::{PlaybackSession, SessionEvent, SessionState};
