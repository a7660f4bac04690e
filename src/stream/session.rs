//! Playback session
//!
//! Owns the single "currently playing station" and its state machine:
//! Idle -> Loading -> Playing, then back to Idle on natural end or
//! explicit stop, or Error when the device rejects the stream. Starting
//! a new station supersedes whatever was playing; at most one station is
//! associated with the session at any time.

use tokio::process::Child;
use tracing::{info, warn};

use super::player::{LocalPlayer, PlayerError};
use crate::models::Station;

/// Playback session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No station selected
    #[default]
    Idle,
    /// Play requested, device starting up
    Loading,
    /// Device confirmed playback
    Playing,
    /// Device reported failure; cleared back to Idle once surfaced
    Error,
}

/// What the device reported since the last poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Stream ended on its own
    Ended { station: String },
    /// Device rejected or lost the stream
    Failed { station: String },
}

/// The one playback session of the app
pub struct PlaybackSession {
    player: LocalPlayer,
    state: SessionState,
    station: Option<Station>,
    child: Option<Child>,
}

impl PlaybackSession {
    pub fn new(player: LocalPlayer) -> Self {
        Self {
            player,
            state: SessionState::Idle,
            station: None,
            child: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identifier of the associated station, if any
    pub fn station_id(&self) -> Option<&str> {
        self.station.as_ref().map(|s| s.uuid.as_str())
    }

    /// The associated station, if any
    pub fn station(&self) -> Option<&Station> {
        self.station.as_ref()
    }

    pub fn is_playing_station(&self, uuid: &str) -> bool {
        self.state == SessionState::Playing && self.station_id() == Some(uuid)
    }

    /// Start playback of `station`, superseding any prior one.
    ///
    /// Fails without touching the device when the station has no
    /// resolvable stream URL. The session is left in `Error` on any
    /// failure; callers surface the message and then [`clear_error`].
    ///
    /// [`clear_error`]: PlaybackSession::clear_error
    pub async fn play(&mut self, station: &Station) -> Result<(), PlayerError> {
        self.stop().await;

        let url = match station.stream_url() {
            Some(url) => url.to_string(),
            None => {
                self.state = SessionState::Error;
                return Err(PlayerError::NoStreamUrl(station.name.clone()));
            }
        };

        self.state = SessionState::Loading;
        self.station = Some(station.clone());

        match self.player.play(&url).await {
            Ok(child) => {
                info!(station = %station.name, %url, "playback started");
                self.child = Some(child);
                self.state = SessionState::Playing;
                Ok(())
            }
            Err(err) => {
                warn!(station = %station.name, error = %err, "playback failed to start");
                self.station = None;
                self.child = None;
                self.state = SessionState::Error;
                Err(err)
            }
        }
    }

    /// Check the device for an exit since the last poll. Any reported
    /// event leaves the session Idle with no station associated.
    pub fn poll(&mut self) -> Option<SessionEvent> {
        let exit = match self.child.as_mut()?.try_wait() {
            Ok(None) => return None,
            Ok(Some(status)) => Some(status),
            Err(_) => None,
        };
        let station = self
            .station
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "unknown station".to_string());
        self.reset();
        match exit {
            Some(status) if status.success() => Some(SessionEvent::Ended { station }),
            _ => Some(SessionEvent::Failed { station }),
        }
    }

    /// Stop playback and return to Idle
    pub async fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill().await;
        }
        self.reset();
    }

    /// Clear a surfaced error, returning to Idle
    pub fn clear_error(&mut self) {
        if self.state == SessionState::Error {
            self.state = SessionState::Idle;
        }
    }

    fn reset(&mut self) {
        self.child = None;
        self.station = None;
        self.state = SessionState::Idle;
    }
}
