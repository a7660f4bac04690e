//! Local player - mpv/VLC playback support
//!
//! Opens station streams in a headless mpv or VLC process. The process
//! is the audio device: spawning it starts playback, its exit status is
//! the end-or-error signal.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::{Child, Command};

/// Supported local players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerType {
    /// mpv media player (default)
    #[default]
    Mpv,
    /// VLC media player
    Vlc,
}

impl PlayerType {
    /// Get the command name for this player
    pub fn command(&self) -> &'static str {
        match self {
            PlayerType::Mpv => "mpv",
            PlayerType::Vlc => {
                // On macOS, VLC is an app bundle - check for it
                #[cfg(target_os = "macos")]
                if std::path::Path::new("/Applications/VLC.app").exists() {
                    return "/Applications/VLC.app/Contents/MacOS/VLC";
                }
                "vlc"
            }
        }
    }

    /// Get a display name for this player
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerType::Mpv => "mpv",
            PlayerType::Vlc => "VLC",
        }
    }

    /// Parse a player name from config ("mpv"/"vlc"), falling back to the
    /// default for anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "vlc" => PlayerType::Vlc,
            _ => PlayerType::Mpv,
        }
    }
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Errors from local player operations
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player '{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Failed to start player: {0}")]
    StartFailed(#[from] std::io::Error),
    #[error("Station '{0}' has no stream URL.")]
    NoStreamUrl(String),
}

/// Local player for station streams
pub struct LocalPlayer {
    player_type: PlayerType,
}

impl LocalPlayer {
    /// Create a new local player with the specified type
    pub fn new(player_type: PlayerType) -> Self {
        Self { player_type }
    }

    /// Create an mpv player
    pub fn mpv() -> Self {
        Self::new(PlayerType::Mpv)
    }

    /// Create a VLC player
    pub fn vlc() -> Self {
        Self::new(PlayerType::Vlc)
    }

    /// Get the player type
    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    /// Check if the player is available on the system
    pub async fn is_available(&self) -> bool {
        let cmd = self.player_type.command();

        // If it's a full path (macOS app bundle), check if it exists
        if cmd.starts_with('/') {
            return std::path::Path::new(cmd).exists();
        }

        // Otherwise use 'which' to find in PATH
        Command::new("which")
            .arg(cmd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Start playing a stream URL, returning the spawned child process.
    /// The child is killed if it is still running when dropped.
    pub async fn play(&self, stream_url: &str) -> Result<Child, PlayerError> {
        let mut cmd = Command::new(self.player_type.command());

        match self.player_type {
            PlayerType::Mpv => {
                cmd.arg(stream_url);
                cmd.arg("--no-video");
                cmd.arg("--really-quiet");
            }
            PlayerType::Vlc => {
                cmd.arg(stream_url);
                // headless: no GUI window for an audio stream
                cmd.arg("--intf").arg("dummy");
                cmd.arg("--no-video");
            }
        }

        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
        cmd.kill_on_drop(true);

        cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlayerError::NotFound(self.player_type.command().to_string())
            } else {
                PlayerError::StartFailed(e)
            }
        })
    }

    /// Play a stream and wait for the player to close (CLI mode)
    pub async fn play_and_wait(&self, stream_url: &str) -> Result<(), PlayerError> {
        let mut child = self.play(stream_url).await?;
        let _ = child.wait().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_type_command() {
        assert_eq!(PlayerType::Mpv.command(), "mpv");
        // On macOS with VLC installed, returns full path; otherwise "vlc"
        let vlc_cmd = PlayerType::Vlc.command();
        assert!(vlc_cmd == "vlc" || vlc_cmd == "/Applications/VLC.app/Contents/MacOS/VLC");
    }

    #[test]
    fn test_player_type_display() {
        assert_eq!(PlayerType::Mpv.to_string(), "mpv");
        assert_eq!(PlayerType::Vlc.to_string(), "VLC");
    }

    #[test]
    fn test_default_player() {
        assert_eq!(PlayerType::default(), PlayerType::Mpv);
    }

    #[test]
    fn test_player_type_from_name() {
        assert_eq!(PlayerType::from_name("vlc"), PlayerType::Vlc);
        assert_eq!(PlayerType::from_name("VLC"), PlayerType::Vlc);
        assert_eq!(PlayerType::from_name("mpv"), PlayerType::Mpv);
        assert_eq!(PlayerType::from_name("winamp"), PlayerType::Mpv);
    }
}
