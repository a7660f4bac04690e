//! Configuration management for wavedial
//!
//! Handles config file loading/saving.
//! Config is stored at ~/.config/wavedial/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::DEFAULT_MIRRORS;
use crate::stream::PlayerType;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred local player ("mpv" or "vlc")
    pub player: Option<String>,
    /// Override for the directory mirror list
    pub mirrors: Option<Vec<String>>,
}

impl Config {
    /// Get config file path (~/.config/wavedial/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wavedial").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// The configured player, defaulting to mpv
    pub fn player_type(&self) -> PlayerType {
        self.player
            .as_deref()
            .map(PlayerType::from_name)
            .unwrap_or_default()
    }

    /// The mirror list to use: the configured override when present and
    /// non-empty, the built-in list otherwise
    pub fn mirror_list(&self) -> Vec<String> {
        match &self.mirrors {
            Some(mirrors) if !mirrors.is_empty() => mirrors.clone(),
            _ => DEFAULT_MIRRORS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.player.is_none());
        assert!(config.mirrors.is_none());
    }

    #[test]
    fn test_player_type_defaults_to_mpv() {
        let config = Config::default();
        assert_eq!(config.player_type(), PlayerType::Mpv);
    }

    #[test]
    fn test_player_type_parses_vlc() {
        let config = Config {
            player: Some("vlc".to_string()),
            mirrors: None,
        };
        assert_eq!(config.player_type(), PlayerType::Vlc);
    }

    #[test]
    fn test_mirror_list_defaults() {
        let config = Config::default();
        assert_eq!(config.mirror_list().len(), DEFAULT_MIRRORS.len());
    }

    #[test]
    fn test_mirror_list_override() {
        let config = Config {
            player: None,
            mirrors: Some(vec!["http://localhost:8080/json".to_string()]),
        };
        assert_eq!(config.mirror_list(), vec!["http://localhost:8080/json"]);
    }

    #[test]
    fn test_empty_mirror_override_falls_back() {
        let config = Config {
            player: None,
            mirrors: Some(Vec::new()),
        };
        assert_eq!(config.mirror_list().len(), DEFAULT_MIRRORS.len());
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config {
            player: Some("mpv".to_string()),
            mirrors: Some(vec!["http://example.com/json".to_string()]),
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.player.as_deref(), Some("mpv"));
        assert_eq!(parsed.mirrors.unwrap().len(), 1);
    }
}
