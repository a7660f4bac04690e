//! CLI - Command Line Interface for wavedial
//!
//! Every listing the TUI shows is scriptable. All output is
//! JSON-parseable with `--json`.
//!
//! # Examples
//!
//! ```bash
//! # Search stations by name
//! wavedial search jazz --json
//!
//! # Filter by mood or genre
//! wavedial search --mood chill
//! wavedial search --genre rock --country Germany
//!
//! # Reference lists
//! wavedial tags --limit 10
//!
//! # Play the best match
//! wavedial play "radio paradise"
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::stream::PlayerType;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error (all mirrors failed)
    NetworkError = 3,
    /// Query matched nothing
    NoResults = 4,
    /// Player failed to start or station had no stream
    PlaybackFailed = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// wavedial - terminal client for internet radio
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "wavedial",
    version,
    about = "Discover and stream internet radio from the terminal",
    long_about = "Browse the Radio Browser directory, filter by genre, mood, \
                  country and language, and play a station through mpv or VLC.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  wavedial                         Launch interactive TUI\n\
                  wavedial search jazz             Search stations by name\n\
                  wavedial search --mood chill     Stations matching a mood\n\
                  wavedial popular --limit 10      Most-clicked stations\n\
                  wavedial play \"fip\"              Play the best match"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search stations by name and/or filters
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// List the most popular stations
    #[command(visible_alias = "pop")]
    Popular(PopularCmd),

    /// List the top-clicked stations
    Top(TopCmd),

    /// List countries with station counts
    Countries(ListCmd),

    /// List languages with station counts
    Languages(ListCmd),

    /// List tags (genres) with station counts
    Tags(ListCmd),

    /// Search for a station and play the best match
    #[command(visible_alias = "p")]
    Play(PlayCmd),
}

// =============================================================================
// Search Command
// =============================================================================

/// Search stations by name and/or filters
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Station name to search for
    pub query: Option<String>,

    /// Filter by genre tag (e.g. "rock")
    #[arg(long, short = 'g')]
    pub genre: Option<String>,

    /// Filter by mood preset (chill, workout, focus, party, ambient, sleep).
    /// Takes precedence over --genre.
    #[arg(long, short = 'm')]
    pub mood: Option<String>,

    /// Filter by country name (e.g. "Germany")
    #[arg(long, short = 'c')]
    pub country: Option<String>,

    /// Filter by language (e.g. "german")
    #[arg(long, short = 'L')]
    pub language: Option<String>,

    /// Maximum number of results to print
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

impl SearchCmd {
    /// True when no constraint was given, i.e. the popular listing
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_none()
            && self.genre.is_none()
            && self.mood.is_none()
            && self.country.is_none()
            && self.language.is_none()
    }
}

// =============================================================================
// Popular / Top Commands
// =============================================================================

/// List the most popular stations (by click count)
#[derive(Args, Debug)]
pub struct PopularCmd {
    /// Maximum number of results to print
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// List the top-clicked stations via the dedicated endpoint
#[derive(Args, Debug)]
pub struct TopCmd {
    /// How many stations to fetch
    #[arg(long, short = 'n', default_value = "8")]
    pub count: usize,
}

// =============================================================================
// Reference List Commands
// =============================================================================

/// Print a reference list (countries, languages or tags)
#[derive(Args, Debug)]
pub struct ListCmd {
    /// Maximum number of entries to print
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

// =============================================================================
// Play Command
// =============================================================================

/// Local player selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerChoice {
    /// mpv media player (default)
    #[default]
    Mpv,
    /// VLC media player
    Vlc,
}

impl From<PlayerChoice> for PlayerType {
    fn from(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::Mpv => PlayerType::Mpv,
            PlayerChoice::Vlc => PlayerType::Vlc,
        }
    }
}

/// Search for a station and play the best match
#[derive(Args, Debug)]
pub struct PlayCmd {
    /// Station name to search for
    #[arg(required = true)]
    pub query: String,

    /// Player to use (overrides the configured one)
    #[arg(long, short = 'p', value_enum)]
    pub player: Option<PlayerChoice>,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = JsonOutput::success(data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    /// Print a plain line (suppressed in JSON mode)
    pub fn line(&self, msg: impl std::fmt::Display) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from::<_, &str>(["wavedial"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_search_command() {
        let cli = Cli::parse_from(["wavedial", "search", "jazz"]);
        assert!(cli.is_cli_mode());
        match cli.command {
            Some(Command::Search(cmd)) => {
                assert_eq!(cmd.query.as_deref(), Some("jazz"));
                assert_eq!(cmd.limit, 20);
                assert!(!cmd.is_unconstrained());
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_with_filters() {
        let cli = Cli::parse_from([
            "wavedial", "search", "--mood", "chill", "-c", "Germany", "-l", "5",
        ]);
        match cli.command {
            Some(Command::Search(cmd)) => {
                assert!(cmd.query.is_none());
                assert_eq!(cmd.mood.as_deref(), Some("chill"));
                assert_eq!(cmd.country.as_deref(), Some("Germany"));
                assert_eq!(cmd.limit, 5);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_without_args_is_unconstrained() {
        let cli = Cli::parse_from(["wavedial", "search"]);
        match cli.command {
            Some(Command::Search(cmd)) => assert!(cmd.is_unconstrained()),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["wavedial", "--json", "--quiet", "popular"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_play_command() {
        let cli = Cli::parse_from(["wavedial", "play", "radio paradise", "-p", "vlc"]);
        match cli.command {
            Some(Command::Play(cmd)) => {
                assert_eq!(cmd.query, "radio paradise");
                assert_eq!(cmd.player, Some(PlayerChoice::Vlc));
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_top_command_default_count() {
        let cli = Cli::parse_from(["wavedial", "top"]);
        match cli.command {
            Some(Command::Top(cmd)) => assert_eq!(cmd.count, 8),
            _ => panic!("Expected Top command"),
        }
    }

    #[test]
    fn test_player_choice_conversion() {
        assert_eq!(PlayerType::from(PlayerChoice::Mpv), PlayerType::Mpv);
        assert_eq!(PlayerType::from(PlayerChoice::Vlc), PlayerType::Vlc);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NoResults), 4);
        assert_eq!(i32::from(ExitCode::PlaybackFailed), 5);
    }
}
