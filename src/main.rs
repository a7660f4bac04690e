//! wavedial - terminal client for internet radio
//!
//! Browse the Radio Browser directory, filter by genre, mood, country
//! and language, and play a station through mpv or VLC.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! wavedial
//!
//! # CLI mode (for automation)
//! wavedial search jazz --json
//! wavedial search --mood chill --country Germany
//! wavedial play "radio paradise"
//! ```

// Some components are only reachable from one of the two modes (TUI/CLI)
#![allow(dead_code)]

mod api;
mod app;
mod cli;
mod commands;
mod config;
mod models;
mod stream;
mod ui;

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::api::{RadioBrowserClient, RadioBrowserError};
use crate::app::{App, AppAction};
use crate::cli::{Cli, Command, ExitCode, Output};
use crate::config::Config;
use crate::models::{QueryPlan, Station};
use crate::stream::{LocalPlayer, PlaybackSession, SessionEvent};
use crate::ui::Theme;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How many stations the top rail shows
const TOP_STATIONS_COUNT: usize = 8;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui().await
    }
}

/// Best-effort file logging; the terminal belongs to the TUI.
/// Log lives at ~/.local/share/wavedial/wavedial.log, RUST_LOG overrides
/// the filter.
fn init_logging() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("wavedial")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("wavedial.log"))
    else {
        return;
    };

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,hyper_util=warn,hyper=warn,reqwest=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(filter.as_str())
        .with_ansi(false)
        .init();
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &output).await,
        Some(Command::Popular(cmd)) => commands::popular_cmd(cmd, &output).await,
        Some(Command::Top(cmd)) => commands::top_cmd(cmd, &output).await,
        Some(Command::Countries(cmd)) => commands::countries_cmd(cmd, &output).await,
        Some(Command::Languages(cmd)) => commands::languages_cmd(cmd, &output).await,
        Some(Command::Tags(cmd)) => commands::tags_cmd(cmd, &output).await,
        Some(Command::Play(cmd)) => commands::play_cmd(cmd, &output).await,
        None => {
            // unreachable: handled by is_cli_mode check
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui() -> Result<()> {
    let config = Config::load();
    let client = Arc::new(RadioBrowserClient::with_mirrors(config.mirror_list()));
    let mut app = App::new();
    let mut session = PlaybackSession::new(LocalPlayer::new(config.player_type()));

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, &mut session, client).await;
    restore_terminal(&mut terminal)?;

    result
}

/// A completed background fetch
enum FetchMsg {
    Stations {
        generation: u64,
        result: Result<Vec<Station>, RadioBrowserError>,
    },
    Top(Result<Vec<Station>, RadioBrowserError>),
}

fn spawn_query(
    client: Arc<RadioBrowserClient>,
    tx: mpsc::UnboundedSender<FetchMsg>,
    generation: u64,
    plan: QueryPlan,
) {
    tokio::spawn(async move {
        let result = client.stations(&plan).await;
        let _ = tx.send(FetchMsg::Stations { generation, result });
    });
}

/// Load the reference lists once at startup. A failed list leaves its
/// cache slot empty; the failure is surfaced but not fatal.
async fn preload_lookups(app: &mut App, client: &RadioBrowserClient) {
    if let Err(err) = app.lookup.countries(client).await {
        warn!(error = %err, "countries load failed");
        app.show_error("Failed to load country filters.");
    }
    if let Err(err) = app.lookup.languages(client).await {
        warn!(error = %err, "languages load failed");
        app.show_error("Failed to load language filters.");
    }
    if let Err(err) = app.lookup.tags(client).await {
        warn!(error = %err, "tags load failed");
        app.show_error("Failed to load genre filters.");
    }
    app.sync_quick_lens();
}

/// Main event loop - handles input, fetch completions, playback events
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    session: &mut PlaybackSession,
    client: Arc<RadioBrowserClient>,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel();

    // first frame before the network round-trips
    terminal.draw(|frame| render_ui(frame, app, session))?;

    preload_lookups(app, &client).await;

    {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(FetchMsg::Top(client.top_click(TOP_STATIONS_COUNT).await));
        });
    }

    // initial popular listing
    if let Some((generation, plan)) = app.begin_query() {
        spawn_query(client.clone(), tx.clone(), generation, plan);
    }

    while app.running {
        terminal.draw(|frame| render_ui(frame, app, session))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = app.handle_key(key) {
                        run_action(action, app, session, &client, &tx).await;
                    }
                }
            }
        }

        // completed background fetches
        while let Ok(msg) = rx.try_recv() {
            match msg {
                FetchMsg::Stations { generation, result } => app.finish_query(generation, result),
                FetchMsg::Top(Ok(stations)) => app.set_top_stations(stations),
                FetchMsg::Top(Err(err)) => {
                    // rail failure only affects the rail
                    warn!(error = %err, "top stations load failed");
                }
            }
        }

        // device-originated playback events
        if let Some(event) = session.poll() {
            match event {
                SessionEvent::Ended { station } => {
                    info!(%station, "playback ended");
                }
                SessionEvent::Failed { station } => {
                    app.show_error(format!(
                        "Playback error for {}. Stream might be offline or incompatible.",
                        station
                    ));
                }
            }
        }

        app.tick(Instant::now());
    }

    session.stop().await;
    Ok(())
}

async fn run_action(
    action: AppAction,
    app: &mut App,
    session: &mut PlaybackSession,
    client: &Arc<RadioBrowserClient>,
    tx: &mpsc::UnboundedSender<FetchMsg>,
) {
    match action {
        AppAction::Refresh => {
            if let Some((generation, plan)) = app.begin_query() {
                spawn_query(client.clone(), tx.clone(), generation, plan);
            }
        }
        AppAction::Play => {
            let Some(station) = app.selected_station().cloned() else {
                return;
            };
            if let Err(err) = session.play(&station).await {
                app.show_error(err.to_string());
                session.clear_error();
            }
        }
        AppAction::Stop => session.stop().await,
    }
}

// =============================================================================
// UI Rendering
// =============================================================================

/// Main render function - lays out the screen and delegates to the
/// view renderers
fn render_ui(frame: &mut Frame, app: &App, session: &PlaybackSession) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header (logo + search)
            Constraint::Length(1), // filter summary
            Constraint::Length(3), // moods
            Constraint::Length(3), // genres
            Constraint::Length(3), // countries
            Constraint::Length(3), // language selector
            Constraint::Min(8),    // stations + side panel
            Constraint::Length(1), // pagination
            Constraint::Length(1), // status bar
        ])
        .split(area);

    ui::search::render_header(frame, chunks[0], app);
    ui::search::render_filter_summary(frame, chunks[1], app);
    ui::browser::render_moods(frame, chunks[2], app);
    ui::browser::render_genres(frame, chunks[3], app);
    ui::browser::render_countries(frame, chunks[4], app);
    ui::browser::render_language_selector(frame, chunks[5], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(chunks[6]);

    ui::browser::render_station_grid(frame, content[0], app, session);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(content[1]);
    ui::browser::render_top_stations(frame, side[0], app, session);
    ui::player::render_now_playing(frame, side[1], session);

    ui::browser::render_pagination(frame, chunks[7], app);
    render_status_bar(frame, chunks[8], app);

    if let Some(banner) = &app.banner {
        render_error_popup(frame, area, &banner.message);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" / ", Theme::keybind()),
        Span::styled("search  ", Theme::dimmed()),
        Span::styled("Tab ", Theme::keybind()),
        Span::styled("focus  ", Theme::dimmed()),
        Span::styled("↵ ", Theme::keybind()),
        Span::styled("select/play  ", Theme::dimmed()),
        Span::styled("←→ ", Theme::keybind()),
        Span::styled("page/move  ", Theme::dimmed()),
        Span::styled("r ", Theme::keybind()),
        Span::styled("reset  ", Theme::dimmed()),
        Span::styled("s ", Theme::keybind()),
        Span::styled("stop  ", Theme::dimmed()),
        Span::styled("q ", Theme::keybind()),
        Span::styled("quit", Theme::dimmed()),
    ];
    if app.loading {
        spans.push(Span::styled("   fetching…", Theme::title()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centered auto-dismissing error banner
fn render_error_popup(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.len() as u16 + 6).min(area.width.saturating_sub(4)).max(20);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + 1,
        width,
        height: 3,
    };

    frame.render_widget(Clear, popup);
    let banner = Paragraph::new(Span::styled(message, Theme::error()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::error()),
        );
    frame.render_widget(banner, popup);
}
