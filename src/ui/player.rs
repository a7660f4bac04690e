//! Now-playing panel

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::stream::{PlaybackSession, SessionState};
use crate::ui::theme::{MoodTheme, Theme};

/// Render the now-playing panel for the current session
pub fn render_now_playing(frame: &mut Frame, area: Rect, session: &PlaybackSession) {
    let (title_style, border_style) = match session.station() {
        Some(station) => {
            let accent = MoodTheme::from_tags(&station.tags).accent();
            (
                ratatui::style::Style::default().fg(accent),
                ratatui::style::Style::default().fg(accent),
            )
        }
        None => (Theme::title(), Theme::border()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(" NOW PLAYING ", title_style));

    let lines = match session.station() {
        Some(station) => {
            let state = match session.state() {
                SessionState::Loading => "loading…",
                SessionState::Playing => "playing",
                SessionState::Error => "error",
                SessionState::Idle => "idle",
            };
            let mood = MoodTheme::from_tags(&station.tags);
            let mut lines = vec![
                Line::from(Span::styled(station.name.clone(), Theme::title())),
                Line::from(Span::styled(
                    format!(
                        "{} · {} kbps",
                        if station.country.is_empty() {
                            "Unknown"
                        } else {
                            &station.country
                        },
                        station
                            .bitrate
                            .map(|b| b.to_string())
                            .unwrap_or_else(|| "?".to_string()),
                    ),
                    Theme::dimmed(),
                )),
                Line::from(vec![
                    Span::styled(state, Theme::text()),
                    Span::styled(
                        format!("  [{}]", mood.label()),
                        ratatui::style::Style::default().fg(mood.accent()),
                    ),
                ]),
            ];
            if !station.tags.is_empty() {
                lines.push(Line::from(Span::styled(
                    station.tags.clone(),
                    Theme::dimmed(),
                )));
            }
            lines
        }
        None => vec![
            Line::from(Span::styled("Nothing playing", Theme::dimmed())),
            Line::from(Span::styled(
                "Select a station and press Enter",
                Theme::dimmed(),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
