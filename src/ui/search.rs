//! Search box and active filter summary

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::ui::Theme;

/// Render the header: logo, search box and the active filter summary
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "WAVE",
            ratatui::style::Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "DIAL",
            ratatui::style::Style::default()
                .fg(Theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let search_text = if editing {
        let query = &app.search_input.query;
        let cursor = app.search_input.cursor.min(query.len());
        let (before, after) = query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if app.search_input.query.is_empty() {
        "⌕ Press / to search stations by name…".to_string()
    } else {
        format!("⌕ {}", app.search_input.query)
    };

    let search_box = Paragraph::new(search_text)
        .style(if editing {
            Theme::text().fg(Theme::PRIMARY)
        } else {
            Theme::text()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if editing {
                    Theme::border_focused()
                } else {
                    Theme::border()
                })
                .title(Span::styled(" SEARCH ", Theme::title())),
        );
    frame.render_widget(search_box, chunks[1]);
}

/// One-line summary of the constraints the next query will carry
pub fn render_filter_summary(frame: &mut Frame, area: Rect, app: &App) {
    let mut parts: Vec<String> = Vec::new();
    if !app.filter.search_term().is_empty() {
        parts.push(format!("name: {}", app.filter.search_term()));
    }
    if !app.filter.mood_tag().is_empty() {
        parts.push(format!("mood: {}", app.filter.mood_tag()));
    } else if !app.filter.genre_tag().is_empty() {
        parts.push(format!("genre: {}", app.filter.genre_tag()));
    }
    if !app.filter.country().is_empty() {
        parts.push(format!("country: {}", app.filter.country()));
    }
    if !app.filter.language().is_empty() {
        parts.push(format!("language: {}", app.filter.language()));
    }

    let line = if parts.is_empty() {
        Line::from(Span::styled("popular stations", Theme::dimmed()))
    } else {
        Line::from(Span::styled(parts.join("  ·  "), Theme::text()))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
