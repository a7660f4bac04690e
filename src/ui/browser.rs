//! Station browser view
//!
//! The paginated station grid, the pagination bar and the quick-filter
//! rows (moods, genre tags, countries, language selector).

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::MOODS;
use crate::stream::PlaybackSession;
use crate::ui::theme::{MoodTheme, Theme};

/// One element of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    Page(usize),
    Current(usize),
    Gap,
}

/// Build the pagination bar: a window of two pages around the current
/// one, with first/last pages and gap markers. Empty when a single page
/// holds everything.
pub fn page_marks(current: usize, total: usize) -> Vec<PageMark> {
    if total <= 1 {
        return Vec::new();
    }
    let start = current.saturating_sub(2).max(1);
    let end = (current + 2).min(total);

    let mut marks = Vec::new();
    if start > 1 {
        marks.push(PageMark::Page(1));
        if start > 2 {
            marks.push(PageMark::Gap);
        }
    }
    for page in start..=end {
        if page == current {
            marks.push(PageMark::Current(page));
        } else {
            marks.push(PageMark::Page(page));
        }
    }
    if end < total {
        if end < total - 1 {
            marks.push(PageMark::Gap);
        }
        marks.push(PageMark::Page(total));
    }
    marks
}

fn pane_border(focused: bool) -> ratatui::style::Style {
    if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    }
}

/// Accent color derived from whatever is playing
fn accent(session: &PlaybackSession) -> ratatui::style::Color {
    session
        .station()
        .map(|s| MoodTheme::from_tags(&s.tags))
        .unwrap_or_default()
        .accent()
}

// =============================================================================
// Station grid
// =============================================================================

pub fn render_station_grid(frame: &mut Frame, area: Rect, app: &App, session: &PlaybackSession) {
    let title = if app.pager.total() > 0 {
        format!(
            " STATIONS {}/{} ({}) ",
            app.pager.page(),
            app.pager.page_count().max(1),
            app.pager.total()
        )
    } else {
        " STATIONS ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pane_border(app.focus == Focus::Stations))
        .title(Span::styled(title, Theme::title()));

    if app.loading {
        let msg = Paragraph::new(Span::styled("Tuning the dial...", Theme::dimmed()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    if app.no_results {
        let msg = Paragraph::new(Span::styled(
            "No stations found. Try different filters.",
            Theme::dimmed(),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let accent = accent(session);
    let items: Vec<ListItem> = app
        .pager
        .current_page()
        .iter()
        .enumerate()
        .map(|(i, station)| {
            let playing = session.is_playing_station(&station.uuid);
            let marker = if playing { "♪ " } else { "  " };
            let selected = app.focus == Focus::Stations && i == app.station_sel.selected;

            let mut spans = vec![
                Span::styled(
                    marker,
                    ratatui::style::Style::default().fg(accent),
                ),
                Span::styled(
                    station.to_string(),
                    if selected {
                        Theme::selected(accent)
                    } else {
                        Theme::text()
                    },
                ),
            ];
            if !station.tags.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", station.tags),
                    Theme::dimmed(),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

// =============================================================================
// Pagination bar
// =============================================================================

pub fn render_pagination(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.pager.page();
    let total = app.pager.page_count();
    let marks = page_marks(current, total);
    if marks.is_empty() {
        return;
    }

    let mut spans = vec![Span::styled(
        "◂ prev ",
        if current > 1 {
            Theme::keybind()
        } else {
            Theme::dimmed()
        },
    )];
    for mark in marks {
        match mark {
            PageMark::Current(page) => {
                spans.push(Span::styled(
                    format!("[{}] ", page),
                    Theme::title(),
                ));
            }
            PageMark::Page(page) => {
                spans.push(Span::styled(format!("{} ", page), Theme::text()));
            }
            PageMark::Gap => spans.push(Span::styled("… ", Theme::dimmed())),
        }
    }
    spans.push(Span::styled(
        "next ▸",
        if current < total {
            Theme::keybind()
        } else {
            Theme::dimmed()
        },
    ));

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

// =============================================================================
// Quick filter rows
// =============================================================================

fn render_quick_row(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    labels: &[String],
    selected: usize,
    active: Option<usize>,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pane_border(focused))
        .title(Span::styled(format!(" {} ", title), Theme::title()));

    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let style = if focused && i == selected {
            Theme::selected(Theme::PRIMARY)
        } else if active == Some(i) {
            Theme::keybind()
        } else {
            Theme::text()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    if spans.is_empty() {
        spans.push(Span::styled("loading…", Theme::dimmed()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_moods(frame: &mut Frame, area: Rect, app: &App) {
    let labels: Vec<String> = MOODS.iter().map(|m| m.name.to_string()).collect();
    let active = MOODS
        .iter()
        .position(|m| m.tags == app.filter.mood_tag());
    render_quick_row(
        frame,
        area,
        "MOODS",
        &labels,
        app.mood_sel.selected,
        active,
        app.focus == Focus::Moods,
    );
}

pub fn render_genres(frame: &mut Frame, area: Rect, app: &App) {
    let filters = app.genre_filters();
    let labels: Vec<String> = filters.iter().map(|f| f.label().to_string()).collect();
    let active = labels
        .iter()
        .position(|l| l.as_str() == app.filter.genre_tag());
    render_quick_row(
        frame,
        area,
        "GENRES",
        &labels,
        app.genre_sel.selected,
        active,
        app.focus == Focus::Genres,
    );
}

pub fn render_countries(frame: &mut Frame, area: Rect, app: &App) {
    let filters = app.country_filters();
    let labels: Vec<String> = filters.iter().map(|f| f.label().to_string()).collect();
    let active = filters.iter().position(|f| {
        matches!(f, crate::models::QuickFilter::Country(name) if name.as_str() == app.filter.country())
    });
    render_quick_row(
        frame,
        area,
        "COUNTRIES",
        &labels,
        app.country_sel.selected,
        active,
        app.focus == Focus::Countries,
    );
}

pub fn render_language_selector(frame: &mut Frame, area: Rect, app: &App) {
    let label = match app.selected_language() {
        Some(entry) => entry.label(),
        None => "Any".to_string(),
    };
    let applied = if app.filter.language().is_empty() {
        String::new()
    } else {
        format!("  (active: {})", app.filter.language())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pane_border(app.focus == Focus::Languages))
        .title(Span::styled(" LANGUAGE ", Theme::title()));

    let line = Line::from(vec![
        Span::styled("◂ ", Theme::keybind()),
        Span::styled(label, Theme::text()),
        Span::styled(" ▸", Theme::keybind()),
        Span::styled(applied, Theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

// =============================================================================
// Top stations rail
// =============================================================================

pub fn render_top_stations(frame: &mut Frame, area: Rect, app: &App, session: &PlaybackSession) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(pane_border(app.focus == Focus::Top))
        .title(Span::styled(" TOP STATIONS ", Theme::title()));

    if app.top_stations.is_empty() {
        let msg = Paragraph::new(Span::styled("Could not load top stations.", Theme::dimmed()))
            .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let accent = accent(session);
    let items: Vec<ListItem> = app
        .top_stations
        .iter()
        .enumerate()
        .map(|(i, station)| {
            let selected = app.focus == Focus::Top && i == app.top_sel.selected;
            let marker = if session.is_playing_station(&station.uuid) {
                "♪ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, ratatui::style::Style::default().fg(accent)),
                Span::styled(
                    station.name.clone(),
                    if selected {
                        Theme::selected(accent)
                    } else {
                        Theme::text()
                    },
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_has_no_marks() {
        assert!(page_marks(1, 0).is_empty());
        assert!(page_marks(1, 1).is_empty());
    }

    #[test]
    fn test_small_page_counts_have_no_gaps() {
        assert_eq!(
            page_marks(2, 3),
            vec![
                PageMark::Page(1),
                PageMark::Current(2),
                PageMark::Page(3),
            ]
        );
    }

    #[test]
    fn test_window_centers_on_current_page() {
        assert_eq!(
            page_marks(5, 9),
            vec![
                PageMark::Page(1),
                PageMark::Gap,
                PageMark::Page(3),
                PageMark::Page(4),
                PageMark::Current(5),
                PageMark::Page(6),
                PageMark::Page(7),
                PageMark::Gap,
                PageMark::Page(9),
            ]
        );
    }

    #[test]
    fn test_window_at_start_keeps_last_page() {
        assert_eq!(
            page_marks(1, 9),
            vec![
                PageMark::Current(1),
                PageMark::Page(2),
                PageMark::Page(3),
                PageMark::Gap,
                PageMark::Page(9),
            ]
        );
    }

    #[test]
    fn test_window_at_end_keeps_first_page() {
        assert_eq!(
            page_marks(9, 9),
            vec![
                PageMark::Page(1),
                PageMark::Gap,
                PageMark::Page(7),
                PageMark::Page(8),
                PageMark::Current(9),
            ]
        );
    }

    #[test]
    fn test_adjacent_window_omits_gap() {
        // start == 2: page 1 is adjacent, no gap marker
        assert_eq!(
            page_marks(4, 6),
            vec![
                PageMark::Page(1),
                PageMark::Page(2),
                PageMark::Page(3),
                PageMark::Current(4),
                PageMark::Page(5),
                PageMark::Page(6),
            ]
        );
    }
}
