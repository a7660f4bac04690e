//! App state and core application logic
//!
//! Holds the filter state, the client-side result pager, the memoized
//! reference lists, and the single in-flight query guard. Keyboard
//! events mutate this state and may emit an [`AppAction`] for the event
//! loop to execute (fetch, play, stop).

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use crate::api::{RadioBrowserClient, RadioBrowserError};
use crate::models::{FilterState, QueryPlan, QuickFilter, ReferenceEntry, Station, MOODS};

/// Stations shown per page
pub const PAGE_SIZE: usize = 16;

/// How long an error banner stays up before auto-dismissing
pub const BANNER_TTL: Duration = Duration::from_secs(7);

/// How many tags become genre quick filters
const GENRE_QUICK_COUNT: usize = 25;
/// How many countries become country quick filters
const COUNTRY_QUICK_COUNT: usize = 30;

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Focus
// =============================================================================

/// Which pane keyboard navigation currently targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The paginated station grid
    #[default]
    Stations,
    /// The top-stations rail
    Top,
    /// Mood quick filters
    Moods,
    /// Genre tag quick filters
    Genres,
    /// Country quick filters
    Countries,
    /// Language selector
    Languages,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Stations => Focus::Top,
            Focus::Top => Focus::Moods,
            Focus::Moods => Focus::Genres,
            Focus::Genres => Focus::Countries,
            Focus::Countries => Focus::Languages,
            Focus::Languages => Focus::Stations,
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Work the event loop must perform after a keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Filter state changed: re-plan and fetch
    Refresh,
    /// Play the currently selected station
    Play,
    /// Stop playback
    Stop,
}

// =============================================================================
// List Selection
// =============================================================================

/// Selection state for a list or row of items
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Update length, clamping the selection into range
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Text being edited in the search box
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub query: String,
    pub cursor: usize,
}

impl SearchInput {
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.query[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.query.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.query[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.query.len() {
            let next = self.query[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// Result Pager
// =============================================================================

/// Fixed-size pages over the working result set.
///
/// A pure view: paging never re-fetches. The working set is replaced
/// wholesale by every query, which also resets to page 1.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    results: Vec<Station>,
    page: usize,
}

impl Pager {
    /// Replace the working set and reset to page 1
    pub fn set_results(&mut self, results: Vec<Station>) {
        self.results = results;
        self.page = 1;
    }

    pub fn results(&self) -> &[Station] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Current page number, 1-indexed
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn page_count(&self) -> usize {
        (self.results.len() + PAGE_SIZE - 1) / PAGE_SIZE
    }

    /// Slice of the working set for page `n` (1-indexed); empty beyond
    /// the last page
    pub fn page_items(&self, n: usize) -> &[Station] {
        if n == 0 {
            return &[];
        }
        let start = (n - 1) * PAGE_SIZE;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.results.len());
        &self.results[start..end]
    }

    pub fn current_page(&self) -> &[Station] {
        self.page_items(self.page())
    }

    pub fn goto(&mut self, n: usize) {
        if n >= 1 && n <= self.page_count() {
            self.page = n;
        }
    }

    pub fn next(&mut self) {
        if self.page() < self.page_count() {
            self.page = self.page() + 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page() > 1 {
            self.page = self.page() - 1;
        }
    }
}

// =============================================================================
// Lookup Cache
// =============================================================================

/// Memoized reference lists: countries, languages, tags.
///
/// Each list is fetched at most once per app lifetime and never
/// invalidated. A failed fetch leaves its slot empty so a later call
/// retries instead of returning a cached failure.
#[derive(Debug, Default)]
pub struct LookupCache {
    countries: Option<Vec<ReferenceEntry>>,
    languages: Option<Vec<ReferenceEntry>>,
    tags: Option<Vec<ReferenceEntry>>,
}

impl LookupCache {
    pub async fn countries(
        &mut self,
        client: &RadioBrowserClient,
    ) -> Result<&[ReferenceEntry], RadioBrowserError> {
        if self.countries.is_none() {
            self.countries = Some(client.countries().await?);
        }
        Ok(self.countries.as_deref().unwrap_or(&[]))
    }

    pub async fn languages(
        &mut self,
        client: &RadioBrowserClient,
    ) -> Result<&[ReferenceEntry], RadioBrowserError> {
        if self.languages.is_none() {
            self.languages = Some(client.languages().await?);
        }
        Ok(self.languages.as_deref().unwrap_or(&[]))
    }

    pub async fn tags(
        &mut self,
        client: &RadioBrowserClient,
    ) -> Result<&[ReferenceEntry], RadioBrowserError> {
        if self.tags.is_none() {
            self.tags = Some(client.tags().await?);
        }
        Ok(self.tags.as_deref().unwrap_or(&[]))
    }

    // Already-fetched views for rendering; empty until the fetch lands.

    pub fn cached_countries(&self) -> &[ReferenceEntry] {
        self.countries.as_deref().unwrap_or(&[])
    }

    pub fn cached_languages(&self) -> &[ReferenceEntry] {
        self.languages.as_deref().unwrap_or(&[])
    }

    pub fn cached_tags(&self) -> &[ReferenceEntry] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

// =============================================================================
// Error Banner
// =============================================================================

/// A transient user-visible error, auto-dismissed after [`BANNER_TTL`]
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    expires_at: Instant,
}

impl Banner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + BANNER_TTL,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
pub struct App {
    pub filter: FilterState,
    pub pager: Pager,
    pub lookup: LookupCache,
    /// Top-clicked stations rail, loaded once at startup
    pub top_stations: Vec<Station>,
    pub banner: Option<Banner>,
    /// The last query completed with zero stations
    pub no_results: bool,
    /// In-flight guard: a new filter-driven fetch is dropped while one
    /// is outstanding
    pub loading: bool,
    /// Generation of the most recently issued query; completions with an
    /// older generation are discarded
    generation: u64,

    pub focus: Focus,
    pub input_mode: InputMode,
    pub search_input: SearchInput,
    pub station_sel: ListState,
    pub top_sel: ListState,
    pub mood_sel: ListState,
    pub genre_sel: ListState,
    pub country_sel: ListState,
    /// Index into the language selector: 0 is "any", i+1 is language i
    pub language_sel: usize,

    pub running: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            pager: Pager::default(),
            lookup: LookupCache::default(),
            top_stations: Vec::new(),
            banner: None,
            no_results: false,
            loading: false,
            generation: 0,
            focus: Focus::default(),
            input_mode: InputMode::default(),
            search_input: SearchInput::default(),
            station_sel: ListState::default(),
            top_sel: ListState::default(),
            mood_sel: ListState::new(MOODS.len()),
            genre_sel: ListState::default(),
            country_sel: ListState::default(),
            language_sel: 0,
            running: true,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Query lifecycle
    // -------------------------------------------------------------------------

    /// Begin a filter-driven fetch: plan the query and mark it in flight.
    /// Returns `None` (the trigger is dropped) while another query is
    /// outstanding.
    pub fn begin_query(&mut self) -> Option<(u64, QueryPlan)> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.no_results = false;
        self.generation += 1;
        Some((self.generation, QueryPlan::plan(&self.filter)))
    }

    /// Accept a completed fetch. Completions for a superseded generation
    /// are discarded so a stale response can never overwrite newer
    /// results.
    pub fn finish_query(
        &mut self,
        generation: u64,
        result: Result<Vec<Station>, RadioBrowserError>,
    ) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(stations) => {
                self.no_results = stations.is_empty();
                self.pager.set_results(stations);
            }
            Err(err) => {
                self.show_error(format!(
                    "Failed to connect to the station directory: {}",
                    err
                ));
                self.pager.set_results(Vec::new());
            }
        }
        self.station_sel.set_len(self.pager.current_page().len());
        self.station_sel.reset();
        self.sync_quick_lens();
    }

    /// Current generation, for tests and diagnostics
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.banner = Some(Banner::new(message));
    }

    /// Periodic upkeep: expire the banner
    pub fn tick(&mut self, now: Instant) {
        if let Some(banner) = &self.banner {
            if banner.expired(now) {
                self.banner = None;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Quick filters
    // -------------------------------------------------------------------------

    /// Genre shortcuts: the most-used tags
    pub fn genre_filters(&self) -> Vec<QuickFilter> {
        self.lookup
            .cached_tags()
            .iter()
            .take(GENRE_QUICK_COUNT)
            .map(|t| QuickFilter::Genre(t.name.clone()))
            .collect()
    }

    /// Country shortcuts: "all countries" plus the most-populated
    /// countries that carry a two-letter code
    pub fn country_filters(&self) -> Vec<QuickFilter> {
        let mut filters = vec![QuickFilter::Country(String::new())];
        filters.extend(
            self.lookup
                .cached_countries()
                .iter()
                .take(COUNTRY_QUICK_COUNT)
                .filter(|c| {
                    c.station_count > 0 && c.code.as_ref().map(|code| code.len() == 2) == Some(true)
                })
                .map(|c| QuickFilter::Country(c.name.clone())),
        );
        filters
    }

    /// Resize quick-filter selections after the lookup lists land
    pub fn sync_quick_lens(&mut self) {
        self.genre_sel.set_len(self.genre_filters().len());
        self.country_sel.set_len(self.country_filters().len());
        let lang_count = self.lookup.cached_languages().len();
        if self.language_sel > lang_count {
            self.language_sel = 0;
        }
    }

    /// Language the selector currently points at; `None` is "any"
    pub fn selected_language(&self) -> Option<&ReferenceEntry> {
        if self.language_sel == 0 {
            None
        } else {
            self.lookup.cached_languages().get(self.language_sel - 1)
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Station the focused pane currently points at
    pub fn selected_station(&self) -> Option<&Station> {
        match self.focus {
            Focus::Top => self.top_stations.get(self.top_sel.selected),
            _ => self.pager.current_page().get(self.station_sel.selected),
        }
    }

    pub fn set_top_stations(&mut self, stations: Vec<Station>) {
        self.top_sel.set_len(stations.len());
        self.top_stations = stations;
    }

    fn after_page_change(&mut self) {
        self.station_sel.set_len(self.pager.current_page().len());
        self.station_sel.reset();
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key event, returning work for the event loop to run
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                // dropped while a fetch is in flight, like every other
                // filter trigger
                if self.loading {
                    return None;
                }
                self.filter.set_search_term(self.search_input.query.clone());
                Some(AppAction::Refresh)
            }
            KeyCode::Char(c) => {
                self.search_input.insert(c);
                None
            }
            KeyCode::Backspace => {
                self.search_input.backspace();
                None
            }
            KeyCode::Left => {
                self.search_input.cursor_left();
                None
            }
            KeyCode::Right => {
                self.search_input.cursor_right();
                None
            }
            _ => None,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match key.code {
            KeyCode::Char('q') => {
                self.running = false;
                None
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                None
            }
            KeyCode::Char('r') => {
                if self.loading {
                    return None;
                }
                self.filter.reset();
                self.search_input.clear();
                self.language_sel = 0;
                Some(AppAction::Refresh)
            }
            KeyCode::Char('s') => Some(AppAction::Stop),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Up => {
                match self.focus {
                    Focus::Stations => self.station_sel.up(),
                    Focus::Top => self.top_sel.up(),
                    _ => {}
                }
                None
            }
            KeyCode::Down => {
                match self.focus {
                    Focus::Stations => self.station_sel.down(),
                    Focus::Top => self.top_sel.down(),
                    _ => {}
                }
                None
            }
            KeyCode::Left => {
                self.move_horizontal(-1);
                None
            }
            KeyCode::Right => {
                self.move_horizontal(1);
                None
            }
            KeyCode::Enter => self.activate_selection(),
            _ => None,
        }
    }

    fn move_horizontal(&mut self, dir: i8) {
        match self.focus {
            Focus::Stations => {
                // paging works on already-fetched data and is never
                // guarded by the in-flight flag
                if dir < 0 {
                    self.pager.prev();
                } else {
                    self.pager.next();
                }
                self.after_page_change();
            }
            Focus::Moods => {
                if dir < 0 {
                    self.mood_sel.up();
                } else {
                    self.mood_sel.down();
                }
            }
            Focus::Genres => {
                if dir < 0 {
                    self.genre_sel.up();
                } else {
                    self.genre_sel.down();
                }
            }
            Focus::Countries => {
                if dir < 0 {
                    self.country_sel.up();
                } else {
                    self.country_sel.down();
                }
            }
            Focus::Languages => {
                let count = self.lookup.cached_languages().len();
                if dir < 0 {
                    self.language_sel = self.language_sel.saturating_sub(1);
                } else if self.language_sel < count {
                    self.language_sel += 1;
                }
            }
            Focus::Top => {}
        }
    }

    fn activate_selection(&mut self) -> Option<AppAction> {
        match self.focus {
            Focus::Stations | Focus::Top => Some(AppAction::Play),
            Focus::Moods => {
                if self.loading {
                    return None;
                }
                let mood = MOODS.get(self.mood_sel.selected)?;
                QuickFilter::Mood(mood).apply(&mut self.filter);
                Some(AppAction::Refresh)
            }
            Focus::Genres => {
                if self.loading {
                    return None;
                }
                let qf = self.genre_filters().into_iter().nth(self.genre_sel.selected)?;
                qf.apply(&mut self.filter);
                Some(AppAction::Refresh)
            }
            Focus::Countries => {
                if self.loading {
                    return None;
                }
                let qf = self
                    .country_filters()
                    .into_iter()
                    .nth(self.country_sel.selected)?;
                qf.apply(&mut self.filter);
                Some(AppAction::Refresh)
            }
            Focus::Languages => {
                if self.loading {
                    return None;
                }
                let language = self
                    .selected_language()
                    .map(|l| l.name.clone())
                    .unwrap_or_default();
                self.filter.set_language(language);
                Some(AppAction::Refresh)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stations(n: usize) -> Vec<Station> {
        (0..n)
            .map(|i| Station {
                uuid: format!("uuid-{}", i),
                name: format!("Station {}", i),
                url_resolved: format!("http://example.com/{}", i),
                url: String::new(),
                country: String::new(),
                tags: String::new(),
                bitrate: None,
                favicon: None,
            })
            .collect()
    }

    // ---- Pager ----

    #[test]
    fn test_pager_page_count() {
        let mut pager = Pager::default();
        pager.set_results(stations(37));
        assert_eq!(pager.page_count(), 3);

        pager.set_results(stations(16));
        assert_eq!(pager.page_count(), 1);

        pager.set_results(stations(0));
        assert_eq!(pager.page_count(), 0);
    }

    #[test]
    fn test_pager_last_page_is_partial() {
        let mut pager = Pager::default();
        pager.set_results(stations(37));
        assert_eq!(pager.page_items(1).len(), 16);
        assert_eq!(pager.page_items(2).len(), 16);
        assert_eq!(pager.page_items(3).len(), 5);
    }

    #[test]
    fn test_pager_pages_recombine_in_order() {
        let mut pager = Pager::default();
        let all = stations(37);
        pager.set_results(all.clone());
        let mut recombined = Vec::new();
        for n in 1..=pager.page_count() {
            recombined.extend_from_slice(pager.page_items(n));
        }
        assert_eq!(recombined, all);
    }

    #[test]
    fn test_pager_beyond_last_page_is_empty() {
        let mut pager = Pager::default();
        pager.set_results(stations(37));
        assert!(pager.page_items(4).is_empty());
        assert!(pager.page_items(100).is_empty());
        assert!(pager.page_items(0).is_empty());
    }

    #[test]
    fn test_pager_set_results_resets_page() {
        let mut pager = Pager::default();
        pager.set_results(stations(40));
        pager.goto(3);
        assert_eq!(pager.page(), 3);
        pager.set_results(stations(20));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_pager_navigation_clamps() {
        let mut pager = Pager::default();
        pager.set_results(stations(40));
        pager.prev();
        assert_eq!(pager.page(), 1);
        pager.goto(99);
        assert_eq!(pager.page(), 1);
        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.page(), 3);
    }

    // ---- Query lifecycle ----

    #[test]
    fn test_in_flight_guard_drops_second_trigger() {
        let mut app = App::new();
        assert!(app.begin_query().is_some());
        assert!(app.begin_query().is_none());
    }

    #[test]
    fn test_finish_query_releases_guard() {
        let mut app = App::new();
        let (generation, _) = app.begin_query().unwrap();
        app.finish_query(generation, Ok(stations(3)));
        assert!(!app.loading);
        assert_eq!(app.pager.total(), 3);
        assert!(app.begin_query().is_some());
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut app = App::new();
        let (first, _) = app.begin_query().unwrap();
        app.finish_query(first, Ok(stations(5)));

        let (second, _) = app.begin_query().unwrap();
        // a late duplicate of the first response must not overwrite
        app.finish_query(first, Ok(stations(1)));
        assert_eq!(app.pager.total(), 5);
        assert!(app.loading);

        app.finish_query(second, Ok(stations(7)));
        assert_eq!(app.pager.total(), 7);
        assert!(!app.loading);
    }

    #[test]
    fn test_empty_result_sets_no_results() {
        let mut app = App::new();
        let (generation, _) = app.begin_query().unwrap();
        app.finish_query(generation, Ok(Vec::new()));
        assert!(app.no_results);
        assert!(app.banner.is_none());
    }

    #[test]
    fn test_failed_query_banners_without_no_results() {
        let mut app = App::new();
        let (generation, _) = app.begin_query().unwrap();
        app.finish_query(
            generation,
            Err(RadioBrowserError::InvalidResponse("boom".to_string())),
        );
        assert!(!app.no_results);
        assert!(app.banner.is_some());
        assert_eq!(app.pager.total(), 0);
    }

    // ---- Banner ----

    #[test]
    fn test_banner_expires_after_ttl() {
        let mut app = App::new();
        app.show_error("oops");
        app.tick(Instant::now());
        assert!(app.banner.is_some());
        app.tick(Instant::now() + BANNER_TTL + Duration::from_millis(10));
        assert!(app.banner.is_none());
    }

    // ---- Quick filters ----

    fn entry(name: &str, count: u32, code: Option<&str>) -> ReferenceEntry {
        ReferenceEntry {
            name: name.to_string(),
            station_count: count,
            code: code.map(|c| c.to_string()),
        }
    }

    #[test]
    fn test_country_filters_skip_missing_codes() {
        let mut app = App::new();
        app.lookup.countries = Some(vec![
            entry("Germany", 500, Some("DE")),
            entry("Nowhere", 10, None),
            entry("France", 300, Some("FR")),
            entry("Empty", 0, Some("XX")),
        ]);
        let filters = app.country_filters();
        // leading "all countries" plus the two valid entries
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0], QuickFilter::Country(String::new()));
        assert_eq!(filters[1], QuickFilter::Country("Germany".to_string()));
        assert_eq!(filters[2], QuickFilter::Country("France".to_string()));
    }

    #[test]
    fn test_genre_filters_capped() {
        let mut app = App::new();
        app.lookup.tags = Some((0..40).map(|i| entry(&format!("tag{}", i), 1, None)).collect());
        assert_eq!(app.genre_filters().len(), 25);
    }

    #[test]
    fn test_selected_station_follows_focus() {
        let mut app = App::new();
        let (generation, _) = app.begin_query().unwrap();
        app.finish_query(generation, Ok(stations(3)));
        app.set_top_stations(stations(2));

        app.focus = Focus::Stations;
        assert_eq!(app.selected_station().unwrap().uuid, "uuid-0");

        app.focus = Focus::Top;
        app.top_sel.down();
        assert_eq!(app.selected_station().unwrap().uuid, "uuid-1");
    }
}
