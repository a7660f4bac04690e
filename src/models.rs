//! Data structures and types for wavedial
//!
//! Contains the shared models used across the application:
//! - **Station**: a directory entry with stream URL and metadata
//! - **Reference lists**: country/language/tag entries for filter choices
//! - **FilterState**: the active search/filter combination
//! - **QueryPlan**: the API query derived from a FilterState
//! - **Quick filters**: mood, genre and country shortcuts

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Station
// =============================================================================

/// A station record from the directory.
///
/// Everything except the identifier is optional in the upstream data;
/// absent fields arrive as empty strings or `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Opaque unique identifier assigned by the directory
    pub uuid: String,
    pub name: String,
    /// Stream URL after the directory resolved playlists/redirects
    pub url_resolved: String,
    /// Raw stream URL as submitted to the directory
    pub url: String,
    pub country: String,
    /// Free-text comma-separated tag string
    pub tags: String,
    pub bitrate: Option<u32>,
    pub favicon: Option<String>,
}

impl Station {
    /// URL to hand to the player: the resolved URL when the directory has
    /// one, the raw URL otherwise, `None` when both are blank.
    pub fn stream_url(&self) -> Option<&str> {
        let resolved = self.url_resolved.trim();
        if !resolved.is_empty() {
            return Some(resolved);
        }
        let raw = self.url.trim();
        if !raw.is_empty() {
            return Some(raw);
        }
        None
    }

    /// Iterate the station's tags, trimmed, blanks skipped.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let country = if self.country.is_empty() {
            "Unknown Country"
        } else {
            &self.country
        };
        match self.bitrate {
            Some(kbps) => write!(f, "{} - {} [{} kbps]", self.name, country, kbps),
            None => write!(f, "{} - {}", self.name, country),
        }
    }
}

// =============================================================================
// Reference Lists (countries / languages / tags)
// =============================================================================

/// One entry of a reference list: a country, language or tag with the
/// number of stations carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub station_count: u32,
    /// ISO 3166-1 alpha-2 code; countries only
    pub code: Option<String>,
}

impl ReferenceEntry {
    /// Label shown in filter choices, e.g. "jazz (812)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.station_count)
    }
}

impl fmt::Display for ReferenceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.station_count)
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// The active combination of search term and filters.
///
/// All fields default to empty, meaning "no constraint". Fields are
/// private so the mood/genre exclusion cannot be bypassed: setting a
/// mood always clears the genre tag and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    genre_tag: String,
    country: String,
    language: String,
    mood_tag: String,
}

impl FilterState {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn genre_tag(&self) -> &str {
        &self.genre_tag
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn mood_tag(&self) -> &str {
        &self.mood_tag
    }

    /// The tag expression actually sent to the API: the mood tags when a
    /// mood is selected, the genre tag otherwise.
    pub fn effective_tag(&self) -> &str {
        if !self.mood_tag.is_empty() {
            &self.mood_tag
        } else {
            &self.genre_tag
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into().trim().to_string();
    }

    /// Select a genre tag. Clears any active mood.
    pub fn set_genre_tag(&mut self, tag: impl Into<String>) {
        self.genre_tag = tag.into();
        self.mood_tag.clear();
    }

    /// Select a mood tag expression. Clears any active genre.
    pub fn set_mood_tag(&mut self, tags: impl Into<String>) {
        self.mood_tag = tags.into();
        self.genre_tag.clear();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Clear every field back to "no constraint".
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// True when no field constrains the query.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.effective_tag().is_empty()
            && self.country.is_empty()
            && self.language.is_empty()
    }
}

// =============================================================================
// Query Planning
// =============================================================================

/// Result cap for filtered queries
pub const SEARCH_LIMIT: usize = 500;
/// Result cap for the default popular listing
pub const POPULAR_LIMIT: usize = 1000;

/// Logical directory endpoint a query targets.
///
/// The search endpoint and the listing endpoint have different parameter
/// semantics upstream; the planner keeps that asymmetry in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Popular-station listing
    Popular,
    /// Filtered listing
    Search,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Popular => "/stations",
            Endpoint::Search => "/stations/search",
        }
    }
}

/// One API query: endpoint plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl QueryPlan {
    /// Derive the query for a filter combination.
    ///
    /// Pure and total: the same `FilterState` always yields the same
    /// plan. Any non-empty constraint selects the search endpoint with
    /// only the non-empty fields as parameters and no explicit ordering;
    /// an unconstrained state selects the popular listing ordered by
    /// descending click count.
    pub fn plan(filter: &FilterState) -> QueryPlan {
        if filter.is_unconstrained() {
            return QueryPlan {
                endpoint: Endpoint::Popular,
                params: vec![
                    ("limit".to_string(), POPULAR_LIMIT.to_string()),
                    ("order".to_string(), "clickcount".to_string()),
                    ("reverse".to_string(), "true".to_string()),
                ],
            };
        }

        let mut params = Vec::new();
        if !filter.search_term().is_empty() {
            params.push(("name".to_string(), filter.search_term().to_string()));
        }
        let tag = filter.effective_tag();
        if !tag.is_empty() {
            // tagList accepts a comma-separated expression, which is how
            // moods map onto multiple tags at once
            params.push(("tagList".to_string(), tag.to_string()));
        }
        if !filter.country().is_empty() {
            params.push(("country".to_string(), filter.country().to_string()));
        }
        if !filter.language().is_empty() {
            params.push(("language".to_string(), filter.language().to_string()));
        }
        params.push(("limit".to_string(), SEARCH_LIMIT.to_string()));

        QueryPlan {
            endpoint: Endpoint::Search,
            params,
        }
    }

    /// Look up a parameter value by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// =============================================================================
// Moods & Quick Filters
// =============================================================================

/// A named mood mapped onto a multi-tag expression.
#[derive(Debug, PartialEq, Eq)]
pub struct Mood {
    pub name: &'static str,
    pub tags: &'static str,
}

/// The fixed mood presets offered as quick filters.
pub const MOODS: &[Mood] = &[
    Mood {
        name: "Chill",
        tags: "chillout,ambient,lounge,relax",
    },
    Mood {
        name: "Workout",
        tags: "workout,electronic,dance,techno,house",
    },
    Mood {
        name: "Focus",
        tags: "focus,ambient,classical,instrumental,lofi",
    },
    Mood {
        name: "Party",
        tags: "party,dance,pop,disco,house",
    },
    Mood {
        name: "Ambient",
        tags: "ambient,drone,atmospheric",
    },
    Mood {
        name: "Sleep",
        tags: "sleep,ambient,relaxing",
    },
];

/// Find a mood preset by name, case-insensitively.
pub fn mood_by_name(name: &str) -> Option<&'static Mood> {
    MOODS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// A clickable shortcut that narrows the query without going through the
/// individual selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickFilter {
    Mood(&'static Mood),
    Genre(String),
    /// Country by display name; empty name means "all countries"
    Country(String),
}

impl QuickFilter {
    /// Apply this shortcut to the filter state.
    pub fn apply(&self, filter: &mut FilterState) {
        match self {
            QuickFilter::Mood(mood) => filter.set_mood_tag(mood.tags),
            QuickFilter::Genre(tag) => filter.set_genre_tag(tag.clone()),
            QuickFilter::Country(name) => filter.set_country(name.clone()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            QuickFilter::Mood(mood) => mood.name,
            QuickFilter::Genre(tag) => tag,
            QuickFilter::Country(name) => {
                if name.is_empty() {
                    "All Countries"
                } else {
                    name
                }
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

    fn station(url_resolved: &str, url: &str) -> Station {
        Station {
            uuid: "abc-123".to_string(),
            name: "Test Radio".to_string(),
            url_resolved: url_resolved.to_string(),
            url: url.to_string(),
            country: "Germany".to_string(),
            tags: "rock,pop".to_string(),
            bitrate: Some(128),
            favicon: None,
        }
    }

    #[test]
    fn test_stream_url_prefers_resolved() {
        let s = station("http://a/resolved", "http://a/raw");
        assert_eq!(s.stream_url(), Some("http://a/resolved"));
    }

    #[test]
    fn test_stream_url_falls_back_to_raw() {
        let s = station("", "http://a/raw");
        assert_eq!(s.stream_url(), Some("http://a/raw"));
    }

    #[test]
    fn test_stream_url_none_when_both_blank() {
        let s = station("", "  ");
        assert_eq!(s.stream_url(), None);
    }

    #[test]
    fn test_tag_names_skips_blanks() {
        let mut s = station("http://a", "");
        s.tags = " rock , , pop ".to_string();
        let tags: Vec<&str> = s.tag_names().collect();
        assert_eq!(tags, vec!["rock", "pop"]);
    }

    #[test]
    fn test_mood_clears_genre() {
        let mut filter = FilterState::default();
        filter.set_genre_tag("rock");
        filter.set_mood_tag("chillout,ambient,lounge,relax");
        assert_eq!(filter.genre_tag(), "");
        assert_eq!(filter.mood_tag(), "chillout,ambient,lounge,relax");
    }

    #[test]
    fn test_genre_clears_mood() {
        let mut filter = FilterState::default();
        filter.set_mood_tag("sleep,ambient,relaxing");
        filter.set_genre_tag("jazz");
        assert_eq!(filter.mood_tag(), "");
        assert_eq!(filter.genre_tag(), "jazz");
    }

    #[test]
    fn test_effective_tag_prefers_mood() {
        let mut filter = FilterState::default();
        filter.set_genre_tag("rock");
        assert_eq!(filter.effective_tag(), "rock");
        filter.set_mood_tag("party,dance,pop,disco,house");
        assert_eq!(filter.effective_tag(), "party,dance,pop,disco,house");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut filter = FilterState::default();
        filter.set_search_term("jazz");
        filter.set_country("France");
        filter.set_language("french");
        filter.set_mood_tag("sleep,ambient,relaxing");
        filter.reset();
        assert!(filter.is_unconstrained());
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_plan_is_deterministic() {
        let mut filter = FilterState::default();
        filter.set_search_term("jazz");
        filter.set_country("France");
        assert_eq!(QueryPlan::plan(&filter), QueryPlan::plan(&filter));
    }

    #[test]
    fn test_plan_unconstrained_is_popular() {
        let plan = QueryPlan::plan(&FilterState::default());
        assert_eq!(plan.endpoint, Endpoint::Popular);
        assert_eq!(plan.param("limit"), Some("1000"));
        assert_eq!(plan.param("order"), Some("clickcount"));
        assert_eq!(plan.param("reverse"), Some("true"));
    }

    #[test]
    fn test_plan_search_term_only() {
        let mut filter = FilterState::default();
        filter.set_search_term("jazz");
        let plan = QueryPlan::plan(&filter);
        assert_eq!(plan.endpoint, Endpoint::Search);
        assert_eq!(plan.param("name"), Some("jazz"));
        assert_eq!(plan.param("limit"), Some("500"));
        assert!(plan.param("tagList").is_none());
        assert!(plan.param("country").is_none());
        assert!(plan.param("language").is_none());
        assert!(plan.param("order").is_none());
    }

    #[test]
    fn test_plan_mood_uses_tag_list() {
        let mut filter = FilterState::default();
        filter.set_mood_tag("chillout,ambient,lounge,relax");
        let plan = QueryPlan::plan(&filter);
        assert_eq!(plan.endpoint, Endpoint::Search);
        assert_eq!(plan.param("tagList"), Some("chillout,ambient,lounge,relax"));
    }

    #[test]
    fn test_plan_any_single_filter_selects_search() {
        let mut filter = FilterState::default();
        filter.set_language("german");
        let plan = QueryPlan::plan(&filter);
        assert_eq!(plan.endpoint, Endpoint::Search);
        assert_eq!(plan.param("language"), Some("german"));
        assert!(plan.param("name").is_none());
    }

    #[test]
    fn test_mood_and_genre_never_coexist() {
        // every mutation path leaves at most one of the two set
        let mut filter = FilterState::default();
        for mood in MOODS {
            filter.set_genre_tag("rock");
            filter.set_mood_tag(mood.tags);
            assert_eq!(filter.genre_tag(), "");
        }
    }

    #[test]
    fn test_mood_by_name() {
        assert_eq!(
            mood_by_name("chill").map(|m| m.tags),
            Some("chillout,ambient,lounge,relax")
        );
        assert!(mood_by_name("metalcore").is_none());
    }

    #[test]
    fn test_quick_filter_dispatch() {
        let mut filter = FilterState::default();

        QuickFilter::Genre("rock".to_string()).apply(&mut filter);
        assert_eq!(filter.genre_tag(), "rock");

        QuickFilter::Mood(&MOODS[0]).apply(&mut filter);
        assert_eq!(filter.mood_tag(), MOODS[0].tags);
        assert_eq!(filter.genre_tag(), "");

        QuickFilter::Country("Germany".to_string()).apply(&mut filter);
        assert_eq!(filter.country(), "Germany");

        QuickFilter::Country(String::new()).apply(&mut filter);
        assert_eq!(filter.country(), "");
    }

    #[test]
    fn test_reference_entry_label() {
        let entry = ReferenceEntry {
            name: "jazz".to_string(),
            station_count: 812,
            code: None,
        };
        assert_eq!(entry.label(), "jazz (812)");
    }
}
