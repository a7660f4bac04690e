//! Radio Browser API client
//!
//! Read-only JSON client for the community station directory
//! (<https://www.radio-browser.info/>). The directory is served by a set
//! of interchangeable mirrors; a failed request rotates to the next
//! mirror and retries until every mirror has been tried once. The
//! rotation index survives across calls, so a session keeps steering
//! away from mirrors that already failed.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{QueryPlan, ReferenceEntry, Station};

/// Interchangeable directory mirrors, tried in order.
pub const DEFAULT_MIRRORS: &[&str] = &[
    "https://de1.api.radio-browser.info/json",
    "https://nl1.api.radio-browser.info/json",
    "https://de2.api.radio-browser.info/json",
];

/// Per-attempt request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Result caps for the reference lists
const COUNTRIES_LIMIT: usize = 5000;
const LANGUAGES_LIMIT: usize = 1000;
const TAGS_LIMIT: usize = 100;

/// Query parameters applied to every request unless the caller overrides
/// them key by key.
const DEFAULT_PARAMS: &[(&str, &str)] = &[
    ("hidebroken", "true"),
    ("limit", "1000"),
    ("order", "clickcount"),
    ("reverse", "true"),
];

/// Radio Browser API error types
#[derive(Debug, Error)]
pub enum RadioBrowserError {
    #[error("mirror returned HTTP {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("all {count} directory mirrors failed; last error: {last}")]
    MirrorsExhausted {
        count: usize,
        last: Box<RadioBrowserError>,
    },
}

/// Radio Browser API client with mirror fallback
pub struct RadioBrowserClient {
    client: reqwest::Client,
    mirrors: Vec<String>,
    /// Index of the mirror the next attempt will use. Advanced on every
    /// failed attempt regardless of which logical call triggered it, and
    /// never reset.
    mirror_index: AtomicUsize,
}

impl RadioBrowserClient {
    /// Create a client against the default mirror list
    pub fn new() -> Self {
        Self::with_mirrors(DEFAULT_MIRRORS.iter().map(|m| m.to_string()).collect())
    }

    /// Create a client against a custom mirror list (tests, config override)
    pub fn with_mirrors(mirrors: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            mirrors,
            mirror_index: AtomicUsize::new(0),
        }
    }

    /// Index of the currently selected mirror
    pub fn mirror_index(&self) -> usize {
        self.mirror_index.load(Ordering::Relaxed)
    }

    fn advance_mirror(&self) {
        let next = (self.mirror_index.load(Ordering::Relaxed) + 1) % self.mirrors.len();
        self.mirror_index.store(next, Ordering::Relaxed);
    }

    /// Issue a GET against the current mirror, rotating to the next on any
    /// failure (bad status, network error, timeout, unparseable body).
    /// Every mirror is tried at most once per call; when all have failed
    /// the call resolves to [`RadioBrowserError::MirrorsExhausted`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, RadioBrowserError> {
        let query = merge_params(params);
        let mut last_err = RadioBrowserError::InvalidResponse("no mirrors configured".to_string());

        for _ in 0..self.mirrors.len() {
            let base = &self.mirrors[self.mirror_index()];
            let url = format!("{}{}", base, endpoint);
            debug!(%url, "fetching");
            match self.attempt::<T>(&url, &query).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(%url, error = %err, "mirror attempt failed, rotating");
                    self.advance_mirror();
                    last_err = err;
                }
            }
        }

        Err(RadioBrowserError::MirrorsExhausted {
            count: self.mirrors.len(),
            last: Box::new(last_err),
        })
    }

    async fn attempt<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<T, RadioBrowserError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RadioBrowserError::BadStatus(status));
        }
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| RadioBrowserError::InvalidResponse(format!("JSON parse error: {}", e)))
    }

    // -------------------------------------------------------------------------
    // Station listings
    // -------------------------------------------------------------------------

    /// Execute a planned station query
    pub async fn stations(&self, plan: &QueryPlan) -> Result<Vec<Station>, RadioBrowserError> {
        let params: Vec<(&str, &str)> = plan
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let raw: Vec<ApiStation> = self.get(plan.endpoint.path(), &params).await?;
        Ok(raw.into_iter().map(Station::from).collect())
    }

    /// Top `n` stations by click count
    pub async fn top_click(&self, n: usize) -> Result<Vec<Station>, RadioBrowserError> {
        let endpoint = format!("/stations/topclick/{}", n);
        let raw: Vec<ApiStation> = self.get(&endpoint, &[]).await?;
        Ok(raw.into_iter().map(Station::from).collect())
    }

    // -------------------------------------------------------------------------
    // Reference lists
    // -------------------------------------------------------------------------

    /// Countries ordered by descending station count
    pub async fn countries(&self) -> Result<Vec<ReferenceEntry>, RadioBrowserError> {
        let limit = COUNTRIES_LIMIT.to_string();
        let raw: Vec<ApiCountry> = self
            .get(
                "/countries",
                &[
                    ("order", "stationcount"),
                    ("reverse", "true"),
                    ("limit", &limit),
                ],
            )
            .await?;
        Ok(raw.into_iter().filter_map(ApiCountry::into_entry).collect())
    }

    /// Languages ordered by descending station count
    pub async fn languages(&self) -> Result<Vec<ReferenceEntry>, RadioBrowserError> {
        let limit = LANGUAGES_LIMIT.to_string();
        let raw: Vec<ApiNamed> = self
            .get(
                "/languages",
                &[
                    ("order", "stationcount"),
                    ("reverse", "true"),
                    ("limit", &limit),
                ],
            )
            .await?;
        Ok(raw.into_iter().filter_map(ApiNamed::into_entry).collect())
    }

    /// Tags ordered by descending station count
    pub async fn tags(&self) -> Result<Vec<ReferenceEntry>, RadioBrowserError> {
        let limit = TAGS_LIMIT.to_string();
        let raw: Vec<ApiNamed> = self
            .get(
                "/tags",
                &[
                    ("order", "stationcount"),
                    ("reverse", "true"),
                    ("limit", &limit),
                ],
            )
            .await?;
        Ok(raw.into_iter().filter_map(ApiNamed::into_entry).collect())
    }
}

impl Default for RadioBrowserClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge caller parameters over the default set, caller keys winning.
fn merge_params(params: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = DEFAULT_PARAMS
        .iter()
        .filter(|(key, _)| !params.iter().any(|(k, _)| k == key))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    merged.extend(params.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    merged
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiStation {
    stationuuid: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    url_resolved: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    favicon: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    bitrate: u32,
}

impl From<ApiStation> for Station {
    fn from(raw: ApiStation) -> Self {
        let name = if raw.name.trim().is_empty() {
            "Unknown Station".to_string()
        } else {
            raw.name
        };
        let favicon = if raw.favicon.trim().is_empty() {
            None
        } else {
            Some(raw.favicon)
        };
        let bitrate = if raw.bitrate == 0 {
            None
        } else {
            Some(raw.bitrate)
        };
        Station {
            uuid: raw.stationuuid,
            name,
            url_resolved: raw.url_resolved,
            url: raw.url,
            country: raw.country,
            tags: raw.tags,
            bitrate,
            favicon,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiCountry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    stationcount: u32,
    #[serde(default)]
    iso_3166_1: String,
}

impl ApiCountry {
    /// Entries with a blank name are malformed and skipped.
    fn into_entry(self) -> Option<ReferenceEntry> {
        if self.name.trim().is_empty() {
            return None;
        }
        let code = if self.iso_3166_1.trim().is_empty() {
            None
        } else {
            Some(self.iso_3166_1)
        };
        Some(ReferenceEntry {
            name: self.name,
            station_count: self.stationcount,
            code,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiNamed {
    #[serde(default)]
    name: String,
    #[serde(default)]
    stationcount: u32,
}

impl ApiNamed {
    fn into_entry(self) -> Option<ReferenceEntry> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(ReferenceEntry {
            name: self.name,
            station_count: self.stationcount,
            code: None,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_params_defaults_only() {
        let merged = merge_params(&[]);
        assert!(merged.contains(&("hidebroken".to_string(), "true".to_string())));
        assert!(merged.contains(&("limit".to_string(), "1000".to_string())));
        assert!(merged.contains(&("order".to_string(), "clickcount".to_string())));
        assert!(merged.contains(&("reverse".to_string(), "true".to_string())));
    }

    #[test]
    fn test_merge_params_caller_overrides_default() {
        let merged = merge_params(&[("limit", "500")]);
        let limits: Vec<_> = merged.iter().filter(|(k, _)| k == "limit").collect();
        assert_eq!(limits.len(), 1);
        assert_eq!(limits[0].1, "500");
    }

    #[test]
    fn test_merge_params_keeps_caller_keys() {
        let merged = merge_params(&[("name", "jazz")]);
        assert!(merged.contains(&("name".to_string(), "jazz".to_string())));
        assert!(merged.contains(&("hidebroken".to_string(), "true".to_string())));
    }

    fn sample_api_station() -> ApiStation {
        ApiStation {
            stationuuid: "abc-123".to_string(),
            name: "Test Radio".to_string(),
            url_resolved: "http://stream.test.com/live".to_string(),
            url: "http://test.com/stream".to_string(),
            favicon: "http://test.com/logo.png".to_string(),
            tags: "rock,pop".to_string(),
            country: "Germany".to_string(),
            bitrate: 128,
        }
    }

    #[test]
    fn test_station_conversion_basic() {
        let station: Station = sample_api_station().into();
        assert_eq!(station.uuid, "abc-123");
        assert_eq!(station.name, "Test Radio");
        assert_eq!(station.bitrate, Some(128));
        assert_eq!(station.favicon.as_deref(), Some("http://test.com/logo.png"));
    }

    #[test]
    fn test_station_conversion_blank_name() {
        let mut raw = sample_api_station();
        raw.name = "  ".to_string();
        let station: Station = raw.into();
        assert_eq!(station.name, "Unknown Station");
    }

    #[test]
    fn test_station_conversion_zero_bitrate() {
        let mut raw = sample_api_station();
        raw.bitrate = 0;
        let station: Station = raw.into();
        assert_eq!(station.bitrate, None);
    }

    #[test]
    fn test_station_conversion_blank_favicon() {
        let mut raw = sample_api_station();
        raw.favicon = String::new();
        let station: Station = raw.into();
        assert_eq!(station.favicon, None);
    }

    #[test]
    fn test_station_deserialize_missing_optional_fields() {
        // only the identifier is required
        let json = r#"{"stationuuid": "uuid-2"}"#;
        let raw: ApiStation = serde_json::from_str(json).unwrap();
        assert_eq!(raw.stationuuid, "uuid-2");
        assert_eq!(raw.url_resolved, "");
        assert_eq!(raw.bitrate, 0);

        let station: Station = raw.into();
        assert_eq!(station.name, "Unknown Station");
        assert_eq!(station.stream_url(), None);
    }

    #[test]
    fn test_station_deserialize_extra_fields_ignored() {
        let json = r#"{
            "stationuuid": "uuid-3",
            "name": "Extra Fields Radio",
            "clickcount": 9999,
            "votes": 500,
            "codec": "MP3"
        }"#;
        let raw: ApiStation = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name, "Extra Fields Radio");
    }

    #[test]
    fn test_country_blank_name_skipped() {
        let raw = ApiCountry {
            name: " ".to_string(),
            stationcount: 10,
            iso_3166_1: "DE".to_string(),
        };
        assert!(raw.into_entry().is_none());
    }

    #[test]
    fn test_country_code_normalized() {
        let raw = ApiCountry {
            name: "Germany".to_string(),
            stationcount: 10,
            iso_3166_1: String::new(),
        };
        let entry = raw.into_entry().unwrap();
        assert_eq!(entry.code, None);
    }

    #[test]
    fn test_named_entry_blank_skipped() {
        let raw = ApiNamed {
            name: String::new(),
            stationcount: 3,
        };
        assert!(raw.into_entry().is_none());
    }

    #[test]
    fn test_client_starts_at_first_mirror() {
        let client = RadioBrowserClient::new();
        assert_eq!(client.mirror_index(), 0);
    }

    #[test]
    fn test_default_mirror_list() {
        let client = RadioBrowserClient::default();
        assert_eq!(client.mirrors.len(), DEFAULT_MIRRORS.len());
    }
}
