//! CLI Command Handlers
//!
//! Implements the CLI subcommands against the directory client.
//! Each handler takes CLI args and Output, returns ExitCode.

use crate::api::{RadioBrowserClient, RadioBrowserError};
use crate::cli::{ExitCode, ListCmd, Output, PlayCmd, PopularCmd, SearchCmd, TopCmd};
use crate::config::Config;
use crate::models::{mood_by_name, FilterState, QueryPlan, ReferenceEntry, Station};
use crate::stream::LocalPlayer;

fn directory_client() -> RadioBrowserClient {
    RadioBrowserClient::with_mirrors(Config::load().mirror_list())
}

fn network_exit(output: &Output, context: &str, err: RadioBrowserError) -> ExitCode {
    output.error(format!("{}: {}", context, err), ExitCode::NetworkError)
}

fn print_stations(output: &Output, stations: &[Station]) -> ExitCode {
    if output.json {
        if let Err(e) = output.print(stations) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for station in stations {
            output.line(station);
        }
    }
    ExitCode::Success
}

fn print_entries(output: &Output, entries: &[ReferenceEntry]) -> ExitCode {
    if output.json {
        if let Err(e) = output.print(entries) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for entry in entries {
            output.line(entry);
        }
    }
    ExitCode::Success
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, output: &Output) -> ExitCode {
    let client = directory_client();

    let mut filter = FilterState::default();
    if let Some(query) = &cmd.query {
        filter.set_search_term(query.clone());
    }
    if let Some(genre) = &cmd.genre {
        filter.set_genre_tag(genre.clone());
    }
    if let Some(country) = &cmd.country {
        filter.set_country(country.clone());
    }
    if let Some(language) = &cmd.language {
        filter.set_language(language.clone());
    }
    if let Some(mood) = &cmd.mood {
        match mood_by_name(mood) {
            Some(preset) => filter.set_mood_tag(preset.tags),
            None => {
                return output.error(
                    format!(
                        "Unknown mood '{}'. Known moods: chill, workout, focus, party, ambient, sleep.",
                        mood
                    ),
                    ExitCode::InvalidArgs,
                )
            }
        }
    }

    let plan = QueryPlan::plan(&filter);
    output.info(format!("Querying {}…", plan.endpoint.path()));

    match client.stations(&plan).await {
        Ok(mut stations) => {
            if stations.is_empty() {
                return output.error("No stations matched", ExitCode::NoResults);
            }
            stations.truncate(cmd.limit);
            print_stations(output, &stations)
        }
        Err(err) => network_exit(output, "Search failed", err),
    }
}

// =============================================================================
// Popular / Top Commands
// =============================================================================

pub async fn popular_cmd(cmd: PopularCmd, output: &Output) -> ExitCode {
    let client = directory_client();
    let plan = QueryPlan::plan(&FilterState::default());

    match client.stations(&plan).await {
        Ok(mut stations) => {
            if stations.is_empty() {
                return output.error("No stations returned", ExitCode::NoResults);
            }
            stations.truncate(cmd.limit);
            print_stations(output, &stations)
        }
        Err(err) => network_exit(output, "Popular fetch failed", err),
    }
}

pub async fn top_cmd(cmd: TopCmd, output: &Output) -> ExitCode {
    let client = directory_client();

    match client.top_click(cmd.count).await {
        Ok(stations) => {
            if stations.is_empty() {
                return output.error("No stations returned", ExitCode::NoResults);
            }
            print_stations(output, &stations)
        }
        Err(err) => network_exit(output, "Top fetch failed", err),
    }
}

// =============================================================================
// Reference List Commands
// =============================================================================

pub async fn countries_cmd(cmd: ListCmd, output: &Output) -> ExitCode {
    let client = directory_client();
    match client.countries().await {
        Ok(mut entries) => {
            entries.truncate(cmd.limit);
            print_entries(output, &entries)
        }
        Err(err) => network_exit(output, "Countries fetch failed", err),
    }
}

pub async fn languages_cmd(cmd: ListCmd, output: &Output) -> ExitCode {
    let client = directory_client();
    match client.languages().await {
        Ok(mut entries) => {
            entries.truncate(cmd.limit);
            print_entries(output, &entries)
        }
        Err(err) => network_exit(output, "Languages fetch failed", err),
    }
}

pub async fn tags_cmd(cmd: ListCmd, output: &Output) -> ExitCode {
    let client = directory_client();
    match client.tags().await {
        Ok(mut entries) => {
            entries.truncate(cmd.limit);
            print_entries(output, &entries)
        }
        Err(err) => network_exit(output, "Tags fetch failed", err),
    }
}

// =============================================================================
// Play Command
// =============================================================================

pub async fn play_cmd(cmd: PlayCmd, output: &Output) -> ExitCode {
    let config = Config::load();
    let client = RadioBrowserClient::with_mirrors(config.mirror_list());

    let mut filter = FilterState::default();
    filter.set_search_term(cmd.query.clone());
    let plan = QueryPlan::plan(&filter);

    let stations = match client.stations(&plan).await {
        Ok(stations) => stations,
        Err(err) => return network_exit(output, "Search failed", err),
    };

    // best match: the first result that actually has a stream
    let Some((station, url)) = stations
        .iter()
        .find_map(|s| s.stream_url().map(|url| (s, url.to_string())))
    else {
        return output.error(
            format!("No playable station matched '{}'", cmd.query),
            ExitCode::NoResults,
        );
    };

    let player_type = cmd
        .player
        .map(Into::into)
        .unwrap_or_else(|| config.player_type());
    let player = LocalPlayer::new(player_type);

    if !player.is_available().await {
        return output.error(
            format!("Player '{}' not found. Install it first.", player_type),
            ExitCode::PlaybackFailed,
        );
    }

    output.info(format!(
        "Playing {} (Ctrl-C or close the player to stop)",
        station
    ));
    match player.play_and_wait(&url).await {
        Ok(()) => ExitCode::Success,
        Err(err) => output.error(
            format!("Could not play station '{}': {}", station.name, err),
            ExitCode::PlaybackFailed,
        ),
    }
}
