//! Blocking lichess API client: per-user PGN export and profile lookup.
//! Everything here is collaborator I/O; the aggregation core never sees it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use serde::Deserialize;

/// Subset of the lichess user JSON the report displays.
#[derive(Debug, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub count: GameCounts,
    #[serde(default)]
    pub perfs: BTreeMap<String, Perf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameCounts {
    #[serde(default)]
    pub all: u64,
    #[serde(default)]
    pub win: u64,
    #[serde(default)]
    pub loss: u64,
    #[serde(default)]
    pub draw: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Perf {
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub games: u64,
}

fn client() -> anyhow::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("ecostats/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")
}

/// An optional personal token raises the lichess rate limits.
fn authorize(req: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
    match std::env::var("LICHESS_TOKEN") {
        Ok(token) if !token.is_empty() => req.bearer_auth(token),
        _ => req,
    }
}

/// Download up to `max` of the user's games as one PGN text.
pub fn fetch_games(api_url: &str, username: &str, max: u32) -> anyhow::Result<String> {
    let url = format!("{}/api/games/user/{}", api_url.trim_end_matches('/'), username);
    log::debug!("remote: GET {} (max={})", url, max);
    let t0 = Instant::now();

    let resp = authorize(
        client()?
            .get(&url)
            .query(&[("max", max.to_string())])
            .header("Accept", "application/x-chess-pgn"),
    )
    .send()
    .and_then(|r| r.error_for_status())
    .with_context(|| format!("downloading games for {}", username))?;
    let text = resp.text().context("reading PGN body")?;

    log::debug!(
        "remote: games fetched in {:.3}s ({} bytes)",
        t0.elapsed().as_secs_f64(),
        text.len()
    );
    Ok(text)
}

/// Fetch the public profile for the report's player block.
pub fn fetch_profile(api_url: &str, username: &str) -> anyhow::Result<UserProfile> {
    let url = format!("{}/api/user/{}", api_url.trim_end_matches('/'), username);
    log::debug!("remote: GET {}", url);
    let t0 = Instant::now();

    let body = authorize(client()?.get(&url))
        .send()
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("fetching profile for {}", username))?
        .text()
        .context("reading profile body")?;
    let profile: UserProfile = serde_json::from_str(&body).context("decoding profile JSON")?;

    log::debug!("remote: profile fetched in {:.3}s", t0.elapsed().as_secs_f64());
    Ok(profile)
}

/// Download the subject's games and keep a local copy for offline reruns.
pub fn download_and_save(
    api_url: &str,
    username: &str,
    max: u32,
    path: &Path,
) -> anyhow::Result<String> {
    let pgn = fetch_games(api_url, username, max)?;
    fs::write(path, &pgn).with_context(|| format!("saving {}", path.display()))?;
    log::info!("saved {} bytes to {}", pgn.len(), path.display());
    Ok(pgn)
}

/// Where a user's downloaded games are kept between runs.
pub fn saved_games_path(username: &str) -> PathBuf {
    PathBuf::from(format!("lichess_{}.pgn", username))
}
