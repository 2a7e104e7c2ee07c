//! Configuration management for the Top Tracks CLI.
//!
//! Configuration comes from environment variables, usually loaded from a `.env`
//! file. Lookup order:
//! 1. Variables already present in the process environment
//! 2. `.env` file in the local data directory (`toptracks/.env`)
//! 3. `.env` file in the current working directory
//! 4. Built-in defaults for the public Spotify endpoints

use std::{env, path::PathBuf};

use crate::{Error, Res};

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private";

/// Loads environment variables from `.env` in the local data directory.
///
/// Creates the `toptracks` data directory when it is missing so the user has an
/// obvious place to drop the file. When no `.env` exists there, a `.env` in the
/// working directory is tried instead.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// # Errors
///
/// Returns [`Error::Io`] if the data directory cannot be created and
/// [`Error::Config`] if neither `.env` file can be read or parsed.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toptracks/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(_) => dotenv::dotenv().map(|_| ()).map_err(Error::from),
    }
}

fn require(name: &str) -> Res<String> {
    env::var(name).map_err(|_| Error::Config(format!("{name} must be set")))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Returns the address the local OAuth callback server binds to.
///
/// Read from `SERVER_ADDRESS`, e.g. `127.0.0.1:8888`. The port must match the
/// one in [`spotify_redirect_uri`].
///
/// # Errors
///
/// Returns [`Error::Config`] if `SERVER_ADDRESS` is not set.
pub fn server_addr() -> Res<String> {
    require("SERVER_ADDRESS")
}

/// Returns the client id of the application registered in the Spotify dashboard.
///
/// PKCE needs no client secret, so this id is the only credential the CLI keeps.
///
/// # Errors
///
/// Returns [`Error::Config`] if `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> Res<String> {
    require("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the redirect URI registered for the application.
///
/// Must point at the `/callback` route served on [`server_addr`], for example
/// `http://127.0.0.1:8888/callback`, and match the dashboard entry exactly.
///
/// # Errors
///
/// Returns [`Error::Config`] if `SPOTIFY_API_REDIRECT_URI` is not set.
pub fn spotify_redirect_uri() -> Res<String> {
    require("SPOTIFY_API_REDIRECT_URI")
}

/// Space-separated OAuth scopes requested at login.
///
/// Defaults to `playlist-modify-public playlist-modify-private`, which covers
/// both public and `--private` playlists.
pub fn spotify_scope() -> String {
    or_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Authorization endpoint the browser is sent to.
pub fn spotify_apiauth_url() -> String {
    or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Base URL of the Web API, without a trailing slash.
pub fn spotify_apiurl() -> String {
    or_default("SPOTIFY_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

pub fn spotify_apitoken_url() -> String {
    or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}
