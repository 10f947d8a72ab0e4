//! Configuration management for albumgrid.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The only secrets are the Spotify client credentials;
//! the endpoint URLs fall back to the public Spotify hosts.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::types::Credentials;

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist and loads
/// `albumgrid/.env` from it, then a `.env` in the working directory. Both
/// files are optional; variables already present in the environment are
/// never overridden.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/albumgrid/.env`
/// - macOS: `~/Library/Application Support/albumgrid/.env`
/// - Windows: `%LOCALAPPDATA%/albumgrid/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("albumgrid/.env");
    path
}

/// Returns the Spotify API client ID.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID`, the client ID obtained when
/// registering the application with Spotify's developer platform.
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_SECRET`. The value must never be written
/// to logs.
pub fn spotify_client_secret() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns both client credentials or the name of the first missing one.
pub fn credentials() -> Result<Credentials, String> {
    Ok(Credentials {
        client_id: spotify_client_id()?,
        client_secret: spotify_client_secret()?,
    })
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Returns the token endpoint used for the client-credentials exchange.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)
}

fn required(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", key)),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
