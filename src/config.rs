//! Configuration management for audiofeat.
//!
//! Values come from environment variables, optionally seeded from a `.env` file
//! in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::batch::AUDIO_FEATURES_BATCH_SIZE;

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `audiofeat/.env` in the local data directory.
///
/// Creates the directory if needed. A missing `.env` file is not an error, the
/// process environment is used as is. Variables already set in the environment
/// are not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/audiofeat/.env`
/// - macOS: `~/Library/Application Support/audiofeat/.env`
/// - Windows: `%LOCALAPPDATA%/audiofeat/.env`
///
/// # Errors
///
/// Fails if the directory cannot be created or the `.env` file exists but
/// cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Root of everything audiofeat keeps on disk.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("audiofeat");
    path
}

/// Client id of the registered Spotify application.
///
/// Read from `SPOTIFY_API_AUTH_CLIENT_ID`.
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Client secret of the registered Spotify application.
///
/// Read from `SPOTIFY_API_AUTH_CLIENT_SECRET`. Never log this value.
pub fn spotify_client_secret() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Base URL of the Web API, `SPOTIFY_API_URL` or `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Token endpoint, `SPOTIFY_API_TOKEN_URL` or `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Number of track ids per audio-features request.
///
/// Read from `AUDIOFEAT_BATCH_SIZE`, falling back to the API cap of 100 when
/// unset. A value that is not an unsigned integer is reported as an error
/// rather than silently replaced.
pub fn batch_size() -> Result<usize, String> {
    match env::var("AUDIOFEAT_BATCH_SIZE") {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("AUDIOFEAT_BATCH_SIZE '{}' is not a valid size: {}", raw, e)),
        Err(_) => Ok(AUDIO_FEATURES_BATCH_SIZE),
    }
}

/// Album titles to skip, from the comma separated `AUDIOFEAT_EXCLUDED_ALBUMS`.
pub fn excluded_albums() -> Vec<String> {
    env::var("AUDIOFEAT_EXCLUDED_ALBUMS")
        .map(|raw| crate::utils::parse_name_list(&raw))
        .unwrap_or_default()
}

fn required(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", key)),
    }
}
