//! Config loader — reads `~/.notegram/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.notegram/config.json`
//! 3. Environment variables `NOTEGRAM_<FIELD>` (override JSON)

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path (or `path`) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    apply_env_overrides(load_config_from_path(&config_path), |key| {
        std::env::var(key).ok()
    })
}

/// Load the config file alone, strictly, without env overrides.
///
/// Use this when the result is going to be saved back: values taken from the
/// environment never end up on disk, and a file that can't be read or parsed
/// is an error instead of being replaced by defaults. A missing file is
/// `Config::default()`.
pub fn try_load_config_file(path: Option<&Path>) -> anyhow::Result<Config> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    if !config_path.exists() {
        debug!("No config file at {}, starting from defaults", config_path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config file {}", config_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", config_path.display()))
}

fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    // Ensure parent directory exists
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Supported overrides:
/// - `NOTEGRAM_BOT_TOKEN` → `bot_token`
/// - `NOTEGRAM_VAULT_PATH` → `vault_path`
/// - `NOTEGRAM_API_BASE` → `api_base`
fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("NOTEGRAM_BOT_TOKEN") {
        config.bot_token = val;
    }
    if let Some(val) = lookup("NOTEGRAM_VAULT_PATH") {
        config.vault_path = Some(val);
    }
    if let Some(val) = lookup("NOTEGRAM_API_BASE") {
        config.api_base = Some(val);
    }
    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
