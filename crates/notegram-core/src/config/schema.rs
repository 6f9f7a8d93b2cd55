//! Configuration schema.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.
//! Every field carries a default so a partial file merges over
//! `Config::default()`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default Telegram Bot API host.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Root configuration — loaded from `~/.notegram/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Bot token from @BotFather. Empty = not configured.
    pub bot_token: String,
    /// Channel display name → chat identifier, passed verbatim as `chat_id`.
    pub channels: BTreeMap<String, String>,
    /// Vault root that embed links resolve against.
    /// `None` = the directory the note lives in.
    pub vault_path: Option<String>,
    /// Bot API base URL (overrides [`DEFAULT_API_BASE`]).
    pub api_base: Option<String>,
}

impl Config {
    /// Whether a bot token has been set.
    pub fn has_token(&self) -> bool {
        !self.bot_token.is_empty()
    }

    /// Channel names in presentation order.
    pub fn channel_names(&self) -> Vec<String> {
        self.channels.keys().cloned().collect()
    }

    /// Look up a channel id by display name.
    pub fn channel_id(&self, name: &str) -> Option<&str> {
        self.channels.get(name).map(String::as_str)
    }

    /// Resolved API base URL.
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }
}
