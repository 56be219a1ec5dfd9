//! Configuration Management
//!
//! Provider settings come from the provider block, the persisted config file
//! and the environment, in that order of precedence for the token. The base
//! URL is the one setting the environment overrides outright.

use crate::api::client::BASE_URL;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const TOKEN_ENV: &str = "UTHO_TOKEN";
pub const BASE_URL_ENV: &str = "UTHO_BASE_URL";

/// Provider configuration
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProviderConfig {
    /// API bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API root, defaults to the production endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("utho").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path; missing or unreadable files give the
    /// empty config.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Layer explicit values (CLI flags, provider block) over this config.
    pub fn with_overrides(mut self, token: Option<String>, base_url: Option<String>) -> Self {
        if token.is_some() {
            self.token = token;
        }
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    /// Token to authenticate with: config value, then `UTHO_TOKEN`; empty when
    /// neither is set
    pub(crate) fn resolve_token(&self, env: impl Fn(&str) -> Option<String>) -> String {
        self.token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| env(TOKEN_ENV))
            .unwrap_or_default()
    }

    /// API root: `UTHO_BASE_URL`, then config value, then production
    pub(crate) fn resolve_base_url(&self, env: impl Fn(&str) -> Option<String>) -> String {
        env(BASE_URL_ENV)
            .filter(|u| !u.is_empty())
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| BASE_URL.to_string())
    }
}
