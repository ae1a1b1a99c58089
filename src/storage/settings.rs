//! Settings storage
//!
//! Manages persistence of the inference endpoint and appearance preferences.

use crate::ollama::DEFAULT_HOST;
use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the persisted host, as the Ollama CLI does
pub const HOST_ENV_VAR: &str = "OLLAMA_HOST";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the Ollama server
    #[serde(default = "default_host")]
    pub ollama_host: String,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Host taken from `OLLAMA_HOST` for this session only; never saved
    #[serde(skip)]
    pub host_override: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ollama_host: default_host(),
            theme: default_theme(),
            host_override: None,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Normalizes the host to `scheme://host:port` without a trailing slash.
    pub fn validate(&mut self) {
        self.ollama_host = normalize_host(&self.ollama_host);

        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }
    }

    /// The host to connect to: the environment override if any, else the saved one.
    pub fn effective_host(&self) -> &str {
        self.host_override.as_deref().unwrap_or(&self.ollama_host)
    }

    /// Apply `OLLAMA_HOST` if it is set to something non-empty.
    ///
    /// The saved `ollama_host` is left alone so saving keeps the user's value.
    fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(host) = value.filter(|h| !h.trim().is_empty()) {
            tracing::info!("Using {} from environment: {}", HOST_ENV_VAR, host);
            self.host_override = Some(normalize_host(&host));
        }
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        return default_host();
    }
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    let mut settings = match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    };
    settings.apply_env_override(std::env::var(HOST_ENV_VAR).ok());
    settings
}

/// Load and validate settings from `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {:?}", path);
    Ok(())
}
