use std::{collections::HashMap, fs};

use url::Url;

use crate::error::ConfigError;

/// Endpoint the client ships with.
pub const DEFAULT_API_BASE_URL: &str = "https://contact-manager-5ug0.onrender.com";
pub const SETTINGS_FILE: &str = "contacts.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

impl ClientSettings {
    pub fn with_api_base_url(mut self, raw: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = raw {
            self.api_base_url = normalize_base_url(raw)?;
        }
        Ok(self)
    }
}

/// Defaults, then `contacts.toml` in the working directory, then env.
pub fn load_settings() -> Result<ClientSettings, ConfigError> {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    resolve_settings(file.as_deref(), |key| std::env::var(key).ok())
}

pub(crate) fn resolve_settings(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, ConfigError> {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file {
        let file_cfg = toml::from_str::<HashMap<String, String>>(raw).map_err(|e| {
            ConfigError::File {
                path: SETTINGS_FILE.to_string(),
                message: e.to_string(),
            }
        })?;
        if let Some(v) = file_cfg.get("api_base_url") {
            settings.api_base_url = normalize_base_url(v)?;
        }
    }

    if let Some(v) = env("CONTACTS_API_URL") {
        settings.api_base_url = normalize_base_url(&v)?;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = normalize_base_url(&v)?;
    }

    Ok(settings)
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
