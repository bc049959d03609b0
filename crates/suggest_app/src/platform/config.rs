use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use suggest_core::SearchSettings;
use suggest_engine::FetchSettings;
use suggest_logging::{suggest_info, suggest_warn};
use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url {0:?} must use http or https")]
    UnsupportedScheme(String),
}

/// User-tunable settings, read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let search = SearchSettings::default();
        let fetch = FetchSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: search.debounce_delay.as_millis() as u64,
            min_query_chars: search.min_query_chars,
            connect_timeout_ms: fetch.connect_timeout.as_millis() as u64,
            request_timeout_ms: fetch.request_timeout.as_millis() as u64,
            max_response_bytes: fetch.max_bytes,
        }
    }
}

impl SearchConfig {
    /// An empty query is never sent, so the threshold is at least one character.
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            debounce_delay: Duration::from_millis(self.debounce_ms),
            min_query_chars: self.min_query_chars.max(1),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
        }
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::UnsupportedScheme(self.base_url.clone())),
        }
    }
}

/// Loads the config file; a missing or broken file falls back to defaults.
pub(crate) fn load_config(path: &Path) -> SearchConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SearchConfig::default();
        }
        Err(err) => {
            suggest_warn!("Failed to read config from {:?}: {}", path, err);
            return SearchConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            suggest_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            suggest_warn!("Failed to parse config from {:?}: {}", path, err);
            SearchConfig::default()
        }
    }
}
