use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::{FilterParameters, DEFAULT_LANGUAGE};

pub const API_KEY_ENV: &str = "NEWSDATA_API_KEY";
pub const BASE_URL_ENV: &str = "NEWSDATA_BASE_URL";

const APP_DIR: &str = "news-reader";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub default_category: String,

    #[serde(default)]
    pub default_country: Option<String>,

    /// Whole-request timeout; the HTTP client's default applies when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://newsdata.io/api/1/news".to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_language: default_language(),
            default_category: String::new(),
            default_country: None,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Parse config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize config to a TOML string
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Read the config at `path`, writing a default file if none exists.
    /// Environment variables override file values.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)?
        } else {
            tracing::info!("No config at {:?}, writing defaults", path);
            let config = Config::default();
            config.save_to(path)?;
            config
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Filter parameters built from the configured defaults
    pub fn default_filter(&self) -> Result<FilterParameters> {
        FilterParameters::new(
            &self.default_category,
            &self.default_language,
            self.default_country.as_deref(),
        )
    }
}
