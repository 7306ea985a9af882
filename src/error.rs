use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Transport-level failure (DNS, timeout, reset, non-2xx status)
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// The response body did not match the expected schema
    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
