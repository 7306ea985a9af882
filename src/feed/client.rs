use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{FetchResult, FilterParameters};

const USER_AGENT_STRING: &str = concat!("news-reader/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce a page of news for a set of filters.
#[async_trait]
pub trait NewsSource: Send + Sync + 'static {
    async fn fetch(&self, params: &FilterParameters) -> Result<FetchResult>;
}

/// Fetch client for the newsdata.io `news` endpoint.
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl NewsClient {
    pub fn new(client: Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "no API key: set {} or api_key in {:?}",
                    crate::config::API_KEY_ENV,
                    Config::config_path()
                ))
            })?;
        let base_url = Url::parse(&config.base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT_STRING);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self::new(client, base_url, api_key))
    }

    /// Outbound URL for `params`. `q` and `country` are only present when set.
    pub fn request_url(&self, params: &FilterParameters) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apikey", &self.api_key);
            query.append_pair("language", params.language());
            if let Some(q) = params.query() {
                query.append_pair("q", q);
            }
            if let Some(country) = params.country() {
                query.append_pair("country", country);
            }
        }
        url
    }

    pub async fn fetch_news(&self, params: &FilterParameters) -> Result<FetchResult> {
        tracing::debug!(
            "Fetching news: category={:?}, language={}, country={:?}",
            params.query(),
            params.language(),
            params.country()
        );

        let response = self
            .client
            .get(self.request_url(params))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let result: FetchResult = serde_json::from_str(&body)?;

        tracing::debug!(
            "API status={}, {} of {} results",
            result.status,
            result.results.len(),
            result.total_results
        );

        Ok(result)
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn fetch(&self, params: &FilterParameters) -> Result<FetchResult> {
        self.fetch_news(params).await
    }
}
