use super::{category::Category, entry::MediaEntry, state::LoadState};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/wintermute-cell/grimoire/master/content";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::HttpStatus { .. } => "http_status",
            LoadError::Decode(_) => "decode",
        }
    }

    /// Short message shown in place of the content area.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Network(_) => "Failed to load content".to_string(),
            LoadError::HttpStatus { status, .. } => {
                format!("Failed to fetch (HTTP {})", status.as_u16())
            }
            LoadError::Decode(_) => "Content is not a valid media list".to_string(),
        }
    }
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable name of the source
    fn name(&self) -> &'static str;

    /// Fetch the media list for one category
    async fn fetch(&self, category: Category) -> Result<Vec<MediaEntry>, LoadError>;
}

/// Runs one load cycle against `source` and folds the outcome into a
/// settled [`LoadState`].
pub async fn load(source: &dyn ContentSource, category: Category) -> LoadState {
    match source.fetch(category).await {
        Ok(entries) => {
            info!(
                "Loaded {} entries for {} from {}",
                entries.len(),
                category,
                source.name()
            );
            LoadState::Loaded(entries)
        }
        Err(e) => {
            warn!(kind = e.kind(), "Loading {} failed: {}", category, e);
            LoadState::Failed(e.user_message())
        }
    }
}

/// Reads `{base_url}/{category}.json` from a static file host.
#[derive(Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpContentSource {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn resource_url(&self, category: Category) -> String {
        format!(
            "{}/{}.json",
            self.base_url.as_str().trim_end_matches('/'),
            category.key()
        )
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, category: Category) -> Result<Vec<MediaEntry>, LoadError> {
        let url = self.resource_url(category);
        info!("Fetching {} content from {}", category, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus { status, url });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        debug!("Received {} bytes for {}", body.len(), category);

        let items: Vec<serde_json::Value> =
            serde_json::from_slice(&body).map_err(|e| LoadError::Decode(e.to_string()))?;

        Ok(items.into_iter().map(MediaEntry::from_value).collect())
    }
}
