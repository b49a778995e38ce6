//! Best-effort community catalog client.
//!
//! Tries a short ordered list of candidate URLs and returns the first that
//! yields a parseable payload. Every failure is logged and skipped; callers
//! get `None` instead of an error, so this feature can never block or break
//! the primary report.

use std::time::Duration;

use serde::Deserialize;

/// One community catalog entry. Upstream catalogs disagree on field names,
/// so every field is optional with a known alias.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    #[serde(default, alias = "title")]
    pub name: Option<String>,
    #[serde(default, alias = "summary")]
    pub description: Option<String>,
    #[serde(default, alias = "link")]
    pub url: Option<String>,
}

impl CatalogItem {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed skill")
    }
}

/// Either a raw array or an object wrapping the list under `skills`/`items`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Items(Vec<CatalogItem>),
    Wrapped {
        #[serde(default)]
        skills: Vec<CatalogItem>,
        #[serde(default)]
        items: Vec<CatalogItem>,
    },
}

impl CatalogPayload {
    fn into_items(self) -> Vec<CatalogItem> {
        match self {
            Self::Items(items) => items,
            Self::Wrapped { skills, items } => {
                if skills.is_empty() {
                    items
                } else {
                    skills
                }
            }
        }
    }
}

/// A successfully fetched catalog preview. The item list may be empty.
#[derive(Debug, Clone)]
pub struct CatalogPreview {
    /// The candidate URL that answered.
    pub source: String,
    pub items: Vec<CatalogItem>,
}

#[derive(Debug, thiserror::Error)]
enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(u16),
}

pub struct CatalogClient {
    client: reqwest::Client,
    urls: Vec<String>,
}

impl CatalogClient {
    /// Build a client with a bounded per-candidate timeout so dead hosts
    /// cannot stall the caller.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized (should never happen
    /// with rustls).
    #[must_use]
    pub fn new(urls: Vec<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(concat!("skillscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("catalog HTTP client construction must not fail");
        Self { client, urls }
    }

    /// Try each candidate in order and return the first parseable preview.
    ///
    /// Returns `None` when every candidate fails; failures are logged at
    /// debug level and never surfaced.
    pub async fn fetch(&self) -> Option<CatalogPreview> {
        for url in &self.urls {
            match self.fetch_one(url).await {
                Ok(items) => {
                    tracing::debug!(source = %url, count = items.len(), "community catalog loaded");
                    return Some(CatalogPreview {
                        source: url.clone(),
                        items,
                    });
                }
                Err(e) => {
                    tracing::debug!(source = %url, "community catalog candidate skipped: {e}");
                }
            }
        }
        None
    }

    async fn fetch_one(&self, url: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }
        let payload: CatalogPayload = response.json().await?;
        Ok(payload.into_items())
    }
}
