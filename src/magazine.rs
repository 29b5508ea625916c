use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::debug;

pub const TABLES_FOR_TWO_PATH: &str = "/magazine/tables-for-two";

/// Fetches raw page markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "Fetching page");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("{} returned {}", url, status);
        }

        resp.text()
            .await
            .with_context(|| format!("Failed to read body of {}", url))
    }
}

pub fn listing_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), TABLES_FOR_TWO_PATH)
}

/// Absolute URL of an article. This is also the provenance recorded on the
/// notification.
pub fn article_url(base_url: &str, reference: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), reference)
}
