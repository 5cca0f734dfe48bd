//! Mention HTTP API source

use anyhow::{Context, Result};
use reqwest::Client;

use super::DataSource;

/// Data source backed by the Mention HTTP API
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a new HTTP source for the given API base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build API URL
    fn api_url(&self, resource: &str) -> String {
        format!("{}/api/v1/{resource}", self.base_url)
    }
}

impl DataSource for HttpSource {
    async fn fetch_data(&self, resource: &str) -> Result<Vec<serde_json::Value>> {
        let url = self.api_url(resource);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {resource}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Mention API error {status}: {body}");
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse {resource} response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_resource() {
        let source = HttpSource::new("https://api.mention.earth/");
        assert_eq!(
            source.api_url("hashtags"),
            "https://api.mention.earth/api/v1/hashtags"
        );
    }
}
