//! Data source collaborators
//!
//! The core never owns a wire protocol; it asks an opaque source for the raw
//! records behind a named resource and normalizes whatever comes back.

pub mod http;
pub mod sample;

use anyhow::Result;

/// A source of raw records, keyed by resource name
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Fetch the raw records for a resource (e.g. `"hashtags"`)
    async fn fetch_data(&self, resource: &str) -> Result<Vec<serde_json::Value>>;
}

/// Unified source that wraps the concrete implementations
pub enum Source {
    /// Mention HTTP API
    Http(http::HttpSource),
    /// Built-in sample data (demo mode)
    Sample(sample::SampleSource),
}

impl DataSource for Source {
    async fn fetch_data(&self, resource: &str) -> Result<Vec<serde_json::Value>> {
        match self {
            Self::Http(s) => s.fetch_data(resource).await,
            Self::Sample(s) => s.fetch_data(resource).await,
        }
    }
}

/// Get the source for the configured API URL, or the sample source when
/// running in demo mode
pub fn get_source(api_url: &str, demo: bool) -> Source {
    if demo {
        Source::Sample(sample::SampleSource::new())
    } else {
        Source::Http(http::HttpSource::new(api_url))
    }
}
