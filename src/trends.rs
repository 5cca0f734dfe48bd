//! Trend aggregation
//!
//! Owns the process-wide trend list: raw records come from a data source,
//! are normalized into display [`Trend`]s, and the normalized snapshot is
//! persisted to the local cache.

use thiserror::Error;

use crate::api::DataSource;
use crate::db::{SnapshotCache, TRENDS_KEY};
use crate::models::{RawTrend, Trend};

/// Resource name the data source serves trend records under
pub const TRENDS_RESOURCE: &str = "hashtags";

/// Why a refresh left the trend list untouched
#[derive(Debug, Error)]
pub enum TrendError {
    /// The data source rejected the fetch
    #[error("Failed to fetch trends: {0}")]
    Fetch(anyhow::Error),
    /// A raw record was missing or mistyping a required field
    #[error("Malformed trend record: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Aggregates raw trend records into the authoritative trend list.
///
/// The list starts empty and is replaced wholesale by each successful
/// [`refresh`](Self::refresh); it outlives any single view.
#[derive(Debug, Default)]
pub struct TrendAggregator {
    trends: Vec<Trend>,
}

impl TrendAggregator {
    /// Create an aggregator with an empty trend list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator seeded from a cached snapshot
    pub fn with_cached(trends: Vec<Trend>) -> Self {
        Self { trends }
    }

    /// The current trend list, in source order
    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    /// Fetch, normalize, replace, and persist the trend list.
    ///
    /// Complete-or-noop: a fetch failure or malformed record is logged and
    /// leaves the in-memory list unchanged with no cache write. The cache
    /// write itself is best-effort; a persistence failure is logged and does
    /// not fail the refresh.
    pub async fn refresh<S: DataSource>(
        &mut self,
        source: &S,
        cache: &impl SnapshotCache,
    ) -> Result<&[Trend], TrendError> {
        let records = match source.fetch_data(TRENDS_RESOURCE).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error fetching trends: {e}");
                return Err(TrendError::Fetch(e));
            }
        };

        let normalized: Vec<Trend> = match records
            .into_iter()
            .map(|record| serde_json::from_value::<RawTrend>(record).map(Trend::from))
            .collect()
        {
            Ok(trends) => trends,
            Err(e) => {
                tracing::error!("Error normalizing trends: {e}");
                return Err(TrendError::Malformed(e));
            }
        };

        self.trends = normalized;

        match serde_json::to_value(&self.trends) {
            Ok(value) => {
                if let Err(e) = cache.store(TRENDS_KEY, &value) {
                    tracing::warn!("Failed to cache trends: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize trends for cache: {e}"),
        }

        Ok(&self.trends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct StaticSource {
        records: Vec<serde_json::Value>,
    }

    impl DataSource for StaticSource {
        async fn fetch_data(&self, _resource: &str) -> Result<Vec<serde_json::Value>> {
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    impl DataSource for FailingSource {
        async fn fetch_data(&self, resource: &str) -> Result<Vec<serde_json::Value>> {
            Err(anyhow::anyhow!("{resource} unavailable"))
        }
    }

    #[derive(Default)]
    struct MemoryCache {
        entries: RefCell<HashMap<String, serde_json::Value>>,
        fail_writes: bool,
    }

    impl SnapshotCache for MemoryCache {
        fn store(&self, key: &str, value: &serde_json::Value) -> Result<()> {
            if self.fail_writes {
                anyhow::bail!("disk full");
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.clone());
            Ok(())
        }

        fn load(&self, key: &str) -> Result<Option<serde_json::Value>> {
            Ok(self.entries.borrow().get(key).cloned())
        }
    }

    fn raw(id: &str, hashtag: &str, score: u64) -> serde_json::Value {
        serde_json::json!({ "id": id, "hashtag": hashtag, "score": score })
    }

    #[tokio::test]
    async fn refresh_replaces_list_and_caches_snapshot() {
        let source = StaticSource {
            records: vec![raw("1", "#Go", 42), raw("2", "#Rust", 7)],
        };
        let cache = MemoryCache::default();
        let mut aggregator = TrendAggregator::with_cached(vec![Trend::new("old", "#Old", "1")]);

        aggregator.refresh(&source, &cache).await.unwrap();

        assert_eq!(
            aggregator.trends(),
            &[Trend::new("1", "#Go", "42"), Trend::new("2", "#Rust", "7")]
        );
        let cached = cache.load(TRENDS_KEY).unwrap().unwrap();
        assert_eq!(cached[0]["topic"], "#Go");
        assert_eq!(cached[0]["count_total"], "42");
    }

    #[tokio::test]
    async fn fetch_failure_is_a_noop() {
        let cache = MemoryCache::default();
        let before = vec![Trend::new("1", "#Go", "42")];
        let mut aggregator = TrendAggregator::with_cached(before.clone());

        let result = aggregator.refresh(&FailingSource, &cache).await;

        assert!(matches!(result, Err(TrendError::Fetch(_))));
        assert_eq!(aggregator.trends(), before.as_slice());
        assert!(cache.load(TRENDS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_record_is_rejected() {
        let source = StaticSource {
            records: vec![serde_json::json!({ "id": "1", "hashtag": "#Go" })],
        };
        let cache = MemoryCache::default();
        let before = vec![Trend::new("1", "#Go", "42")];
        let mut aggregator = TrendAggregator::with_cached(before.clone());

        let result = aggregator.refresh(&source, &cache).await;

        assert!(matches!(result, Err(TrendError::Malformed(_))));
        assert_eq!(aggregator.trends(), before.as_slice());
        assert!(cache.load(TRENDS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn cache_write_failure_does_not_fail_refresh() {
        let source = StaticSource {
            records: vec![raw("1", "#Go", 42)],
        };
        let cache = MemoryCache {
            fail_writes: true,
            ..MemoryCache::default()
        };
        let mut aggregator = TrendAggregator::new();

        aggregator.refresh(&source, &cache).await.unwrap();
        assert_eq!(aggregator.trends(), &[Trend::new("1", "#Go", "42")]);
    }

    #[tokio::test]
    async fn refresh_preserves_source_order() {
        let source = StaticSource {
            records: vec![raw("3", "#C", 3), raw("1", "#A", 1), raw("2", "#B", 2)],
        };
        let cache = MemoryCache::default();
        let mut aggregator = TrendAggregator::new();

        aggregator.refresh(&source, &cache).await.unwrap();

        let topics: Vec<_> = aggregator.trends().iter().map(|t| t.topic.as_str()).collect();
        assert_eq!(topics, vec!["#C", "#A", "#B"]);
    }
}
