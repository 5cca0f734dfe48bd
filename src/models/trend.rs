//! Trending topic model

use serde::{Deserialize, Serialize};

/// Raw trend record as returned by the data source.
///
/// All fields are required; a record missing `hashtag` or `score` is a
/// malformed upstream payload and is rejected during normalization rather
/// than papered over with defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrend {
    /// Opaque record ID
    pub id: String,
    /// Hashtag label, `#`-prefixed
    pub hashtag: String,
    /// Total engagement score
    pub score: u64,
}

/// A trending topic, normalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Opaque trend ID
    pub id: String,
    /// Topic label (expected to begin with `#` for hashtags)
    pub topic: String,
    /// Total engagement, as a display string (e.g. "120K" in sample data)
    pub count_total: String,
}

impl Trend {
    /// Create a trend from literal display values
    pub fn new(id: &str, topic: &str, count_total: &str) -> Self {
        Self {
            id: id.to_string(),
            topic: topic.to_string(),
            count_total: count_total.to_string(),
        }
    }
}

impl From<RawTrend> for Trend {
    /// Normalize a raw record: identity is copied, the topic field is
    /// renamed, and the numeric score becomes a plain display string. No
    /// thousands-suffix formatting is applied here.
    fn from(raw: RawTrend) -> Self {
        Self {
            id: raw.id,
            topic: raw.hashtag,
            count_total: raw.score.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_raw_record() {
        let raw = RawTrend {
            id: "1".to_string(),
            hashtag: "#Go".to_string(),
            score: 42,
        };

        let trend = Trend::from(raw);
        assert_eq!(trend.id, "1");
        assert_eq!(trend.topic, "#Go");
        assert_eq!(trend.count_total, "42");
    }

    #[test]
    fn rejects_record_missing_score() {
        let value = serde_json::json!({ "id": "1", "hashtag": "#Go" });
        assert!(serde_json::from_value::<RawTrend>(value).is_err());
    }

    #[test]
    fn rejects_record_missing_hashtag() {
        let value = serde_json::json!({ "id": "1", "score": 42 });
        assert!(serde_json::from_value::<RawTrend>(value).is_err());
    }
}
