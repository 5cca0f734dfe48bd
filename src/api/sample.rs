//! Sample data source for demo mode

use anyhow::Result;

use super::DataSource;

/// Data source serving built-in sample records
#[derive(Default)]
pub struct SampleSource;

impl SampleSource {
    /// Create a new sample source
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for SampleSource {
    async fn fetch_data(&self, resource: &str) -> Result<Vec<serde_json::Value>> {
        match resource {
            "hashtags" => Ok(sample_hashtags()),
            other => Err(anyhow::anyhow!("Unknown resource: {other}")),
        }
    }
}

/// Raw trend records, shaped like the Mention API response
fn sample_hashtags() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({ "id": "1", "hashtag": "#Photography", "score": 120_000 }),
        serde_json::json!({ "id": "2", "hashtag": "#ClimateAction", "score": 80_000 }),
        serde_json::json!({ "id": "3", "hashtag": "#IndieMusic", "score": 50_000 }),
        serde_json::json!({ "id": "4", "hashtag": "#Gardening", "score": 30_000 }),
        serde_json::json!({ "id": "5", "hashtag": "#StreetArt", "score": 20_000 }),
        serde_json::json!({ "id": "6", "hashtag": "#Astronomy", "score": 10_000 }),
        serde_json::json!({ "id": "7", "hashtag": "#SlowCooking", "score": 5_000 }),
        serde_json::json!({ "id": "8", "hashtag": "#Birdwatching", "score": 2_000 }),
        serde_json::json!({ "id": "9", "hashtag": "#UrbanSketching", "score": 1_000 }),
        serde_json::json!({ "id": "10", "hashtag": "#NightSky", "score": 500 }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_hashtags_resource() {
        let source = SampleSource::new();
        let records = tokio_test::block_on(source.fetch_data("hashtags")).unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0]["hashtag"], "#Photography");
    }

    #[test]
    fn rejects_unknown_resource() {
        let source = SampleSource::new();
        assert!(tokio_test::block_on(source.fetch_data("nope")).is_err());
    }
}
