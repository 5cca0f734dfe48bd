//! Search result and trend filtering
//!
//! Facets are a small fixed set of boolean toggles. Content type is detected
//! by a substring heuristic over the post text; the heuristic is isolated in
//! [`content_mentions`] so a structured-metadata model can replace it without
//! touching the filter combinator.

use serde::{Deserialize, Serialize};

use crate::models::{SearchResult, Trend};

/// Content-type facets available to every user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Keep results that mention images
    pub show_images: bool,
    /// Keep results that mention videos
    pub show_videos: bool,
    /// Keep results that mention plain text
    pub show_text: bool,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            show_images: true,
            show_videos: true,
            show_text: true,
        }
    }
}

/// Advanced sort facets, reachable only for premium users.
///
/// No comparator is defined for these toggles yet; they are exposed but do
/// not reorder results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedFilters {
    /// Sort by date (no-op pending a specified ordering)
    pub sort_by_date: bool,
    /// Sort by relevance (no-op pending a specified ordering)
    pub sort_by_relevance: bool,
}

/// Crude textual content-type detection.
///
/// A marker substring anywhere in the content counts as that content type.
fn content_mentions(content: &str, marker: &str) -> bool {
    content.contains(marker)
}

/// Apply content-type facets to a result set.
///
/// A result is excluded iff its content carries a type marker whose facet is
/// disabled; results with no markers always survive. Pure and
/// order-preserving, so applying the same facets twice is a no-op.
pub fn apply(results: &[SearchResult], filters: &Filters) -> Vec<SearchResult> {
    results
        .iter()
        .filter(|result| {
            if !filters.show_images && content_mentions(&result.content, "image") {
                return false;
            }
            if !filters.show_videos && content_mentions(&result.content, "video") {
                return false;
            }
            if !filters.show_text && content_mentions(&result.content, "text") {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Filter the trend list to topics matching a query (case-insensitive).
///
/// An empty query keeps every trend.
pub fn matching_trends(trends: &[Trend], query: &str) -> Vec<Trend> {
    if query.is_empty() {
        return trends.to_vec();
    }

    let query = query.to_lowercase();
    trends
        .iter()
        .filter(|trend| trend.topic.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, content: &str) -> SearchResult {
        SearchResult::new(id, "Jane Smith", "https://via.placeholder.com/50", content, "2h ago")
    }

    #[test]
    fn excludes_disabled_content_type() {
        let results = vec![result("1", "an image here"), result("2", "plain text")];
        let filters = Filters {
            show_images: false,
            show_videos: true,
            show_text: true,
        };

        let filtered = apply(&results, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content, "plain text");
    }

    #[test]
    fn unmarked_results_always_survive() {
        let results = vec![result("1", "nothing of note")];
        let filters = Filters {
            show_images: false,
            show_videos: false,
            show_text: false,
        };

        assert_eq!(apply(&results, &filters).len(), 1);
    }

    #[test]
    fn is_idempotent() {
        let results = vec![
            result("1", "a video clip"),
            result("2", "an image here"),
            result("3", "plain words"),
        ];
        let filters = Filters {
            show_images: true,
            show_videos: false,
            show_text: true,
        };

        let once = apply(&results, &filters);
        let twice = apply(&once, &filters);
        assert_eq!(once.len(), twice.len());
        assert_eq!(
            once.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            twice.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn preserves_input_order() {
        let results = vec![result("1", "first"), result("2", "second"), result("3", "third")];
        let filtered = apply(&results, &Filters::default());

        assert_eq!(
            filtered.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn matches_trends_case_insensitively() {
        let trends = vec![
            Trend::new("1", "#Photography", "120K"),
            Trend::new("2", "#Music", "80K"),
        ];

        let matched = matching_trends(&trends, "photo");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].topic, "#Photography");

        assert_eq!(matching_trends(&trends, "").len(), 2);
    }
}
