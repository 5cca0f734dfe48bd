//! Search result model

use serde::{Deserialize, Serialize};

use super::Post;

/// A read-only search match.
///
/// Structurally similar to [`Post`] but carries no interaction counters;
/// when rendered as a post the counters default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Opaque result ID
    pub id: String,
    /// Author display name
    pub author_name: String,
    /// Author avatar URI
    pub author_avatar: String,
    /// Matched content text
    pub content: String,
    /// Display timestamp, already formatted
    pub timestamp: String,
}

impl SearchResult {
    /// Create a search result from literal display values
    pub fn new(id: &str, author_name: &str, author_avatar: &str, content: &str, timestamp: &str) -> Self {
        Self {
            id: id.to_string(),
            author_name: author_name.to_string(),
            author_avatar: author_avatar.to_string(),
            content: content.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    /// Convert to a [`Post`] for rendering in a feed list.
    ///
    /// The handle falls back to the author name and all counters are zero.
    pub fn into_post(self) -> Post {
        Post {
            id: self.id,
            author_handle: self.author_name.clone(),
            author_name: self.author_name,
            author_avatar: self.author_avatar,
            content: self.content,
            time: self.timestamp,
            reply_count: 0,
            repost_count: 0,
            like_count: 0,
            liked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_post_defaults_counters_to_zero() {
        let result = SearchResult::new("1", "Jane Smith", "https://via.placeholder.com/50", "This is a sample post", "2h ago");
        let post = result.into_post();

        assert_eq!(post.id, "1");
        assert_eq!(post.author_handle, "Jane Smith");
        assert_eq!(post.like_count, 0);
        assert_eq!(post.repost_count, 0);
        assert_eq!(post.reply_count, 0);
        assert!(!post.liked);
    }
}
