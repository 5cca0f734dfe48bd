//! Post model for the Mention feed

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SITE_URL;

/// A post in the timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Opaque post ID (unique within a feed)
    pub id: String,
    /// Author display name
    pub author_name: String,
    /// Author handle (without the leading @)
    pub author_handle: String,
    /// Author avatar URI
    pub author_avatar: String,
    /// Post content (plain text, hashtags inline)
    pub content: String,
    /// Display timestamp, already formatted (e.g. "2h ago")
    pub time: String,
    /// Number of replies
    pub reply_count: u32,
    /// Number of reposts
    pub repost_count: u32,
    /// Number of likes
    pub like_count: u32,
    /// Whether the current user has liked this post
    pub liked: bool,
}

impl Post {
    /// Create an empty post with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            author_name: String::new(),
            author_handle: String::new(),
            author_avatar: String::new(),
            content: String::new(),
            time: String::new(),
            reply_count: 0,
            repost_count: 0,
            like_count: 0,
            liked: false,
        }
    }

    /// Create a locally composed post (fresh ID, zero counters)
    pub fn composed(author_name: &str, author_handle: &str, content: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_name: author_name.to_string(),
            author_handle: author_handle.to_string(),
            author_avatar: String::new(),
            content: content.to_string(),
            time: "now".to_string(),
            reply_count: 0,
            repost_count: 0,
            like_count: 0,
            liked: false,
        }
    }

    /// Toggle the liked flag, adjusting the displayed like count.
    ///
    /// Flipping to liked increments the count; flipping back decrements it,
    /// so a double toggle restores the original count. The count never goes
    /// below zero from a non-negative baseline.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.liked = false;
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.liked = true;
            self.like_count += 1;
        }
    }

    /// Canonical URL of the post on the web
    pub fn permalink(&self) -> String {
        format!("{SITE_URL}/post/{}", self.id)
    }

    /// Get a short preview of the content (for list display)
    pub fn preview(&self, max_len: usize) -> String {
        let content = self.content.replace('\n', " ");
        if content.len() <= max_len {
            content
        } else {
            format!("{}...", &content[..max_len.saturating_sub(3)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_round_trip() {
        let mut post = Post::new("1");
        post.like_count = 5;

        post.toggle_like();
        assert!(post.liked);
        assert_eq!(post.like_count, 6);

        post.toggle_like();
        assert!(!post.liked);
        assert_eq!(post.like_count, 5);
    }

    #[test]
    fn toggle_like_never_negative() {
        let mut post = Post::new("1");
        assert_eq!(post.like_count, 0);

        post.toggle_like();
        post.toggle_like();
        assert_eq!(post.like_count, 0);
        assert!(!post.liked);
    }

    #[test]
    fn permalink_uses_post_id() {
        let post = Post::new("abc123");
        assert_eq!(post.permalink(), "https://mention.earth/post/abc123");
    }
}
