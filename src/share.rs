//! Sharing gateway
//!
//! Wraps the platform share capability behind a trait so the feed can hand a
//! post URL to the OS without holding a persistent handle. The counter
//! toggle on [`Post`] never depends on the outcome here.

use anyhow::{Context, Result};

use crate::models::Post;

/// Dialog title used for every share request
pub const SHARE_TITLE: &str = "Share Post";

/// MIME type of the shared payload
pub const SHARE_MIME_TYPE: &str = "text/plain";

/// A single share delegation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Canonical URL being shared
    pub url: String,
    /// Dialog title
    pub title: &'static str,
    /// Payload MIME type
    pub mime_type: &'static str,
}

impl ShareRequest {
    /// Build the share request for a post's permalink
    pub fn for_post(post: &Post) -> Self {
        Self {
            url: post.permalink(),
            title: SHARE_TITLE,
            mime_type: SHARE_MIME_TYPE,
        }
    }
}

/// Platform sharing capability
pub trait ShareGateway {
    /// Whether sharing is available on this platform
    fn is_available(&self) -> bool;

    /// Delegate a share request to the platform
    fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// How a share attempt completed.
///
/// Every path reports back so the caller can surface a notice; there is no
/// other return value to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The request was handed to the platform
    Shared,
    /// Sharing is not available on this device
    Unavailable,
    /// The platform rejected the request
    Failed {
        /// Human-readable failure reason
        reason: String,
    },
}

/// Share a post through the gateway.
///
/// When the capability is unavailable this performs no delegation and the
/// caller surfaces an informational notice; post state is never touched.
pub async fn share_post(gateway: &impl ShareGateway, post: &Post) -> ShareOutcome {
    if !gateway.is_available() {
        return ShareOutcome::Unavailable;
    }

    let request = ShareRequest::for_post(post);
    match gateway.share(&request) {
        Ok(()) => ShareOutcome::Shared,
        Err(e) => ShareOutcome::Failed {
            reason: e.to_string(),
        },
    }
}

/// Share gateway backed by the operating system's URL handler
#[derive(Default)]
pub struct SystemShare;

impl SystemShare {
    /// Create a new system share gateway
    pub fn new() -> Self {
        Self
    }
}

impl ShareGateway for SystemShare {
    fn is_available(&self) -> bool {
        #[cfg(target_os = "linux")]
        {
            // Opening URLs on Linux goes through xdg-open
            std::env::var_os("PATH").is_some_and(|paths| {
                std::env::split_paths(&paths).any(|dir| dir.join("xdg-open").is_file())
            })
        }
        #[cfg(not(target_os = "linux"))]
        {
            true
        }
    }

    fn share(&self, request: &ShareRequest) -> Result<()> {
        open::that(&request.url).context("Failed to hand URL to the system handler")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingGateway {
        available: bool,
        fail: bool,
        requests: RefCell<Vec<ShareRequest>>,
    }

    impl ShareGateway for RecordingGateway {
        fn is_available(&self) -> bool {
            self.available
        }

        fn share(&self, request: &ShareRequest) -> Result<()> {
            self.requests.borrow_mut().push(request.clone());
            if self.fail {
                anyhow::bail!("share sheet dismissed");
            }
            Ok(())
        }
    }

    fn post() -> Post {
        Post::new("42")
    }

    #[tokio::test]
    async fn unavailable_gateway_is_never_invoked() {
        let gateway = RecordingGateway::default();

        let outcome = share_post(&gateway, &post()).await;

        assert_eq!(outcome, ShareOutcome::Unavailable);
        assert!(gateway.requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn delegates_permalink_with_static_options() {
        let gateway = RecordingGateway {
            available: true,
            ..RecordingGateway::default()
        };

        let outcome = share_post(&gateway, &post()).await;

        assert_eq!(outcome, ShareOutcome::Shared);
        let requests = gateway.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://mention.earth/post/42");
        assert_eq!(requests[0].title, "Share Post");
        assert_eq!(requests[0].mime_type, "text/plain");
    }

    #[tokio::test]
    async fn failure_still_reports_completion() {
        let gateway = RecordingGateway {
            available: true,
            fail: true,
            ..RecordingGateway::default()
        };

        match share_post(&gateway, &post()).await {
            ShareOutcome::Failed { reason } => assert!(reason.contains("dismissed")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
