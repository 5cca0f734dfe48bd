//! Async operations for the TUI
//!
//! Uses channels to communicate between the sync TUI loop and the worker.
//! The worker owns the data source, the share gateway, the snapshot
//! database handle, and the trend aggregator (the authoritative trend
//! list); the TUI keeps its own display copies.

use tokio::sync::mpsc;

use crate::api::Source;
use crate::db::Database;
use crate::models::{Post, Trend};
use crate::share::{ShareOutcome, SystemShare, share_post};
use crate::trends::TrendAggregator;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum AsyncCommand {
    /// Refresh the trend list from the data source
    RefreshTrends,
    /// Share a post through the platform gateway
    Share {
        /// The post to share
        post: Post,
    },
    /// Shutdown the worker
    Shutdown,
}

/// Results sent back from the async worker to the TUI
#[derive(Debug)]
pub enum AsyncResult {
    /// Trend list refreshed and cached
    TrendsRefreshed {
        /// The normalized trends, in source order
        trends: Vec<Trend>,
    },
    /// Post was handed to the platform share handler
    Shared {
        /// ID of the shared post
        post_id: String,
    },
    /// Sharing is not available on this device
    ShareUnavailable,
    /// An error occurred
    Error {
        /// Human-readable message
        message: String,
    },
    /// Status message (for progress updates)
    Status {
        /// Message for the status bar
        message: String,
    },
}

/// Channel handles for communicating with the async worker
pub struct AsyncHandle {
    /// Send commands to the worker
    pub cmd_tx: mpsc::Sender<AsyncCommand>,
    /// Receive results from the worker
    pub result_rx: mpsc::Receiver<AsyncResult>,
}

/// Spawn the async worker and return handles.
///
/// The SQLite connection is not `Sync`, so the worker gets a dedicated
/// thread with a current-thread runtime instead of a task on a
/// multi-threaded one.
pub fn spawn_worker(source: Source, db: Database) -> AsyncHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<AsyncCommand>(32);
    let (result_tx, result_rx) = mpsc::channel::<AsyncResult>(32);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start worker runtime: {e}");
                return;
            }
        };

        rt.block_on(async move {
            let gateway = SystemShare::new();
            let cached = db.load_trends().ok().flatten().unwrap_or_default();
            let mut aggregator = TrendAggregator::with_cached(cached);

            while let Some(cmd) = cmd_rx.recv().await {
                match cmd {
                    AsyncCommand::Shutdown => break,
                    AsyncCommand::RefreshTrends => {
                        handle_refresh(&result_tx, &mut aggregator, &source, &db).await;
                    }
                    AsyncCommand::Share { post } => {
                        handle_share(&result_tx, &gateway, &post).await;
                    }
                }
            }
        });
    });

    AsyncHandle { cmd_tx, result_rx }
}

async fn handle_refresh(
    result_tx: &mpsc::Sender<AsyncResult>,
    aggregator: &mut TrendAggregator,
    source: &Source,
    db: &Database,
) {
    let _ = result_tx
        .send(AsyncResult::Status {
            message: "Refreshing trends...".to_string(),
        })
        .await;

    match aggregator.refresh(source, db).await {
        Ok(trends) => {
            let _ = result_tx
                .send(AsyncResult::TrendsRefreshed {
                    trends: trends.to_vec(),
                })
                .await;
        }
        Err(e) => {
            let _ = result_tx
                .send(AsyncResult::Error {
                    message: e.to_string(),
                })
                .await;
        }
    }
}

async fn handle_share(
    result_tx: &mpsc::Sender<AsyncResult>,
    gateway: &SystemShare,
    post: &Post,
) {
    let result = match share_post(gateway, post).await {
        ShareOutcome::Shared => AsyncResult::Shared {
            post_id: post.id.clone(),
        },
        ShareOutcome::Unavailable => AsyncResult::ShareUnavailable,
        ShareOutcome::Failed { reason } => AsyncResult::Error {
            message: format!("Share failed: {reason}"),
        },
    };

    let _ = result_tx.send(result).await;
}
