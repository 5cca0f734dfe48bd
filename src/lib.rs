//! # Mention 📣
//!
//! A terminal client for the Mention social network.
//!
//! ## Overview
//!
//! Mention puts a scrollable timeline, trending topics, and faceted search
//! in your terminal. Feed data is sampled locally or fetched through the
//! Mention API; normalized trends are cached in a local snapshot store so
//! the search screen has something to show before the first refresh lands.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          App                                │
//! │  Orchestrates all components and runs the main event loop   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Config      │ │   Data source   │ │       UI        │
//! │                 │ │                 │ │                 │
//! │ • Load/Save     │ │ • Mention API   │ │ • Render panels │
//! │ • Theme         │ │ • Sample data   │ │ • Handle input  │
//! │ • Premium flag  │ │ • Unified trait │ │ • Compose       │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │    Database     │ │     Trends      │ │     Models      │
//! │                 │ │                 │ │                 │
//! │ • Snapshots     │ │ • Aggregation   │ │ • Post          │
//! │ • Trend cache   │ │ • Normalization │ │ • Trend         │
//! │                 │ │ • Refresh       │ │ • SearchResult  │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — Data source collaborators (Mention API, sample data)
//! - [`app`] — TUI application state and event loop
//! - [`config`] — Configuration management
//! - [`content`] — Post text segmentation (hashtag detection)
//! - [`db`] — `SQLite` snapshot store for cached trends
//! - [`filter`] — Search facets and trend matching
//! - [`models`] — Data models (Post, Trend, `SearchResult`)
//! - [`share`] — Platform sharing gateway
//! - [`theme`] — Theme support via ratatui-themes
//! - [`trends`] — Trend aggregation and refresh
//!
//! ## Example
//!
//! ```no_run
//! use mention::app;
//!
//! fn main() -> anyhow::Result<()> {
//!     app::run()
//! }
//! ```
//!
//! ## Features
//!
//! - **Timeline** — Scrollable feed with local like toggles
//! - **Trends** — Refreshed from the Mention API, cached offline
//! - **Faceted Search** — Content filters plus premium sort toggles
//! - **Hashtags** — Detected in post text, styled and routable
//! - **Beautiful TUI** — Popular terminal themes out of the box
//! - **Fast** — Async networking with Tokio

#![doc(html_root_url = "https://docs.rs/mention/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::if_not_else)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::use_self)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::similar_names)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::return_self_not_must_use)]

pub mod api;
pub mod app;
pub mod config;
pub mod content;
pub mod db;
pub mod demo;
pub mod filter;
pub mod models;
pub mod paths;
pub mod share;
pub mod theme;
pub mod trends;

// Re-export main types for convenience
pub use app::AppState;
pub use config::Config;
pub use db::Database;
pub use models::{Post, RawTrend, SearchResult, Trend};
pub use theme::{Theme, ThemeColors};
pub use trends::TrendAggregator;

// Re-export theme types from ratatui-themes crate
pub use ratatui_themes::{ThemeName, ThemePalette};

/// Base URL of the Mention web frontend (permalinks, hashtag routes)
pub const SITE_URL: &str = "https://mention.earth";

/// ASCII logo for the application
pub const LOGO: &str = r"
   __  ___         __  _
  /  |/  /__ ___  / /_(_)__  ___
 / /|_/ / -_) _ \/ __/ / _ \/ _ \
/_/  /_/\__/_//_/\__/_/\___/_//_/
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repository URL
pub const REPO_URL: &str = "https://github.com/mention-earth/mention-tui";
