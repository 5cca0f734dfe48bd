//! Data models for Mention

mod post;
mod search;
mod trend;

pub use post::Post;
pub use search::SearchResult;
pub use trend::{RawTrend, Trend};
