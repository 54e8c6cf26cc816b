//! Result feed module
//!
//! Fetches the remote JSON describing the result date, the notification text
//! and the result links, and validates it into a `ResultFeed`.

pub mod client;
pub mod model;

// Re-export main types
pub use client::{HttpFeedClient, LinkFeed};
pub use model::{parse_result_date, LinkId, ResultFeed, ResultLink, TargetInstant, SENTINEL_URL};
