//! Controller phase

use crate::feed::ResultFeed;

/// Load phase of the application: `Loading -> {Ready, Failed}`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fetch in flight, no countdown running
    #[default]
    Loading,
    /// Feed loaded and countdown started
    Ready(ResultFeed),
    /// Fetch failed, message kept verbatim
    Failed(String),
}

impl Phase {
    /// Short name used in API responses
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Ready(_) => "ready",
            Phase::Failed(_) => "failed",
        }
    }

    pub fn feed(&self) -> Option<&ResultFeed> {
        match self {
            Phase::Ready(feed) => Some(feed),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
