//! Error types shared across the crate

use std::path::PathBuf;
use thiserror::Error;

use crate::feed::LinkId;

/// Failure of one feed load attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The request could not complete
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error status or payload shape violation
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl FeedError {
    /// Non-success HTTP status
    pub fn status(code: u16) -> Self {
        FeedError::Protocol(format!("HTTP error! Status: {}", code))
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Protocol(err.to_string())
        } else {
            FeedError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Protocol(format!("Invalid feed payload: {}", err))
    }
}

/// Link activation refused by the controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    #[error("Result links are not loaded")]
    NotReady,

    #[error("Unknown link id: {0}")]
    UnknownLink(LinkId),
}

/// Durable selection store failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
