//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    feed::LinkId,
    state::{AppController, CountdownState, LinkView},
};

/// Full view of the controller for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `loading`, `ready` or `failed`
    pub phase: String,
    pub error: Option<String>,
    /// Remaining-time text, e.g. `2d 3h 4m 5s`
    pub countdown: Option<String>,
    pub countdown_state: Option<CountdownState>,
    pub notification: Option<String>,
    pub notification_visible: bool,
    pub links: Vec<LinkView>,
    pub last_used: Option<LinkId>,
    pub uptime: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusResponse {
    pub fn from_controller(controller: &AppController) -> Self {
        let phase = controller.phase();
        let countdown = controller.countdown();

        Self {
            phase: phase.name().to_string(),
            error: phase.error().map(str::to_string),
            countdown: countdown.map(|state| state.to_string()),
            countdown_state: countdown,
            notification: controller.notification(),
            notification_visible: controller.notification_visible(),
            links: controller.links(),
            last_used: controller.last_used(),
            uptime: controller.get_uptime(),
            timestamp: Utc::now(),
        }
    }
}

/// Notification toggle response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub visible: bool,
    pub notification: Option<String>,
}

/// Error body for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
