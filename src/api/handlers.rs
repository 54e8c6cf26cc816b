//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

use crate::{
    error::ActivationError,
    feed::LinkId,
    state::{AppController, LinkActivation, SharePayload},
};
use super::responses::{ErrorResponse, HealthResponse, NotificationResponse, StatusResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Handle GET /status - Return phase, countdown, notification and links
pub async fn status_handler(State(controller): State<Arc<AppController>>) -> Json<StatusResponse> {
    Json(StatusResponse::from_controller(&controller))
}

/// Handle POST /links/:id/activate - Record and open a link, or refuse a placeholder
pub async fn activate_handler(
    State(controller): State<Arc<AppController>>,
    Path(id): Path<LinkId>,
) -> Result<Json<LinkActivation>, ApiError> {
    match controller.activate(id) {
        Ok(activation) => Ok(Json(activation)),
        Err(e) => {
            warn!("Activation of link {} rejected: {}", id, e);
            let status = match e {
                ActivationError::NotReady => StatusCode::CONFLICT,
                ActivationError::UnknownLink(_) => StatusCode::NOT_FOUND,
            };
            Err((status, Json(ErrorResponse::new(e.to_string()))))
        }
    }
}

/// Handle POST /notification/toggle - Show or dismiss the notification
pub async fn notification_toggle_handler(
    State(controller): State<Arc<AppController>>,
) -> Json<NotificationResponse> {
    let visible = controller.toggle_notification();
    Json(NotificationResponse {
        visible,
        notification: controller.notification(),
    })
}

/// Handle POST /refresh - Explicitly re-fetch the feed
pub async fn refresh_handler(State(controller): State<Arc<AppController>>) -> Json<StatusResponse> {
    match controller.refresh().await {
        Ok(()) => info!("Refresh endpoint called - feed reloaded"),
        Err(e) => warn!("Refresh endpoint called - reload failed: {}", e),
    }
    Json(StatusResponse::from_controller(&controller))
}

/// Handle GET /share - Return the share payload
pub async fn share_handler(State(controller): State<Arc<AppController>>) -> Json<SharePayload> {
    Json(controller.share_payload().clone())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
