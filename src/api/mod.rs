//! HTTP API module
//!
//! This module exposes the controller to a presentation layer as JSON.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppController;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(controller: Arc<AppController>) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/links/:id/activate", post(activate_handler))
        .route("/notification/toggle", post(notification_toggle_handler))
        .route("/refresh", post(refresh_handler))
        .route("/share", get(share_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(controller)
}
