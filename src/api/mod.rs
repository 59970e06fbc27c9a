//! HTTP API module
//!
//! This module contains the action table exposed to the front end and the
//! response structures it returns.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timer/start", post(start_handler))
        .route("/timer/pause", post(pause_handler))
        .route("/timer/toggle", post(toggle_handler))
        .route("/timer/durations", post(durations_handler))
        .route("/tasks", post(add_task_handler))
        .route("/tasks/:id/toggle", post(toggle_task_handler))
        .route("/alarm/dismiss", post(dismiss_alarm_handler))
        .route("/action", post(action_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
