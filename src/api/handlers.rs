//! HTTP endpoint handlers
//!
//! Each route maps one user gesture onto an [`Action`] for the session loop.

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{info, warn};

use crate::{
    commands::{Action, Outcome},
    state::{AppState, TaskId},
};
use super::responses::{
    api_error, AddTaskRequest, ApiError, ApiResponse, DurationsRequest, HealthResponse,
    StatusResponse,
};

type ActionResult = Result<Json<ApiResponse>, ApiError>;

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Timer { running: true, changed: true } => "Timer started".to_string(),
        Outcome::Timer { running: false, changed: true } => "Timer paused".to_string(),
        Outcome::Timer { running: true, changed: false } => "Timer already running".to_string(),
        Outcome::Timer { running: false, changed: false } => "Timer not running".to_string(),
        Outcome::Durations(update) => match (update.work_applied, update.break_applied) {
            (true, true) => "Work and break durations updated".to_string(),
            (true, false) => "Work duration updated, break duration kept".to_string(),
            (false, true) => "Break duration updated, work duration kept".to_string(),
            (false, false) => "No valid duration given, durations kept".to_string(),
        },
        Outcome::TaskAdded { id: Some(id) } => format!("Task {} added", id),
        Outcome::TaskAdded { id: None } => "Empty task ignored".to_string(),
        Outcome::TaskToggled { id, completed } => {
            format!("Task {} marked {}", id, if *completed { "done" } else { "open" })
        }
        Outcome::PhaseChanged { phase, completed_cycles } => {
            format!("{} phase ready, cycles: {}", phase.as_str(), completed_cycles)
        }
    }
}

async fn run(state: &AppState, action: Action) -> ActionResult {
    let name = action.name();
    match state.dispatch(action).await {
        Ok(outcome) => {
            let message = describe(&outcome);
            info!("{} endpoint called - {}", name, message);
            Ok(Json(ApiResponse::ok(message, outcome, state.snapshot())))
        }
        Err(e) => {
            warn!("{} failed: {}", name, e);
            Err(api_error(e))
        }
    }
}

/// Handle POST /timer/start
pub async fn start_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    run(&state, Action::Start).await
}

/// Handle POST /timer/pause
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    run(&state, Action::Pause).await
}

/// Handle POST /timer/toggle - the Start/Pause button
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    run(&state, Action::Toggle).await
}

/// Handle POST /timer/durations
pub async fn durations_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DurationsRequest>,
) -> ActionResult {
    run(
        &state,
        Action::SetDurations {
            work_minutes: request.raw_work_minutes(),
            break_minutes: request.raw_break_minutes(),
        },
    )
    .await
}

/// Handle POST /tasks - 201 when a task was created, 200 when the text was blank
pub async fn add_task_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddTaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let Json(response) = run(&state, Action::AddTask { text: request.text }).await?;
    let code = match response.outcome {
        Outcome::TaskAdded { id: Some(_) } => StatusCode::CREATED,
        _ => StatusCode::OK,
    };
    Ok((code, Json(response)))
}

/// Handle POST /tasks/:id/toggle
pub async fn toggle_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> ActionResult {
    run(&state, Action::ToggleTask { id: TaskId(id) }).await
}

/// Handle POST /alarm/dismiss
pub async fn dismiss_alarm_handler(State(state): State<Arc<AppState>>) -> ActionResult {
    run(&state, Action::AcknowledgeAlarm).await
}

/// Handle POST /action - dispatch any named action from a JSON body
pub async fn action_handler(
    State(state): State<Arc<AppState>>,
    Json(action): Json<Action>,
) -> ActionResult {
    run(&state, action).await
}

/// Handle GET /status - Return the latest session snapshot
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        session: state.snapshot(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
