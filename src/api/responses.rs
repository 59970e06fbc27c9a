//! API request and response structures

use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    commands::Outcome,
    error::PomodoroError,
    state::SessionSnapshot,
};

/// Response body for every action endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub outcome: Outcome,
    pub session: SessionSnapshot,
}

impl ApiResponse {
    pub fn ok(message: String, outcome: Outcome, session: SessionSnapshot) -> Self {
        Self {
            status: "ok".to_string(),
            message,
            timestamp: Utc::now(),
            outcome,
            session,
        }
    }
}

/// Response body for a failed action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl From<PomodoroError> for ErrorResponse {
    fn from(e: PomodoroError) -> Self {
        Self::new(e.to_string())
    }
}

/// Map a session error onto an HTTP status and body
pub fn api_error(e: PomodoroError) -> ApiError {
    let code = match &e {
        PomodoroError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        PomodoroError::TaskNotFound(_) => StatusCode::NOT_FOUND,
        PomodoroError::NoPendingExpiry => StatusCode::CONFLICT,
        PomodoroError::SessionClosed => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(e.into()))
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub session: SessionSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Body of `POST /timer/durations`. Fields are passed through as typed, so
/// `"30"`, `30` and `"abc"` are all accepted here and validated by the timer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationsRequest {
    #[serde(default)]
    pub work_minutes: Value,
    #[serde(default)]
    pub break_minutes: Value,
}

impl DurationsRequest {
    pub fn raw_work_minutes(&self) -> String {
        raw_field(&self.work_minutes)
    }

    pub fn raw_break_minutes(&self) -> String {
        raw_field(&self.break_minutes)
    }
}

fn raw_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTaskRequest {
    #[serde(default)]
    pub text: String,
}
