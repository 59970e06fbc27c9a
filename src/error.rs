//! Error types shared by the timer, the task list and the HTTP surface

use crate::state::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PomodoroError {
    /// Rejected duration input. Recovered locally by leaving the field unchanged.
    #[error("Invalid {field} '{input}': {reason}")]
    Validation {
        field: &'static str,
        input: String,
        reason: String,
    },

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("No expired phase is waiting for acknowledgment")]
    NoPendingExpiry,

    #[error("Session loop is not running")]
    SessionClosed,
}

pub type Result<T> = std::result::Result<T, PomodoroError>;
