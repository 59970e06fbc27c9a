//! State management module
//!
//! This module contains the timer, the task list, the session that owns them,
//! and the shared application state handed to HTTP handlers.

pub mod app_state;
pub mod session;
pub mod task_list;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use session::{Session, SessionSnapshot};
pub use task_list::{Task, TaskId, TaskList};
pub use timer_state::{DurationUpdate, Phase, TickOutcome, TimerState};
