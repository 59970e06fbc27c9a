//! Pomodoro Timer - a work/break countdown with a task checklist
//!
//! The library holds the countdown controller, the task list and the alarm
//! notifier, one session loop that owns them, and the HTTP action table a
//! front end drives.

pub mod alarm;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use alarm::{AlarmNotifier, NotificationSurface, SoundHandle};
pub use api::create_router;
pub use commands::{Action, Outcome};
pub use config::Config;
pub use error::PomodoroError;
pub use format::format_clock;
pub use state::{AppState, Session, SessionSnapshot};
pub use utils::signals::shutdown_signal;
