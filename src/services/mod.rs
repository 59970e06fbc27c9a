//! Alarm collaborators
//!
//! Concrete sound and notification implementations used by the alarm notifier.

pub mod notification;
pub mod sound;

// Re-export main types
pub use notification::{DesktopSurface, LogSurface};
pub use sound::{Silent, TerminalBell};
