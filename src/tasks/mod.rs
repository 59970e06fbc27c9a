//! Background tasks module
//!
//! This module contains the session loop that runs alongside the HTTP server.

pub mod session_loop;

// Re-export main functions
pub use session_loop::session_loop_task;
