//! Configuration and CLI argument handling

use clap::Parser;

use crate::{
    error::Result,
    state::timer_state::{TimerState, DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES},
};

/// CLI argument parsing structure
#[derive(Debug, Clone, Parser)]
#[command(name = "pomodoro-timer")]
#[command(about = "A Pomodoro timer with a task checklist, driven over a local HTTP surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20525")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Work phase length in minutes
    #[arg(short, long, default_value_t = DEFAULT_WORK_MINUTES)]
    pub work_minutes: u64,

    /// Break phase length in minutes
    #[arg(short, long, default_value_t = DEFAULT_BREAK_MINUTES)]
    pub break_minutes: u64,

    /// Do not ring the terminal bell when a phase ends
    #[arg(long)]
    pub mute: bool,

    /// Also raise a desktop notification when a phase ends
    #[arg(long)]
    pub desktop_notify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the initial timer, rejecting zero durations
    pub fn timer(&self) -> Result<TimerState> {
        TimerState::new(self.work_minutes, self.break_minutes)
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
