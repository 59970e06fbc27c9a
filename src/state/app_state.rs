//! Shared application state handed to HTTP handlers

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::warn;

use crate::{
    commands::{Action, Command, Outcome},
    error::{PomodoroError, Result},
    tasks::session_loop_task,
};

use super::{Session, SessionSnapshot};

/// Capacity of the command queue feeding the session loop
pub const COMMAND_QUEUE: usize = 64;

/// Handle to the running session plus server metadata.
///
/// Handlers never touch the session directly; they queue actions for the
/// session loop and read the snapshots it publishes.
#[derive(Debug)]
pub struct AppState {
    command_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(
        port: u16,
        host: String,
        command_tx: mpsc::Sender<Command>,
        snapshot_rx: watch::Receiver<SessionSnapshot>,
    ) -> Self {
        Self {
            command_tx,
            snapshot_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Spawn the session loop for `session` and return the state wired to it
    pub fn launch(port: u16, host: String, session: Session) -> Arc<Self> {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());

        tokio::spawn(session_loop_task(session, command_rx, snapshot_tx));

        Arc::new(Self::new(port, host, command_tx, snapshot_rx))
    }

    /// Queue an action and wait for the session loop to apply it
    pub async fn dispatch(&self, action: Action) -> Result<Outcome> {
        let name = action.name();
        let (command, reply) = Command::new(action);

        self.command_tx
            .send(command)
            .await
            .map_err(|_| PomodoroError::SessionClosed)?;
        let outcome = reply.await.map_err(|_| PomodoroError::SessionClosed)??;

        self.record_action(name);
        Ok(outcome)
    }

    /// Latest published session snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver that wakes on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        } else {
            warn!("Failed to record last action: {}", action);
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
