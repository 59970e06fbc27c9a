//! Named actions the front end can dispatch against the session

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::{
    error::Result,
    state::{DurationUpdate, Phase, TaskId},
};

/// One user gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Start,
    Pause,
    Toggle,
    SetDurations {
        work_minutes: String,
        break_minutes: String,
    },
    AddTask {
        text: String,
    },
    ToggleTask {
        id: TaskId,
    },
    AcknowledgeAlarm,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Pause => "pause",
            Action::Toggle => "toggle",
            Action::SetDurations { .. } => "set-durations",
            Action::AddTask { .. } => "add-task",
            Action::ToggleTask { .. } => "toggle-task",
            Action::AcknowledgeAlarm => "acknowledge-alarm",
        }
    }
}

/// What an action did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Timer { running: bool, changed: bool },
    Durations(DurationUpdate),
    TaskAdded { id: Option<TaskId> },
    TaskToggled { id: TaskId, completed: bool },
    PhaseChanged { phase: Phase, completed_cycles: u32 },
}

/// Action queued for the session loop, with a channel for its result
#[derive(Debug)]
pub struct Command {
    pub action: Action,
    pub reply: oneshot::Sender<Result<Outcome>>,
}

impl Command {
    pub fn new(action: Action) -> (Self, oneshot::Receiver<Result<Outcome>>) {
        let (reply, rx) = oneshot::channel();
        (Self { action, reply }, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_json() {
        let action: Action = serde_json::from_str(r#"{"action":"start"}"#).unwrap();
        assert_eq!(action, Action::Start);

        let action: Action =
            serde_json::from_str(r#"{"action":"set_durations","work_minutes":"30","break_minutes":"x"}"#)
                .unwrap();
        assert_eq!(
            action,
            Action::SetDurations {
                work_minutes: "30".to_string(),
                break_minutes: "x".to_string(),
            }
        );

        let action: Action = serde_json::from_str(r#"{"action":"toggle_task","id":3}"#).unwrap();
        assert_eq!(action, Action::ToggleTask { id: TaskId(3) });
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(serde_json::from_str::<Action>(r#"{"action":"delete_task","id":0}"#).is_err());
    }
}
