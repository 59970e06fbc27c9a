//! The single owned model: timer, task list and alarm notifier

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    alarm::{AlarmNotice, AlarmNotifier},
    commands::{Action, Outcome},
    error::Result,
    format::format_clock,
};

use super::{Phase, Task, TaskList, TickOutcome, TimerState};

/// Read-only view of the session published after every change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub running: bool,
    pub remaining_seconds: u64,
    pub display: String,
    pub button_label: String,
    pub work_duration_seconds: u64,
    pub break_duration_seconds: u64,
    pub completed_cycles: u32,
    pub cycles_label: String,
    pub alarm: Option<AlarmNotice>,
    pub sound_available: bool,
    pub tasks: Vec<Task>,
}

#[derive(Debug)]
pub struct Session {
    timer: TimerState,
    tasks: TaskList,
    notifier: AlarmNotifier,
    alarm: Option<AlarmNotice>,
}

impl Session {
    pub fn new(timer: TimerState, notifier: AlarmNotifier) -> Self {
        Self {
            timer,
            tasks: TaskList::new(),
            notifier,
            alarm: None,
        }
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn alarm(&self) -> Option<&AlarmNotice> {
        self.alarm.as_ref()
    }

    /// Advance the countdown, raising the alarm when the phase runs out
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if let TickOutcome::Expired { phase } = outcome {
            self.alarm = Some(self.notifier.on_expiry(phase));
        }
        outcome
    }

    /// Apply one user action
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        debug!("Dispatching action: {}", action.name());

        match action {
            Action::Start => {
                let changed = self.timer.start();
                Ok(self.timer_outcome(changed))
            }
            Action::Pause => {
                let changed = self.timer.pause();
                Ok(self.timer_outcome(changed))
            }
            Action::Toggle => {
                let was_running = self.timer.is_running();
                let running = self.timer.toggle();
                Ok(self.timer_outcome(was_running != running))
            }
            Action::SetDurations {
                work_minutes,
                break_minutes,
            } => Ok(Outcome::Durations(
                self.timer.set_durations(&work_minutes, &break_minutes),
            )),
            Action::AddTask { text } => Ok(Outcome::TaskAdded {
                id: self.tasks.add_task(&text),
            }),
            Action::ToggleTask { id } => {
                let completed = self.tasks.toggle_task(id)?;
                Ok(Outcome::TaskToggled { id, completed })
            }
            Action::AcknowledgeAlarm => {
                let phase = self.notifier.on_acknowledge(&mut self.timer)?;
                self.alarm = None;
                info!("Alarm acknowledged, {} phase ready", phase.as_str());
                Ok(Outcome::PhaseChanged {
                    phase,
                    completed_cycles: self.timer.completed_cycles(),
                })
            }
        }
    }

    fn timer_outcome(&self, changed: bool) -> Outcome {
        Outcome::Timer {
            running: self.timer.is_running(),
            changed,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let timer = &self.timer;
        SessionSnapshot {
            phase: timer.phase(),
            running: timer.is_running(),
            remaining_seconds: timer.remaining_seconds(),
            display: format_clock(timer.remaining_seconds()),
            button_label: if timer.is_running() { "Pause" } else { "Start" }.to_string(),
            work_duration_seconds: timer.work_duration_seconds(),
            break_duration_seconds: timer.break_duration_seconds(),
            completed_cycles: timer.completed_cycles(),
            cycles_label: format!("Cycles: {}", timer.completed_cycles()),
            alarm: self.alarm.clone(),
            sound_available: self.notifier.sound_available(),
            tasks: self.tasks.tasks().to_vec(),
        }
    }
}
