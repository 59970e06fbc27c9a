//! Work/break countdown controller

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{PomodoroError, Result};

pub const DEFAULT_WORK_MINUTES: u64 = 25;
pub const DEFAULT_BREAK_MINUTES: u64 = 5;

/// Current countdown mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn next(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::Break => "break",
        }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The controller was not running; nothing changed.
    Idle,
    Counting { remaining_seconds: u64 },
    /// The phase ran out. The controller has paused itself.
    Expired { phase: Phase },
}

/// Which fields a duration update actually applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationUpdate {
    pub work_applied: bool,
    pub break_applied: bool,
}

/// Countdown state for one work/break session
#[derive(Debug, Clone)]
pub struct TimerState {
    remaining_seconds: u64,
    phase: Phase,
    running: bool,
    work_duration_seconds: u64,
    break_duration_seconds: u64,
    completed_cycles: u32,
    expiry_pending: bool,
}

impl TimerState {
    /// Create an idle controller in the work phase
    pub fn new(work_minutes: u64, break_minutes: u64) -> Result<Self> {
        let work_duration_seconds = minutes_to_seconds("work minutes", work_minutes)?;
        let break_duration_seconds = minutes_to_seconds("break minutes", break_minutes)?;

        Ok(Self {
            remaining_seconds: work_duration_seconds,
            phase: Phase::Work,
            running: false,
            work_duration_seconds,
            break_duration_seconds,
            completed_cycles: 0,
            expiry_pending: false,
        })
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn work_duration_seconds(&self) -> u64 {
        self.work_duration_seconds
    }

    pub fn break_duration_seconds(&self) -> u64 {
        self.break_duration_seconds
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    pub fn is_expiry_pending(&self) -> bool {
        self.expiry_pending
    }

    pub fn duration_of(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_duration_seconds,
            Phase::Break => self.break_duration_seconds,
        }
    }

    /// Start counting down. Returns false if nothing changed.
    ///
    /// A no-op while already running or while an expired phase awaits acknowledgment.
    pub fn start(&mut self) -> bool {
        if self.running {
            debug!("Start ignored, timer already running");
            return false;
        }
        if self.expiry_pending {
            debug!("Start ignored, expired phase not yet acknowledged");
            return false;
        }
        self.running = true;
        info!("Timer started: phase={}, remaining={}s", self.phase.as_str(), self.remaining_seconds);
        true
    }

    /// Stop counting down. Returns false if the timer was already paused.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            debug!("Pause ignored, timer not running");
            return false;
        }
        self.running = false;
        info!("Timer paused: phase={}, remaining={}s", self.phase.as_str(), self.remaining_seconds);
        true
    }

    /// Start when idle, pause when running. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            return TickOutcome::Counting {
                remaining_seconds: self.remaining_seconds,
            };
        }

        self.running = false;
        self.expiry_pending = true;
        info!("{} phase expired", self.phase.as_str());
        TickOutcome::Expired { phase: self.phase }
    }

    /// Apply raw minute inputs for each phase.
    ///
    /// Each field is validated on its own: an invalid field is left unchanged
    /// while a valid one is still applied.
    pub fn set_durations(&mut self, work_minutes: &str, break_minutes: &str) -> DurationUpdate {
        let mut update = DurationUpdate::default();

        match parse_minutes("work minutes", work_minutes) {
            Ok(seconds) => {
                self.work_duration_seconds = seconds;
                update.work_applied = true;
            }
            Err(e) => warn!("Keeping work duration at {}s: {}", self.work_duration_seconds, e),
        }

        match parse_minutes("break minutes", break_minutes) {
            Ok(seconds) => {
                self.break_duration_seconds = seconds;
                update.break_applied = true;
            }
            Err(e) => warn!("Keeping break duration at {}s: {}", self.break_duration_seconds, e),
        }

        let current = self.duration_of(self.phase);
        if !self.running {
            self.remaining_seconds = current;
        } else if self.remaining_seconds > current {
            self.remaining_seconds = current;
        }

        info!(
            "Durations now work={}s, break={}s (remaining={}s)",
            self.work_duration_seconds, self.break_duration_seconds, self.remaining_seconds
        );
        update
    }

    /// Move to the next phase after an expiry. Does not resume counting.
    pub fn acknowledge_expiry(&mut self) -> Result<Phase> {
        if !self.expiry_pending {
            return Err(PomodoroError::NoPendingExpiry);
        }

        self.expiry_pending = false;
        self.phase = self.phase.next();
        self.remaining_seconds = self.duration_of(self.phase);
        if self.phase == Phase::Work {
            self.completed_cycles += 1;
        }

        info!(
            "Switched to {} phase ({}s), completed cycles: {}",
            self.phase.as_str(),
            self.remaining_seconds,
            self.completed_cycles
        );
        Ok(self.phase)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            remaining_seconds: DEFAULT_WORK_MINUTES * 60,
            phase: Phase::Work,
            running: false,
            work_duration_seconds: DEFAULT_WORK_MINUTES * 60,
            break_duration_seconds: DEFAULT_BREAK_MINUTES * 60,
            completed_cycles: 0,
            expiry_pending: false,
        }
    }
}

/// Parse a raw minutes field into seconds
pub fn parse_minutes(field: &'static str, input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let minutes: i64 = trimmed.parse().map_err(|_| PomodoroError::Validation {
        field,
        input: input.to_string(),
        reason: "not a whole number".to_string(),
    })?;

    if minutes <= 0 {
        return Err(PomodoroError::Validation {
            field,
            input: input.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    minutes_to_seconds(field, minutes as u64)
}

fn minutes_to_seconds(field: &'static str, minutes: u64) -> Result<u64> {
    if minutes == 0 {
        return Err(PomodoroError::Validation {
            field,
            input: minutes.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    minutes.checked_mul(60).ok_or_else(|| PomodoroError::Validation {
        field,
        input: minutes.to_string(),
        reason: "too large".to_string(),
    })
}
