//! Alarm raised when a phase runs out
//!
//! The notifier itself keeps no state: it forwards expiry to the sound and
//! notification collaborators, and forwards acknowledgment back to the timer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{PomodoroError, Result},
    state::{Phase, TimerState},
};

pub const ALARM_TITLE: &str = "Alarm";
pub const ALARM_MESSAGE: &str = "Time's up!";

/// Looping alarm sound
pub trait SoundHandle: Send {
    fn play(&mut self, looping: bool);
    fn stop(&mut self);

    fn is_available(&self) -> bool {
        true
    }
}

/// Surface that shows a notice which stays up until acknowledged
pub trait NotificationSurface: Send {
    fn show(&mut self, notice: &AlarmNotice);
    fn dismiss(&mut self);
}

/// Notice shown while an expired phase awaits acknowledgment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmNotice {
    pub title: String,
    pub message: String,
    pub expired_phase: Phase,
    pub raised_at: DateTime<Utc>,
}

impl AlarmNotice {
    pub fn new(expired_phase: Phase) -> Self {
        Self {
            title: ALARM_TITLE.to_string(),
            message: ALARM_MESSAGE.to_string(),
            expired_phase,
            raised_at: Utc::now(),
        }
    }
}

pub struct AlarmNotifier {
    sound: Box<dyn SoundHandle>,
    surface: Box<dyn NotificationSurface>,
}

impl AlarmNotifier {
    pub fn new(sound: Box<dyn SoundHandle>, surface: Box<dyn NotificationSurface>) -> Self {
        Self { sound, surface }
    }

    pub fn sound_available(&self) -> bool {
        self.sound.is_available()
    }

    /// Start the looping sound and put up the notice
    pub fn on_expiry(&mut self, phase: Phase) -> AlarmNotice {
        let notice = AlarmNotice::new(phase);
        info!("Raising alarm for expired {} phase", phase.as_str());
        self.sound.play(true);
        self.surface.show(&notice);
        notice
    }

    /// Silence the alarm and move the timer on to its next phase
    pub fn on_acknowledge(&mut self, timer: &mut TimerState) -> Result<Phase> {
        if !timer.is_expiry_pending() {
            return Err(PomodoroError::NoPendingExpiry);
        }
        self.sound.stop();
        self.surface.dismiss();
        timer.acknowledge_expiry()
    }
}

impl std::fmt::Debug for AlarmNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlarmNotifier")
            .field("sound_available", &self.sound.is_available())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::recording_notifier;
    use super::*;

    fn expired_timer() -> TimerState {
        let mut timer = TimerState::new(1, 1).unwrap();
        timer.start();
        for _ in 0..61 {
            timer.tick();
        }
        timer
    }

    #[test]
    fn test_expiry_plays_and_shows() {
        let (mut notifier, recorder) = recording_notifier();
        let notice = notifier.on_expiry(Phase::Work);

        assert_eq!(notice.title, "Alarm");
        assert_eq!(notice.message, "Time's up!");
        assert_eq!(notice.expired_phase, Phase::Work);
        assert_eq!(recorder.calls(), vec!["play(loop=true)", "show(Time's up!)"]);
    }

    #[test]
    fn test_acknowledge_stops_and_advances() {
        let (mut notifier, recorder) = recording_notifier();
        let mut timer = expired_timer();
        notifier.on_expiry(timer.phase());

        assert_eq!(notifier.on_acknowledge(&mut timer), Ok(Phase::Break));
        assert_eq!(timer.remaining_seconds(), 60);
        assert!(!timer.is_running());
        assert_eq!(
            recorder.calls(),
            vec!["play(loop=true)", "show(Time's up!)", "stop", "dismiss"]
        );
    }

    #[test]
    fn test_acknowledge_without_alarm() {
        let (mut notifier, recorder) = recording_notifier();
        let mut timer = TimerState::default();

        assert_eq!(notifier.on_acknowledge(&mut timer), Err(PomodoroError::NoPendingExpiry));
        assert!(recorder.calls().is_empty());
    }
}
