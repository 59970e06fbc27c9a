//! Alarm sound played through the terminal bell

use std::{
    io::{self, Write},
    time::Duration,
};
use tokio::{runtime::Handle, task::JoinHandle, time::interval};
use tracing::{debug, warn};

use crate::alarm::SoundHandle;

/// Gap between rings while the alarm loops
pub const BELL_INTERVAL: Duration = Duration::from_secs(2);

fn ring() {
    let mut stdout = io::stdout();
    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        warn!("Failed to ring terminal bell: {}", e);
    }
}

/// Rings the terminal bell, repeating on a background task while looping
#[derive(Debug, Default)]
pub struct TerminalBell {
    ringer: Option<JoinHandle<()>>,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ringing(&self) -> bool {
        self.ringer.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl SoundHandle for TerminalBell {
    fn play(&mut self, looping: bool) {
        self.stop();

        if !looping {
            ring();
            return;
        }

        match Handle::try_current() {
            Ok(handle) => {
                debug!("Starting looping terminal bell");
                self.ringer = Some(handle.spawn(async {
                    let mut ticker = interval(BELL_INTERVAL);
                    loop {
                        ticker.tick().await;
                        ring();
                    }
                }));
            }
            Err(_) => {
                warn!("No async runtime available, ringing the bell once");
                ring();
            }
        }
    }

    fn stop(&mut self) {
        if let Some(ringer) = self.ringer.take() {
            debug!("Stopping terminal bell");
            ringer.abort();
        }
    }
}

impl Drop for TerminalBell {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sound handle used when the alarm is muted
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundHandle for Silent {
    fn play(&mut self, _looping: bool) {
        debug!("Alarm sound muted");
    }

    fn stop(&mut self) {}

    fn is_available(&self) -> bool {
        false
    }
}
