//! Session loop: owns the session, drives the one-second tick, applies commands

use std::time::Duration;
use tokio::{
    sync::{mpsc, watch},
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    commands::Command,
    format::format_clock,
    state::{Session, SessionSnapshot, TickOutcome},
};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Wait for the next tick, or forever when the ticker is disarmed
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Arm the ticker while the timer runs, disarm it otherwise.
///
/// A fresh ticker is created on every start so the first tick lands one
/// interval after the start.
fn sync_ticker(ticker: &mut Option<Interval>, running: bool) {
    match (running, ticker.is_some()) {
        (true, false) => {
            let mut armed = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
            armed.set_missed_tick_behavior(MissedTickBehavior::Delay);
            *ticker = Some(armed);
            debug!("Tick source armed");
        }
        (false, true) => {
            *ticker = None;
            debug!("Tick source stopped");
        }
        _ => {}
    }
}

/// Background task that exclusively owns the session.
///
/// Every tick and every command runs to completion here before the next one
/// is looked at. Returns once all command senders are dropped.
pub async fn session_loop_task(
    mut session: Session,
    mut commands: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
) {
    info!("Starting session loop");

    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            _ = next_tick(&mut ticker) => {
                match session.tick() {
                    TickOutcome::Counting { remaining_seconds } => {
                        debug!("Tick: {} remaining", format_clock(remaining_seconds));
                    }
                    TickOutcome::Expired { phase } => {
                        info!("{} phase finished, waiting for acknowledgment", phase.as_str());
                    }
                    TickOutcome::Idle => {
                        warn!("Tick delivered while the timer was idle");
                    }
                }
                sync_ticker(&mut ticker, session.timer().is_running());
                snapshot_tx.send_replace(session.snapshot());
            }

            command = commands.recv() => {
                let Some(Command { action, reply }) = command else {
                    info!("Command channel closed, stopping session loop");
                    break;
                };

                let result = session.dispatch(action);
                if let Err(e) = &result {
                    debug!("Action failed: {}", e);
                }

                sync_ticker(&mut ticker, session.timer().is_running());
                // Publish before replying so callers observe their own change
                snapshot_tx.send_replace(session.snapshot());

                if reply.send(result).is_err() {
                    debug!("Caller dropped before receiving the action result");
                }
            }
        }
    }
}
