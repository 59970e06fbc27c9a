//! Pomodoro Timer - entry point
//!
//! Builds the session from the command line, starts the session loop and
//! serves the HTTP action table until a shutdown signal arrives.

use tokio::net::TcpListener;
use tracing::{info, warn};

use pomodoro_timer::{
    alarm::{AlarmNotifier, NotificationSurface, SoundHandle},
    api::create_router,
    config::Config,
    format::format_clock,
    services::{DesktopSurface, LogSurface, Silent, TerminalBell},
    state::{AppState, Session},
    utils::shutdown_signal,
};

fn build_notifier(config: &Config) -> AlarmNotifier {
    let sound: Box<dyn SoundHandle> = if config.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::new())
    };
    let surface: Box<dyn NotificationSurface> = if config.desktop_notify {
        Box::new(DesktopSurface::new())
    } else {
        Box::new(LogSurface)
    };
    AlarmNotifier::new(sound, surface)
}

/// Resolve on SIGINT/SIGTERM. Without a signal handler, serve until killed.
async fn wait_for_shutdown() {
    if let Err(e) = shutdown_signal().await {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, work={}min, break={}min",
        config.host, config.port, config.work_minutes, config.break_minutes
    );

    let timer = config.timer()?;
    let notifier = build_notifier(&config);
    if !notifier.sound_available() {
        warn!("Alarm sound unavailable, phase ends will only show a notice");
    }

    let session = Session::new(timer, notifier);
    info!("Ready: {} work phase", format_clock(session.timer().remaining_seconds()));

    // Start the session loop and wire the handlers to it
    let state = AppState::launch(config.port, config.host.clone(), session);
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /timer/start       - Start the countdown");
    info!("  POST /timer/pause       - Pause the countdown");
    info!("  POST /timer/toggle      - Start/Pause button");
    info!("  POST /timer/durations   - Set work/break minutes");
    info!("  POST /tasks             - Add a task");
    info!("  POST /tasks/:id/toggle  - Mark a task done/open");
    info!("  POST /alarm/dismiss     - Acknowledge the alarm");
    info!("  POST /action            - Dispatch a named action");
    info!("  GET  /status            - Current session");
    info!("  GET  /health            - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = wait_for_shutdown() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
