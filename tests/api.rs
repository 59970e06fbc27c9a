use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use pomodoro_timer::{
    alarm::AlarmNotifier,
    api::create_router,
    services::{LogSurface, Silent},
    state::{AppState, Session, TimerState},
};

fn app(work_minutes: u64, break_minutes: u64) -> (Router, Arc<AppState>) {
    let notifier = AlarmNotifier::new(Box::new(Silent), Box::new(LogSurface));
    let session = Session::new(TimerState::new(work_minutes, break_minutes).unwrap(), notifier);
    let state = AppState::launch(0, "127.0.0.1".to_string(), session);
    (create_router(Arc::clone(&state)), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app(25, 5);
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn status_shows_initial_session() {
    let (app, _) = app(25, 5);
    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);

    let session = &body["session"];
    assert_eq!(session["phase"], "work");
    assert_eq!(session["display"], "25:00");
    assert_eq!(session["button_label"], "Start");
    assert_eq!(session["cycles_label"], "Cycles: 0");
    assert_eq!(session["sound_available"], false);
    assert!(session["alarm"].is_null());
}

#[tokio::test]
async fn toggle_flips_button_label() {
    let (app, _) = app(25, 5);

    let (status, body) = send(&app, "POST", "/timer/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Timer started");
    assert_eq!(body["session"]["button_label"], "Pause");

    let (_, body) = send(&app, "POST", "/timer/start", None).await;
    assert_eq!(body["outcome"]["changed"], false);

    let (_, body) = send(&app, "POST", "/timer/toggle", None).await;
    assert_eq!(body["session"]["running"], false);
    assert_eq!(body["session"]["button_label"], "Start");
}

#[tokio::test]
async fn durations_apply_valid_fields_only() {
    let (app, _) = app(25, 5);
    let (status, body) = send(
        &app,
        "POST",
        "/timer/durations",
        Some(json!({"work_minutes": "30", "break_minutes": "-5"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["work_applied"], true);
    assert_eq!(body["outcome"]["break_applied"], false);
    assert_eq!(body["session"]["work_duration_seconds"], 1800);
    assert_eq!(body["session"]["break_duration_seconds"], 300);
    assert_eq!(body["session"]["display"], "30:00");
}

#[tokio::test]
async fn task_lifecycle() {
    let (app, _) = app(25, 5);

    let (status, body) = send(&app, "POST", "/tasks", Some(json!({"text": "   "}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["outcome"]["id"].is_null());

    let (status, body) =
        send(&app, "POST", "/tasks", Some(json!({"text": "  write report  "}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["outcome"]["id"], 0);
    assert_eq!(body["session"]["tasks"][0]["text"], "write report");
    assert_eq!(body["session"]["tasks"][0]["completed"], false);

    let (_, body) = send(&app, "POST", "/tasks/0/toggle", None).await;
    assert_eq!(body["outcome"]["completed"], true);
    let (_, body) = send(&app, "POST", "/tasks/0/toggle", None).await;
    assert_eq!(body["outcome"]["completed"], false);

    let (status, body) = send(&app, "POST", "/tasks/9/toggle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Task not found: 9");
}

#[tokio::test]
async fn dismiss_without_alarm_conflicts() {
    let (app, _) = app(25, 5);
    let (status, _) = send(&app, "POST", "/alarm/dismiss", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn named_action_endpoint() {
    let (app, state) = app(25, 5);
    let (status, body) = send(
        &app,
        "POST",
        "/action",
        Some(json!({"action": "add_task", "text": "stretch"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"]["kind"], "task_added");
    assert_eq!(state.snapshot().tasks.len(), 1);

    let (_, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(body["last_action"], "add-task");
}

#[tokio::test(start_paused = true)]
async fn phase_expiry_and_dismissal() {
    let (app, _) = app(1, 1);
    send(&app, "POST", "/timer/start", None).await;

    tokio::time::sleep(Duration::from_millis(61_500)).await;
    let (_, body) = send(&app, "GET", "/status", None).await;
    let session = &body["session"];
    assert_eq!(session["display"], "00:00");
    assert_eq!(session["running"], false);
    assert_eq!(session["alarm"]["message"], "Time's up!");
    assert_eq!(session["alarm"]["expired_phase"], "work");

    let (status, body) = send(&app, "POST", "/alarm/dismiss", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["phase"], "break");
    assert_eq!(body["session"]["display"], "01:00");
    assert_eq!(body["session"]["running"], false);
    assert!(body["session"]["alarm"].is_null());

    send(&app, "POST", "/timer/start", None).await;
    tokio::time::sleep(Duration::from_millis(61_500)).await;
    let (status, body) = send(&app, "POST", "/alarm/dismiss", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["phase"], "work");
    assert_eq!(body["session"]["cycles_label"], "Cycles: 1");
}
