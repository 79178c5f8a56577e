use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use http_body_util::BodyExt;
use rovertime::config::Config;
use rovertime::server::{AppState, router};
use rovertime::utils::clock::{Clock, FixedClock};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

mod common;
use common::{MONDAY_EVENING, MONDAY_NOON, TOKEN, seed_file, setup_test_db, ts};

struct TestApp {
    _dir: TempDir,
    app: Router,
    clock: Arc<FixedClock>,
}

impl TestApp {
    fn new(now: &str) -> Self {
        let (dir, db_path) = setup_test_db();
        seed_file(&db_path);

        let clock = Arc::new(FixedClock::new(ts(now)));
        let shared: Arc<dyn Clock> = clock.clone();
        let cfg = Config {
            database: db_path,
            ..Config::default()
        };

        Self {
            _dir: dir,
            app: router(AppState::new(cfg, shared)),
            clock,
        }
    }

    fn at(&self, now: &str) {
        self.clock.set(ts(now));
    }

    async fn send(&self, method: Method, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri("/overtime-tracking");
        if let Some(t) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {t}"));
        }
        let body = if body.is_null() {
            Body::empty()
        } else {
            Body::from(body.to_string())
        };

        let resp = self.app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get(&self) -> (StatusCode, Value) {
        self.send(Method::GET, Some(TOKEN), Value::Null).await
    }

    async fn post(&self, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, Some(TOKEN), body).await
    }

    async fn put(&self, action: &str) -> (StatusCode, Value) {
        self.send(Method::PUT, Some(TOKEN), json!({ "action": action })).await
    }
}

#[tokio::test]
async fn test_health() {
    let t = TestApp::new(MONDAY_EVENING);

    let resp = t
        .app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_identity_errors() {
    let t = TestApp::new(MONDAY_EVENING);

    let (status, body) = t.send(Method::GET, None, Value::Null).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = t.send(Method::GET, Some("bogus"), Value::Null).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = t.send(Method::GET, Some("token-orphan"), Value::Null).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Employee ID not found in user metadata");
}

#[tokio::test]
async fn test_get_without_session_returns_null() {
    let t = TestApp::new(MONDAY_EVENING);

    let (status, body) = t.get().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "session": null }));
}

#[tokio::test]
async fn test_full_lifecycle() {
    let t = TestApp::new(MONDAY_EVENING);

    let (status, body) = t
        .post(json!({
            "overtime_type": "pending_tasks",
            "project_name": "Website",
            "memo": "fix login"
        }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["session"]["employee_id"], "E1");
    assert_eq!(body["session"]["overtime_type"], "pending_tasks");
    assert_eq!(body["session"]["is_paused"], false);
    assert_eq!(body["session"]["project"], Value::Null);
    assert_eq!(body["session"]["breaks"], json!([]));

    let (status, body) = t.get().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["memo"], "fix login");

    t.at("2024-01-01T21:00:00Z");
    let (status, body) = t.put("pause").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["is_paused"], true);
    assert_eq!(body["session"]["breaks"].as_array().unwrap().len(), 1);
    assert!(body["break"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["break"]["break_end_time"], Value::Null);

    t.clock.advance(chrono::Duration::minutes(15));
    let (status, body) = t.put("resume").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["is_paused"], false);
    assert_eq!(body["session"]["total_break_seconds"], 900);
    assert_eq!(body["session"]["breaks"], json!([]));

    t.at("2024-01-01T22:30:00Z");
    let (status, body) = t.put("end").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["date"], "2024-01-01");
    assert_eq!(body["entry"]["start_time"], "20:00:00");
    assert_eq!(body["entry"]["end_time"], "22:30:00");
    assert_eq!(body["entry"]["total_hours"], 2.5);
    assert_eq!(body["entry"]["actual_working_hours"], 2.25);
    assert_eq!(body["entry"]["status"], "pending");
    assert_eq!(body["entry"]["description"], "Website - fix login");
    assert_eq!(body["session"]["totals"]["total_break_seconds"], 900);

    let (status, body) = t.get().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "session": null }));
}

#[tokio::test]
async fn test_start_rejections() {
    let t = TestApp::new(MONDAY_NOON);

    let (status, body) = t.post(json!({ "overtime_type": "new_tasks" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Overtime can only be started outside office hours");

    t.at(MONDAY_EVENING);
    let (status, _) = t.post(json!({ "overtime_type": "weekend" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = t.post(Value::Null).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = t
        .post(json!({ "overtime_type": "new_tasks", "project_id": 42 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = t.post(json!({ "overtime_type": "new_tasks" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = t.post(json!({ "overtime_type": "new_tasks" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already active"));
}

#[tokio::test]
async fn test_update_errors() {
    let t = TestApp::new(MONDAY_EVENING);

    let (status, body) = t.put("pause").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No active overtime session found");

    let (status, _) = t.put("stop").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = t.send(Method::PUT, Some(TOKEN), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = t.post(json!({ "overtime_type": "tracking" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = t.put("resume").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Session is not paused");

    t.put("pause").await;
    let (status, body) = t.put("end").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Session is paused. Resume it before ending.");
}
