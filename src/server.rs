//! HTTP service: axum routes over the `api` handlers.
//!
//! Each request opens its own SQLite connection on the blocking pool;
//! no state is shared between requests besides configuration and the clock.

use crate::api::tracking;
use crate::auth::{bearer_token, resolve_employee};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::clock::{Clock, Moment};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Error occurred: {}", self);
        } else {
            warn!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/overtime-tracking",
            get(current_session).post(start_session).put(update_session),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn token_from(headers: &HeaderMap) -> Option<String> {
    bearer_token(headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()))
}

/// Run `work` on the blocking pool with a fresh connection, the resolved
/// employee and the current instant.
async fn with_employee<T, F>(state: AppState, token: Option<String>, work: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut DbPool, &Config, &str, &Moment) -> AppResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let cfg = state.config.as_ref();
        let mut pool = DbPool::new(&cfg.database)?;
        let employee_id = resolve_employee(&pool.conn, token.as_deref())?;
        let now = Moment::from_clock(state.clock.as_ref(), cfg.office_offset()?);
        work(&mut pool, cfg, &employee_id, &now)
    })
    .await
    .map_err(|e| AppError::Other(format!("request task failed: {e}")))?
}

fn json_ok<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let out = with_employee(state, token_from(&headers), |pool, _cfg, employee_id, _now| {
        tracking::current(pool, employee_id)
    })
    .await?;
    Ok(json_ok(StatusCode::OK, out))
}

async fn start_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    let out = with_employee(state, token_from(&headers), move |pool, cfg, employee_id, now| {
        tracking::start(pool, cfg, employee_id, &body, now)
    })
    .await?;
    Ok(json_ok(StatusCode::CREATED, out))
}

async fn update_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    let out = with_employee(state, token_from(&headers), move |pool, cfg, employee_id, now| {
        tracking::update(pool, cfg, employee_id, &body, now)
    })
    .await?;
    Ok(json_ok(StatusCode::OK, out))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(state: AppState, bind: &str) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
    }
}
