#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;
use tracing::Level;

use timesheet_api::config::{LogConfig, ServerConfig};
use timesheet_api::router::build_app_router;
use timesheet_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults. The error log directory
/// points at the system temp dir, which always exists.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "postgres://unused-in-tests".to_string(),
        db_max_connections: 5,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        max_body_bytes: 64 * 1024,
        request_timeout: Duration::from_secs(30),
        shutdown_timeout: Duration::from_secs(30),
        log: LogConfig {
            dir: std::env::temp_dir(),
            filter: "timesheet_api=debug".to_string(),
            request_level: Level::INFO,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create employee `emp_id` named `a b` and assert it was stored.
pub async fn seed_employee(pool: &PgPool, emp_id: i64) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/employees",
        json!({
            "emp_id": emp_id,
            "first_name": "a",
            "second_name": "b",
            "designation": "dev",
            "project_name": "X",
            "manager": "m",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Create project `prj_id` managed by `manager_id` and assert it was stored.
pub async fn seed_project(pool: &PgPool, prj_id: i64, manager_id: i64) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({
            "prj_id": prj_id,
            "prj_name": "Apollo",
            "prj_manager_id": manager_id,
            "prj_location": "Pune",
            "prj_start_date": "2024-01-01",
            "prj_end_date": "2024-12-31",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
