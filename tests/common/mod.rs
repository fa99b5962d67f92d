#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tavolo::router::init_router;
use tavolo::state::AppState;
use tavolo::utils::jwt::create_access_token;
use tavolo_config::{CorsConfig, JwtConfig};
use tavolo_core::capability::{ActionFlags, FeatureGrid};

pub const TEST_BRANCH: &str = "main-street";

pub fn test_state() -> AppState {
    let jwt_config = JwtConfig {
        secret: "test-secret".to_string(),
        access_token_expiry: 3600,
    };
    let cors_config = CorsConfig {
        allowed_origins: vec!["http://localhost:5173".to_string()],
    };
    AppState::in_memory(jwt_config, cors_config)
}

pub fn test_app(state: &AppState) -> Router {
    init_router(state.clone())
}

pub fn token_for(state: &AppState, role: &str) -> String {
    create_access_token(
        "00000000-0000-0000-0000-000000000001",
        role,
        TEST_BRANCH,
        &state.jwt_config,
    )
    .unwrap()
}

/// Seed one allowed route directly through the store.
pub async fn allow_route(state: &AppState, role: &str, path: &str, title: &str, group: &str) {
    let record = tavolo::modules::route_permissions::model::RoutePermissionRecord {
        role: role.to_string(),
        branch: TEST_BRANCH.to_string(),
        group_name: group.to_string(),
        path: path.to_string(),
        title: title.to_string(),
        is_allowed: true,
    };
    state.route_store.upsert(&record).await.unwrap();
}

/// Seed a feature grid directly through the store.
pub async fn set_grid(state: &AppState, role: &str, entries: &[(&str, ActionFlags)]) {
    let mut grid = FeatureGrid::empty();
    for (feature, flags) in entries {
        grid.features.insert(feature.to_string(), *flags);
    }
    state
        .feature_store
        .replace(role, TEST_BRANCH, &grid)
        .await
        .unwrap();
}

pub fn flags(view: bool, add: bool, edit: bool, delete: bool) -> ActionFlags {
    ActionFlags {
        view,
        add,
        edit,
        delete,
    }
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, "GET", uri, token, None).await
}
