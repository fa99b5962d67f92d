mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{allow_route, flags, get, send, set_grid, test_app, test_state, token_for};

#[tokio::test]
async fn editor_lists_the_full_tree_for_an_unconfigured_role() {
    let state = test_state();
    let admin = token_for(&state, "admin");

    let (status, body) = get(
        test_app(&state),
        "/api/permissions/routes?role=waiter",
        Some(&admin),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 5);
    for group in groups {
        for toggle in group["list"].as_array().unwrap() {
            assert_eq!(toggle["is_allowed"], false);
        }
    }
}

#[tokio::test]
async fn toggling_a_route_round_trips() {
    let state = test_state();
    let admin = token_for(&state, "admin");

    let (status, body) = send(
        test_app(&state),
        "PUT",
        "/api/permissions/routes",
        Some(&admin),
        Some(json!({
            "role": "manager",
            "path": "/dashboard/stocks",
            "is_allowed": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_allowed"], true);
    assert_eq!(body["title"], "Stocks");
    assert_eq!(body["group_name"], "Inventory");

    let (status, body) = get(
        test_app(&state),
        "/api/permissions/routes?role=manager",
        Some(&admin),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let inventory = body
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["group_name"] == "Inventory")
        .unwrap();
    let stocks = inventory["list"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["path"] == "/dashboard/stocks")
        .unwrap();
    assert_eq!(stocks["is_allowed"], true);
}

#[tokio::test]
async fn rereading_without_writes_is_idempotent() {
    let state = test_state();
    let admin = token_for(&state, "admin");
    allow_route(&state, "manager", "/dashboard/expenses", "Expenses", "Accounting").await;

    let (_, first) = get(
        test_app(&state),
        "/api/permissions/routes?role=manager",
        Some(&admin),
    )
    .await;
    let (_, second) = get(
        test_app(&state),
        "/api/permissions/routes?role=manager",
        Some(&admin),
    )
    .await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_paths_are_rejected() {
    let state = test_state();
    let admin = token_for(&state, "admin");

    let (status, _) = send(
        test_app(&state),
        "PUT",
        "/api/permissions/routes",
        Some(&admin),
        Some(json!({
            "role": "manager",
            "path": "/dashboard/black-market",
            "is_allowed": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn editor_requires_authentication() {
    let state = test_state();
    let (status, _) = get(test_app(&state), "/api/permissions/routes?role=manager", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn roles_without_permission_management_cannot_open_the_editor() {
    let state = test_state();
    let manager = token_for(&state, "manager");

    let (status, _) = get(
        test_app(&state),
        "/api/permissions/routes?role=user",
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn view_access_alone_does_not_allow_writes() {
    let state = test_state();
    set_grid(
        &state,
        "manager",
        &[("Permission Management", flags(true, false, false, false))],
    )
    .await;
    let manager = token_for(&state, "manager");

    // The router layer lets a viewer in.
    let (status, _) = get(
        test_app(&state),
        "/api/permissions/routes?role=user",
        Some(&manager),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The handler's own re-check stops the mutation.
    let (status, _) = send(
        test_app(&state),
        "PUT",
        "/api/permissions/routes",
        Some(&manager),
        Some(json!({
            "role": "user",
            "path": "/dashboard/stocks",
            "is_allowed": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
