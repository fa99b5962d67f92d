mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, send, test_app, test_state, token_for};

#[tokio::test]
async fn fresh_branches_have_an_empty_catalog() {
    let state = test_state();
    let admin = token_for(&state, "admin");

    let (status, body) = get(test_app(&state), "/api/roles", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"], json!([]));
}

#[tokio::test]
async fn created_roles_appear_in_the_catalog_sorted() {
    let state = test_state();
    let admin = token_for(&state, "admin");

    for name in ["manager", "admin", "waiter"] {
        let (status, _) = send(
            test_app(&state),
            "POST",
            "/api/roles",
            Some(&admin),
            Some(json!({ "name": name })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get(test_app(&state), "/api/roles", Some(&admin)).await;
    assert_eq!(body["roles"], json!(["admin", "manager", "waiter"]));
}

#[tokio::test]
async fn duplicate_role_names_are_rejected() {
    let state = test_state();
    let admin = token_for(&state, "admin");

    let (status, _) = send(
        test_app(&state),
        "POST",
        "/api/roles",
        Some(&admin),
        Some(json!({ "name": "manager" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        test_app(&state),
        "POST",
        "/api/roles",
        Some(&admin),
        Some(json!({ "name": "manager" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_names_fail_validation() {
    let state = test_state();
    let admin = token_for(&state, "admin");

    let (status, _) = send(
        test_app(&state),
        "POST",
        "/api/roles",
        Some(&admin),
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn role_creation_requires_permission_management() {
    let state = test_state();
    let user = token_for(&state, "user");

    let (status, _) = send(
        test_app(&state),
        "POST",
        "/api/roles",
        Some(&user),
        Some(json!({ "name": "runner" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
