use axum::{
    Json,
    extract::{Query, State},
};
use tavolo_core::capability::{Action, Feature};

use crate::middleware::auth::AuthUser;
use crate::middleware::capability::check_capability;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{RouteEditorGroup, RouteEditorParams, RoutePermissionRecord, UpsertRoutePermissionDto};
use super::service;

#[utoipa::path(
    get,
    path = "/api/permissions/routes",
    params(RouteEditorParams),
    responses(
        (status = 200, description = "Route toggles for the role, grouped by menu section", body = Vec<RouteEditorGroup>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Route permissions",
    security(("bearer_auth" = []))
)]
pub async fn get_route_permissions(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<RouteEditorParams>,
) -> Result<Json<Vec<RouteEditorGroup>>, AppError> {
    let groups =
        service::editor_rows(state.route_store.as_ref(), &params.role, auth_user.branch()).await?;
    Ok(Json(groups))
}

#[utoipa::path(
    put,
    path = "/api/permissions/routes",
    request_body = UpsertRoutePermissionDto,
    responses(
        (status = 200, description = "Toggle persisted", body = RoutePermissionRecord),
        (status = 400, description = "Unknown route path"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Route permissions",
    security(("bearer_auth" = []))
)]
pub async fn upsert_route_permission(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpsertRoutePermissionDto>,
) -> Result<Json<RoutePermissionRecord>, AppError> {
    // Mutations re-check even though the router layer already gated this
    // surface on view access.
    check_capability(&state, &auth_user, Feature::PermissionManagement, Action::Edit).await?;

    let record = service::upsert_toggle(
        state.route_store.as_ref(),
        &state.permissions,
        auth_user.branch(),
        dto,
    )
    .await?;

    Ok(Json(record))
}
