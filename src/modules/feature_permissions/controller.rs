use anyhow::anyhow;
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

use super::model::{
    CapabilityCheckParams, CapabilityCheckResponse, FeaturePermissionSet, GridParams,
    ReplaceFeatureGridDto,
};
use super::service;

#[utoipa::path(
    get,
    path = "/api/permissions/features",
    params(GridParams),
    responses(
        (status = 200, description = "Feature-action grid in full catalog shape", body = FeaturePermissionSet),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Feature permissions",
    security(("bearer_auth" = []))
)]
pub async fn get_feature_grid(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<GridParams>,
) -> Result<Json<FeaturePermissionSet>, AppError> {
    let grid =
        service::editor_grid(state.feature_store.as_ref(), &params.role, auth_user.branch())
            .await?;
    Ok(Json(grid))
}

#[utoipa::path(
    put,
    path = "/api/permissions/features",
    request_body = ReplaceFeatureGridDto,
    responses(
        (status = 200, description = "Grid replaced", body = FeaturePermissionSet),
        (status = 400, description = "Unknown feature names in payload"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Feature permissions",
    security(("bearer_auth" = []))
)]
pub async fn replace_feature_grid(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ReplaceFeatureGridDto>,
) -> Result<Json<FeaturePermissionSet>, AppError> {
    check_capability(&state, &auth_user, Feature::PermissionManagement, Action::Edit).await?;

    let saved = service::replace_grid(
        state.feature_store.as_ref(),
        &state.permissions,
        auth_user.branch(),
        dto,
    )
    .await?;

    Ok(Json(saved))
}

#[utoipa::path(
    get,
    path = "/api/permissions/check",
    params(CapabilityCheckParams),
    responses(
        (status = 200, description = "Whether the session may perform the action", body = CapabilityCheckResponse),
        (status = 400, description = "Feature not in the catalog"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Feature permissions",
    security(("bearer_auth" = []))
)]
pub async fn check_capability_for_session(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<CapabilityCheckParams>,
) -> Result<Json<CapabilityCheckResponse>, AppError> {
    let feature = Feature::from_name(&params.feature)
        .ok_or_else(|| AppError::bad_request(anyhow!("Unknown feature: {}", params.feature)))?;

    let allowed = state
        .permissions
        .can_perform(auth_user.role(), auth_user.branch(), feature, params.action)
        .await;

    Ok(Json(CapabilityCheckResponse {
        feature: params.feature,
        action: params.action,
        allowed,
    }))
}
