use axum::{Json, extract::State, http::StatusCode};
use tavolo_core::capability::{Action, Feature};

use crate::middleware::auth::AuthUser;
use crate::middleware::capability::check_capability;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateRoleDto, Role, RoleCatalogResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "Selectable roles for the session's branch", body = RoleCatalogResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn get_role_catalog(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<RoleCatalogResponse>, AppError> {
    let catalog = service::catalog(state.role_store.as_ref(), auth_user.branch()).await;
    Ok(Json(catalog))
}

#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = Role),
        (status = 400, description = "Duplicate role name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn create_role(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateRoleDto>,
) -> Result<(StatusCode, Json<Role>), AppError> {
    check_capability(&state, &auth_user, Feature::PermissionManagement, Action::Edit).await?;

    let role = service::create_role(state.role_store.as_ref(), auth_user.branch(), dto).await?;
    Ok((StatusCode::CREATED, Json(role)))
}
