use axum::{Json, extract::State};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{AllowedRoutesResponse, NavigationResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Menu pruned to the session's grants", body = NavigationResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<NavigationResponse>, AppError> {
    let menu =
        service::build_menu(&state.permissions, auth_user.role(), auth_user.branch()).await;
    Ok(Json(menu))
}

#[utoipa::path(
    get,
    path = "/api/navigation/routes",
    responses(
        (status = 200, description = "Paths the session may navigate to", body = AllowedRoutesResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
pub async fn get_allowed_routes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<AllowedRoutesResponse>, AppError> {
    let allowed = state
        .permissions
        .allowed_routes(auth_user.role(), auth_user.branch())
        .await;

    Ok(Json(AllowedRoutesResponse {
        allowed_routes: allowed.as_ref().clone(),
    }))
}
