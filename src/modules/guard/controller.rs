use axum::{
    Json,
    extract::{Query, State},
};

use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{GuardParams, GuardResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/guard",
    params(GuardParams),
    responses(
        (status = 200, description = "Render or redirect verdict for the path", body = GuardResponse)
    ),
    tag = "Guard"
)]
pub async fn check_route(
    State(state): State<AppState>,
    MaybeAuthUser(claims): MaybeAuthUser,
    Query(params): Query<GuardParams>,
) -> Result<Json<GuardResponse>, AppError> {
    let verdict =
        service::decide_route(&state.permissions, claims.as_ref(), &params.path).await;
    Ok(Json(verdict))
}
