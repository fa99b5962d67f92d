//! Feature-gate middleware and helpers.
//!
//! Gating happens twice: a router-level layer keeps a role out of a whole
//! feature surface, and every mutating handler re-checks before acting.
//! The layer alone is not enough, a handler can be reached through paths the
//! layer does not cover.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tavolo_core::capability::{Action, Feature};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Check one capability for the session, denying with a visible notice.
pub async fn check_capability(
    state: &AppState,
    user: &AuthUser,
    feature: Feature,
    action: Action,
) -> Result<(), AppError> {
    let allowed = state
        .permissions
        .can_perform(user.role(), user.branch(), feature, action)
        .await;

    if !allowed {
        return Err(AppError::forbidden(format!(
            "Access denied: {} requires {} permission on {}",
            user.role(),
            action.as_str(),
            feature.name()
        )));
    }

    Ok(())
}

async fn require_capability(
    state: AppState,
    req: Request,
    next: Next,
    feature: Feature,
    action: Action,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user = AuthUser::from_request_parts(&mut parts, &state).await?;
    check_capability(&state, &user, feature, action).await?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Layer for the permission-editor surface: only roles granted at least a
/// view of Permission Management (or admin) get in at all.
pub async fn require_permission_management(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_capability(state, req, next, Feature::PermissionManagement, Action::View).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
