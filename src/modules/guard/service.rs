use tavolo_core::guard::{GuardDecision, RouteState, SessionState, decide};
use tavolo_core::menu::{DASHBOARD_HOME, LOGIN_PATH};
use tracing::instrument;

use crate::cache::PermissionCache;
use crate::utils::jwt::Claims;

use super::model::{GuardOutcome, GuardResponse};

/// Guard decision for one request. Both inputs are settled by the time this
/// runs, so the pure decision table can never come back `Loading` here; the
/// pending branches exist for callers that evaluate the table incrementally.
#[instrument(skip(cache, claims), fields(authenticated = claims.is_some()))]
pub async fn decide_route(
    cache: &PermissionCache,
    claims: Option<&Claims>,
    path: &str,
) -> GuardResponse {
    let (session, routes) = match claims {
        None => (SessionState::Anonymous, RouteState::Ready(Vec::new())),
        Some(claims) => {
            let allowed = cache.allowed_routes(&claims.role, &claims.branch).await;
            (
                SessionState::Authenticated {
                    role: claims.role.clone(),
                },
                RouteState::Ready(allowed.as_ref().clone()),
            )
        }
    };

    match decide(&session, &routes, path) {
        GuardDecision::Render => GuardResponse {
            decision: GuardOutcome::Render,
            to: None,
            from: None,
        },
        // Unreachable with settled inputs; fail closed rather than render.
        GuardDecision::Loading => GuardResponse {
            decision: GuardOutcome::Redirect,
            to: Some(LOGIN_PATH.to_string()),
            from: Some(path.to_string()),
        },
        GuardDecision::RedirectToLogin { from } => GuardResponse {
            decision: GuardOutcome::Redirect,
            to: Some(LOGIN_PATH.to_string()),
            from: Some(from),
        },
        GuardDecision::RedirectToHome => GuardResponse {
            decision: GuardOutcome::Redirect,
            to: Some(DASHBOARD_HOME.to_string()),
            from: None,
        },
    }
}
