//! Route-guard decision table.
//!
//! The guard never decides on partial data: until both the session and the
//! allowed-route set have settled, the only valid outcome is `Loading`.

use crate::menu::{DASHBOARD_HOME, is_admin_role};

/// Session input to the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Session resolution has not settled yet.
    Pending,
    /// Settled: no authenticated session.
    Anonymous,
    /// Settled: authenticated with this role.
    Authenticated { role: String },
}

/// Route-permission input to the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteState {
    /// Permission resolution has not settled yet.
    Pending,
    /// Settled allowed-path set (possibly empty).
    Ready(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// One of the inputs is still pending; render a placeholder only.
    Loading,
    /// Render the protected page.
    Render,
    /// No session; send to login, remembering the attempted path.
    RedirectToLogin { from: String },
    /// Authenticated but not granted this path.
    RedirectToHome,
}

/// Decide what to do with a request for `path`.
pub fn decide(session: &SessionState, routes: &RouteState, path: &str) -> GuardDecision {
    let role = match session {
        SessionState::Pending => return GuardDecision::Loading,
        SessionState::Anonymous => {
            return GuardDecision::RedirectToLogin {
                from: path.to_string(),
            };
        }
        SessionState::Authenticated { role } => role,
    };

    let allowed = match routes {
        RouteState::Pending => return GuardDecision::Loading,
        RouteState::Ready(allowed) => allowed,
    };

    if is_admin_role(role) {
        return GuardDecision::Render;
    }
    if allowed.iter().any(|p| p == path) || path == DASHBOARD_HOME {
        return GuardDecision::Render;
    }
    GuardDecision::RedirectToHome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> SessionState {
        SessionState::Authenticated {
            role: role.to_string(),
        }
    }

    fn ready(paths: &[&str]) -> RouteState {
        RouteState::Ready(paths.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn anonymous_is_sent_to_login_with_the_attempted_path() {
        let decision = decide(&SessionState::Anonymous, &ready(&[]), "/dashboard/stocks");
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                from: "/dashboard/stocks".to_string()
            }
        );
    }

    #[test]
    fn anonymous_redirects_even_while_routes_are_pending() {
        let decision = decide(&SessionState::Anonymous, &RouteState::Pending, DASHBOARD_HOME);
        assert!(matches!(decision, GuardDecision::RedirectToLogin { .. }));
    }

    #[test]
    fn pending_session_never_decides() {
        assert_eq!(
            decide(&SessionState::Pending, &ready(&[DASHBOARD_HOME]), DASHBOARD_HOME),
            GuardDecision::Loading
        );
    }

    #[test]
    fn pending_routes_never_decide_for_authenticated_users() {
        assert_eq!(
            decide(&user("manager"), &RouteState::Pending, DASHBOARD_HOME),
            GuardDecision::Loading
        );
    }

    #[test]
    fn allowed_path_renders() {
        assert_eq!(
            decide(&user("manager"), &ready(&["/dashboard/stocks"]), "/dashboard/stocks"),
            GuardDecision::Render
        );
    }

    #[test]
    fn home_is_always_reachable_once_authenticated() {
        assert_eq!(
            decide(&user("user"), &ready(&[]), DASHBOARD_HOME),
            GuardDecision::Render
        );
    }

    #[test]
    fn disallowed_path_redirects_home() {
        assert_eq!(
            decide(&user("user"), &ready(&[DASHBOARD_HOME]), "/dashboard/stocks"),
            GuardDecision::RedirectToHome
        );
    }

    #[test]
    fn admin_renders_any_path_even_with_no_grants() {
        assert_eq!(
            decide(&user("admin"), &ready(&[]), "/dashboard/expenses"),
            GuardDecision::Render
        );
    }
}
