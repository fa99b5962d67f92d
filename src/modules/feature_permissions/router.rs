use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{check_capability_for_session, get_feature_grid, replace_feature_grid};

pub fn init_feature_permissions_router() -> Router<AppState> {
    Router::new().route("/", get(get_feature_grid).put(replace_feature_grid))
}

/// Mounted outside the editor gate: every authenticated page calls this.
pub fn init_capability_check_router() -> Router<AppState> {
    Router::new().route("/", get(check_capability_for_session))
}
