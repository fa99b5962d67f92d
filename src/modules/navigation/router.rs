use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_allowed_routes, get_navigation};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_navigation))
        .route("/routes", get(get_allowed_routes))
}
