use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::check_route;

pub fn init_guard_router() -> Router<AppState> {
    Router::new().route("/", get(check_route))
}
