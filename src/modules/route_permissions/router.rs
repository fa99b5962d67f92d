use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_route_permissions, upsert_route_permission};

pub fn init_route_permissions_router() -> Router<AppState> {
    Router::new().route("/", get(get_route_permissions).put(upsert_route_permission))
}
