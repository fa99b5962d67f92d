use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_role, get_role_catalog};

pub fn init_roles_router() -> Router<AppState> {
    Router::new().route("/", get(get_role_catalog).post(create_role))
}
