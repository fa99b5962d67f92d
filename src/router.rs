use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::capability::require_permission_management;
use crate::modules::feature_permissions::router::{
    init_capability_check_router, init_feature_permissions_router,
};
use crate::modules::guard::router::init_guard_router;
use crate::modules::navigation::router::init_navigation_router;
use crate::modules::roles::router::init_roles_router;
use crate::modules::route_permissions::router::init_route_permissions_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let editor_routes = Router::new()
        .nest("/routes", init_route_permissions_router())
        .nest("/features", init_feature_permissions_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission_management,
        ));

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(
            "/api",
            Router::new()
                .nest("/permissions", editor_routes)
                .nest("/permissions/check", init_capability_check_router())
                .nest("/navigation", init_navigation_router())
                .nest("/guard", init_guard_router())
                .nest("/roles", init_roles_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(middleware::from_fn(logging_middleware))
}
