use serde::Serialize;
use tavolo_core::menu::MenuGroup;
use utoipa::ToSchema;

/// The sidebar menu the session is allowed to see.
#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    pub menu: Vec<MenuGroup>,
}

/// Raw allowed-path set, for clients that guard routes themselves.
#[derive(Debug, Serialize, ToSchema)]
pub struct AllowedRoutesResponse {
    pub allowed_routes: Vec<String>,
}
