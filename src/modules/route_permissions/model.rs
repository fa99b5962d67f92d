use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// One stored route grant: (role, branch, path) plus the menu metadata the
/// editor displays. Created or overwritten by upsert, never batch-deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoutePermissionRecord {
    pub role: String,
    pub branch: String,
    pub group_name: String,
    pub path: String,
    pub title: String,
    pub is_allowed: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertRoutePermissionDto {
    #[validate(length(min = 1, max = 100, message = "Role must be between 1 and 100 characters"))]
    pub role: String,
    #[validate(length(min = 1, message = "Path must not be empty"))]
    pub path: String,
    pub is_allowed: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RouteEditorParams {
    /// Role whose grants are being edited.
    pub role: String,
}

/// One toggle row of the route editor.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RouteToggle {
    pub title: String,
    pub path: String,
    pub is_allowed: bool,
}

/// Editor section: a menu group with the toggle state of every leaf.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RouteEditorGroup {
    pub group_name: String,
    pub list: Vec<RouteToggle>,
}
