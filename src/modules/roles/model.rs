use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The selectable role names shown when the catalog endpoint degrades.
pub const DEFAULT_ROLES: [&str; 3] = ["admin", "manager", "user"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub branch: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoleDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
}

/// Role names selectable in the permission editors.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleCatalogResponse {
    pub roles: Vec<String>,
}
