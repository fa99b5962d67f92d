use tracing::{instrument, warn};

use crate::store::RoleStore;
use crate::utils::errors::AppError;

use super::model::{CreateRoleDto, DEFAULT_ROLES, Role, RoleCatalogResponse};

/// Selectable role names for a branch. A failed read falls back to the fixed
/// default set so the permission editors stay usable while the catalog is
/// degraded.
#[instrument(skip(store))]
pub async fn catalog(store: &dyn RoleStore, branch: &str) -> RoleCatalogResponse {
    match store.list(branch).await {
        Ok(roles) => RoleCatalogResponse {
            roles: roles.into_iter().map(|r| r.name).collect(),
        },
        Err(err) => {
            warn!(branch, error = %err.error, "role catalog read failed, using default set");
            RoleCatalogResponse {
                roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            }
        }
    }
}

#[instrument(skip(store, dto), fields(name = %dto.name))]
pub async fn create_role(
    store: &dyn RoleStore,
    branch: &str,
    dto: CreateRoleDto,
) -> Result<Role, AppError> {
    store.create(branch, &dto.name).await
}
