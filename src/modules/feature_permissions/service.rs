use anyhow::anyhow;
use tavolo_core::capability::FeatureGrid;
use tracing::instrument;

use crate::cache::PermissionCache;
use crate::store::FeaturePermissionStore;
use crate::utils::errors::AppError;

use super::model::{FeaturePermissionSet, ReplaceFeatureGridDto};

/// The grid as the editor shows it: always the full catalog shape. A role
/// that was never configured gets every feature with every action false.
#[instrument(skip(store))]
pub async fn editor_grid(
    store: &dyn FeaturePermissionStore,
    role: &str,
    branch: &str,
) -> Result<FeaturePermissionSet, AppError> {
    let permissions = match store.get(role, branch).await? {
        Some(stored) => stored.normalized(),
        None => FeatureGrid::full_default(),
    };

    Ok(FeaturePermissionSet {
        role: role.to_string(),
        branch: branch.to_string(),
        permissions,
    })
}

/// Overwrite the entire grid for (role, branch). Feature names outside the
/// catalog are rejected rather than stored; a stale editor cannot smuggle in
/// grants no call site would ever check.
#[instrument(skip(store, cache, dto), fields(role = %dto.role))]
pub async fn replace_grid(
    store: &dyn FeaturePermissionStore,
    cache: &PermissionCache,
    branch: &str,
    dto: ReplaceFeatureGridDto,
) -> Result<FeaturePermissionSet, AppError> {
    let unknown = dto.permissions.unknown_features();
    if !unknown.is_empty() {
        return Err(AppError::bad_request(anyhow!(
            "Unknown features: {}",
            unknown.join(", ")
        )));
    }

    store.replace(&dto.role, branch, &dto.permissions).await?;
    cache.invalidate(&dto.role, branch).await;

    Ok(FeaturePermissionSet {
        role: dto.role,
        branch: branch.to_string(),
        permissions: dto.permissions.normalized(),
    })
}
