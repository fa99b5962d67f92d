use std::collections::HashMap;

use anyhow::anyhow;
use tavolo_core::menu::{MenuLeaf, menu_tree};
use tracing::instrument;

use crate::cache::PermissionCache;
use crate::store::RoutePermissionStore;
use crate::utils::errors::AppError;

use super::model::{RouteEditorGroup, RoutePermissionRecord, RouteToggle, UpsertRoutePermissionDto};

/// The route editor surface: every leaf of the static tree, grouped by
/// section, with its stored toggle state. Leaves with no stored record show
/// as not allowed, so the surface has the same shape regardless of how much
/// has been configured.
#[instrument(skip(store))]
pub async fn editor_rows(
    store: &dyn RoutePermissionStore,
    role: &str,
    branch: &str,
) -> Result<Vec<RouteEditorGroup>, AppError> {
    let stored: HashMap<String, bool> = store
        .list(role, branch)
        .await?
        .into_iter()
        .map(|r| (r.path, r.is_allowed))
        .collect();

    let groups = menu_tree()
        .into_iter()
        .map(|group| RouteEditorGroup {
            group_name: group.group_name,
            list: group
                .list
                .into_iter()
                .map(|leaf| RouteToggle {
                    is_allowed: stored.get(&leaf.path).copied().unwrap_or(false),
                    title: leaf.title,
                    path: leaf.path,
                })
                .collect(),
        })
        .collect();

    Ok(groups)
}

fn find_leaf(path: &str) -> Option<(String, MenuLeaf)> {
    menu_tree().into_iter().find_map(|group| {
        group
            .list
            .iter()
            .find(|leaf| leaf.path == path)
            .cloned()
            .map(|leaf| (group.group_name.clone(), leaf))
    })
}

/// Persist one toggle. The path must be a leaf of the static tree; its title
/// and group come from the tree, not the payload, so stored metadata cannot
/// drift from the menu definition.
#[instrument(skip(store, cache))]
pub async fn upsert_toggle(
    store: &dyn RoutePermissionStore,
    cache: &PermissionCache,
    branch: &str,
    dto: UpsertRoutePermissionDto,
) -> Result<RoutePermissionRecord, AppError> {
    let (group_name, leaf) = find_leaf(&dto.path)
        .ok_or_else(|| AppError::bad_request(anyhow!("Unknown route path: {}", dto.path)))?;

    let record = RoutePermissionRecord {
        role: dto.role,
        branch: branch.to_string(),
        group_name,
        path: leaf.path,
        title: leaf.title,
        is_allowed: dto.is_allowed,
    };

    store.upsert(&record).await?;
    cache.invalidate(&record.role, &record.branch).await;

    Ok(record)
}
