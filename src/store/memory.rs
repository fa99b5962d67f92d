//! In-memory adapters, used by the test suite and by dev runs without a
//! `DATABASE_URL`. State lives only as long as the process.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use tavolo_core::capability::FeatureGrid;
use uuid::Uuid;

use crate::modules::roles::model::Role;
use crate::modules::route_permissions::model::RoutePermissionRecord;
use crate::store::{FeaturePermissionStore, RoleStore, RoutePermissionStore};
use crate::utils::errors::AppError;

fn key(role: &str, branch: &str) -> (String, String) {
    (role.to_string(), branch.to_string())
}

#[derive(Default)]
pub struct MemoryRoutePermissionStore {
    // (role, branch) -> path -> record
    records: RwLock<HashMap<(String, String), HashMap<String, RoutePermissionRecord>>>,
}

impl MemoryRoutePermissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoutePermissionStore for MemoryRoutePermissionStore {
    async fn list(&self, role: &str, branch: &str) -> Result<Vec<RoutePermissionRecord>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::internal(anyhow!("route store lock poisoned")))?;

        Ok(records
            .get(&key(role, branch))
            .map(|by_path| by_path.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn upsert(&self, record: &RoutePermissionRecord) -> Result<(), AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::internal(anyhow!("route store lock poisoned")))?;

        records
            .entry(key(&record.role, &record.branch))
            .or_default()
            .insert(record.path.clone(), record.clone());

        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryFeaturePermissionStore {
    grids: RwLock<HashMap<(String, String), FeatureGrid>>,
}

impl MemoryFeaturePermissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeaturePermissionStore for MemoryFeaturePermissionStore {
    async fn get(&self, role: &str, branch: &str) -> Result<Option<FeatureGrid>, AppError> {
        let grids = self
            .grids
            .read()
            .map_err(|_| AppError::internal(anyhow!("feature store lock poisoned")))?;

        Ok(grids.get(&key(role, branch)).cloned())
    }

    async fn replace(&self, role: &str, branch: &str, grid: &FeatureGrid) -> Result<(), AppError> {
        let mut grids = self
            .grids
            .write()
            .map_err(|_| AppError::internal(anyhow!("feature store lock poisoned")))?;

        grids.insert(key(role, branch), grid.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryRoleStore {
    roles: RwLock<HashMap<String, Vec<Role>>>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn list(&self, branch: &str) -> Result<Vec<Role>, AppError> {
        let roles = self
            .roles
            .read()
            .map_err(|_| AppError::internal(anyhow!("role store lock poisoned")))?;

        let mut list = roles.get(branch).cloned().unwrap_or_default();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    async fn create(&self, branch: &str, name: &str) -> Result<Role, AppError> {
        let mut roles = self
            .roles
            .write()
            .map_err(|_| AppError::internal(anyhow!("role store lock poisoned")))?;

        let branch_roles = roles.entry(branch.to_string()).or_default();
        if branch_roles.iter().any(|r| r.name == name) {
            return Err(AppError::bad_request(anyhow!(
                "A role with this name already exists in this branch"
            )));
        }

        let role = Role {
            id: Uuid::new_v4(),
            name: name.to_string(),
            branch: branch.to_string(),
            created_at: Utc::now(),
        };
        branch_roles.push(role.clone());
        Ok(role)
    }
}
