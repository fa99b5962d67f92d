//! Persistence ports for the permission data.
//!
//! Services only see these traits; the Postgres adapter backs production and
//! the in-memory adapter backs tests and database-less dev runs.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use tavolo_core::capability::FeatureGrid;

use crate::modules::roles::model::Role;
use crate::modules::route_permissions::model::RoutePermissionRecord;
use crate::utils::errors::AppError;

/// Coarse-grained route grants, one row per (role, branch, path).
#[async_trait]
pub trait RoutePermissionStore: Send + Sync {
    /// All records for a (role, branch). A never-configured pair yields an
    /// empty list, not an error.
    async fn list(&self, role: &str, branch: &str) -> Result<Vec<RoutePermissionRecord>, AppError>;

    /// Insert or overwrite the record for (role, branch, path).
    async fn upsert(&self, record: &RoutePermissionRecord) -> Result<(), AppError>;
}

/// Fine-grained feature-action grid, one row per (role, branch).
#[async_trait]
pub trait FeaturePermissionStore: Send + Sync {
    /// The stored grid, or `None` when never configured.
    async fn get(&self, role: &str, branch: &str) -> Result<Option<FeatureGrid>, AppError>;

    /// Overwrite the entire grid for (role, branch) in one atomic write.
    /// Concurrent replaces are last-write-wins.
    async fn replace(&self, role: &str, branch: &str, grid: &FeatureGrid) -> Result<(), AppError>;
}

/// Selectable role names per branch.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn list(&self, branch: &str) -> Result<Vec<Role>, AppError>;

    async fn create(&self, branch: &str, name: &str) -> Result<Role, AppError>;
}
