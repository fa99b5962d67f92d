use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tavolo_core::capability::FeatureGrid;

use crate::modules::roles::model::Role;
use crate::modules::route_permissions::model::RoutePermissionRecord;
use crate::store::{FeaturePermissionStore, RoleStore, RoutePermissionStore};
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct PgRoutePermissionStore {
    pool: PgPool,
}

impl PgRoutePermissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoutePermissionStore for PgRoutePermissionStore {
    async fn list(&self, role: &str, branch: &str) -> Result<Vec<RoutePermissionRecord>, AppError> {
        let records = sqlx::query_as::<_, RoutePermissionRecord>(
            r#"SELECT role, branch, group_name, path, title, is_allowed
            FROM route_permissions
            WHERE role = $1 AND branch = $2
            ORDER BY group_name, title"#,
        )
        .bind(role)
        .bind(branch)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::internal)?;

        Ok(records)
    }

    async fn upsert(&self, record: &RoutePermissionRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO route_permissions (role, branch, group_name, path, title, is_allowed)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (role, branch, path)
            DO UPDATE SET group_name = $3, title = $5, is_allowed = $6, updated_at = NOW()"#,
        )
        .bind(&record.role)
        .bind(&record.branch)
        .bind(&record.group_name)
        .bind(&record.path)
        .bind(&record.title)
        .bind(record.is_allowed)
        .execute(&self.pool)
        .await
        .map_err(AppError::internal)?;

        Ok(())
    }
}

#[derive(Clone)]
pub struct PgFeaturePermissionStore {
    pool: PgPool,
}

impl PgFeaturePermissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeaturePermissionStore for PgFeaturePermissionStore {
    async fn get(&self, role: &str, branch: &str) -> Result<Option<FeatureGrid>, AppError> {
        let grid = sqlx::query_scalar::<_, Json<FeatureGrid>>(
            "SELECT permissions FROM feature_permissions WHERE role = $1 AND branch = $2",
        )
        .bind(role)
        .bind(branch)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::internal)?;

        Ok(grid.map(|json| json.0))
    }

    async fn replace(&self, role: &str, branch: &str, grid: &FeatureGrid) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO feature_permissions (role, branch, permissions)
            VALUES ($1, $2, $3)
            ON CONFLICT (role, branch)
            DO UPDATE SET permissions = $3, updated_at = NOW()"#,
        )
        .bind(role)
        .bind(branch)
        .bind(Json(grid))
        .execute(&self.pool)
        .await
        .map_err(AppError::internal)?;

        Ok(())
    }
}

#[derive(Clone)]
pub struct PgRoleStore {
    pool: PgPool,
}

impl PgRoleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for PgRoleStore {
    async fn list(&self, branch: &str) -> Result<Vec<Role>, AppError> {
        let roles = sqlx::query_as::<_, Role>(
            "SELECT id, name, branch, created_at FROM roles WHERE branch = $1 ORDER BY name",
        )
        .bind(branch)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::internal)?;

        Ok(roles)
    }

    async fn create(&self, branch: &str, name: &str) -> Result<Role, AppError> {
        sqlx::query_as::<_, Role>(
            r#"INSERT INTO roles (name, branch)
            VALUES ($1, $2)
            RETURNING id, name, branch, created_at"#,
        )
        .bind(name)
        .bind(branch)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow!(
                        "A role with this name already exists in this branch"
                    ));
                }
            }
            AppError::internal(e)
        })
    }
}
