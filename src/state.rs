use std::sync::Arc;

use tavolo_config::{CorsConfig, JwtConfig};
use tracing::warn;

use crate::cache::PermissionCache;
use crate::store::memory::{MemoryFeaturePermissionStore, MemoryRoleStore, MemoryRoutePermissionStore};
use crate::store::postgres::{PgFeaturePermissionStore, PgRoleStore, PgRoutePermissionStore};
use crate::store::{FeaturePermissionStore, RoleStore, RoutePermissionStore};

#[derive(Clone)]
pub struct AppState {
    pub route_store: Arc<dyn RoutePermissionStore>,
    pub feature_store: Arc<dyn FeaturePermissionStore>,
    pub role_store: Arc<dyn RoleStore>,
    pub permissions: Arc<PermissionCache>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        route_store: Arc<dyn RoutePermissionStore>,
        feature_store: Arc<dyn FeaturePermissionStore>,
        role_store: Arc<dyn RoleStore>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let permissions = Arc::new(PermissionCache::new(
            Arc::clone(&route_store),
            Arc::clone(&feature_store),
        ));

        Self {
            route_store,
            feature_store,
            role_store,
            permissions,
            jwt_config,
            cors_config,
        }
    }

    /// State backed by the in-memory stores; what tests and DB-less dev runs
    /// use.
    pub fn in_memory(jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self::new(
            Arc::new(MemoryRoutePermissionStore::new()),
            Arc::new(MemoryFeaturePermissionStore::new()),
            Arc::new(MemoryRoleStore::new()),
            jwt_config,
            cors_config,
        )
    }
}

pub async fn init_app_state() -> AppState {
    let jwt_config = JwtConfig::from_env();
    let cors_config = CorsConfig::from_env();

    match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = tavolo_db::init_db_pool(&database_url)
                .await
                .expect("Failed to connect to database");

            AppState::new(
                Arc::new(PgRoutePermissionStore::new(pool.clone())),
                Arc::new(PgFeaturePermissionStore::new(pool.clone())),
                Arc::new(PgRoleStore::new(pool)),
                jwt_config,
                cors_config,
            )
        }
        Err(_) => {
            warn!("DATABASE_URL not set, running on in-memory stores");
            AppState::in_memory(jwt_config, cors_config)
        }
    }
}
