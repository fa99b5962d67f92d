//! Session-scoped permission reads.
//!
//! Every consumer (navigation, guard, feature gates) goes through this one
//! owner instead of fetching its own copy, so a (role, branch) pair is read
//! at most once until an editor writes to it.
//!
//! Failed reads are logged and degrade to deny-all, but are never cached:
//! the next consumer retries instead of pinning an empty grant set.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use tavolo_core::capability::{Action, Feature, FeatureGrid};
use tavolo_core::menu::is_admin_role;

use crate::store::{FeaturePermissionStore, RoutePermissionStore};

type Key = (String, String);

pub struct PermissionCache {
    route_store: Arc<dyn RoutePermissionStore>,
    feature_store: Arc<dyn FeaturePermissionStore>,
    routes: RwLock<HashMap<Key, Arc<Vec<String>>>>,
    grids: RwLock<HashMap<Key, Arc<FeatureGrid>>>,
}

impl PermissionCache {
    pub fn new(
        route_store: Arc<dyn RoutePermissionStore>,
        feature_store: Arc<dyn FeaturePermissionStore>,
    ) -> Self {
        Self {
            route_store,
            feature_store,
            routes: RwLock::new(HashMap::new()),
            grids: RwLock::new(HashMap::new()),
        }
    }

    /// Paths the (role, branch) may navigate to. A failed read denies all.
    pub async fn allowed_routes(&self, role: &str, branch: &str) -> Arc<Vec<String>> {
        let key = (role.to_string(), branch.to_string());
        if let Some(cached) = self.routes.read().await.get(&key) {
            return Arc::clone(cached);
        }

        match self.route_store.list(role, branch).await {
            Ok(records) => {
                let allowed: Vec<String> = records
                    .into_iter()
                    .filter(|r| r.is_allowed)
                    .map(|r| r.path)
                    .collect();
                let allowed = Arc::new(allowed);
                self.routes.write().await.insert(key, Arc::clone(&allowed));
                allowed
            }
            Err(err) => {
                warn!(role, branch, error = %err.error, "route permission read failed, denying all");
                Arc::new(Vec::new())
            }
        }
    }

    /// Feature-action grid for the (role, branch). A never-configured pair is
    /// an empty grid, indistinguishable from all-actions-false; a failed read
    /// degrades the same way.
    pub async fn grid(&self, role: &str, branch: &str) -> Arc<FeatureGrid> {
        let key = (role.to_string(), branch.to_string());
        if let Some(cached) = self.grids.read().await.get(&key) {
            return Arc::clone(cached);
        }

        match self.feature_store.get(role, branch).await {
            Ok(stored) => {
                let grid = Arc::new(stored.unwrap_or_else(FeatureGrid::empty));
                self.grids.write().await.insert(key, Arc::clone(&grid));
                grid
            }
            Err(err) => {
                warn!(role, branch, error = %err.error, "feature permission read failed, denying all");
                Arc::new(FeatureGrid::empty())
            }
        }
    }

    /// `canPerform` for a session. Admin roles short-circuit without a fetch.
    pub async fn can_perform(
        &self,
        role: &str,
        branch: &str,
        feature: Feature,
        action: Action,
    ) -> bool {
        if is_admin_role(role) {
            return true;
        }
        self.grid(role, branch).await.allows(feature, action)
    }

    /// Drop cached reads for a (role, branch) after an editor write.
    pub async fn invalidate(&self, role: &str, branch: &str) {
        let key = (role.to_string(), branch.to_string());
        self.routes.write().await.remove(&key);
        self.grids.write().await.remove(&key);
    }
}
