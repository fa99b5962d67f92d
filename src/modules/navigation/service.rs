use tavolo_core::menu::{filter_menu, is_admin_role, menu_tree};
use tracing::instrument;

use crate::cache::PermissionCache;

use super::model::NavigationResponse;

/// Prune the static tree down to the session's granted pages. An admin whose
/// route grants were never seeded gets the whole tree rather than an empty
/// sidebar.
#[instrument(skip(cache))]
pub async fn build_menu(cache: &PermissionCache, role: &str, branch: &str) -> NavigationResponse {
    let allowed = cache.allowed_routes(role, branch).await;
    let menu = filter_menu(menu_tree(), &allowed, is_admin_role(role));
    NavigationResponse { menu }
}
