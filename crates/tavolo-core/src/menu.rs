//! Static menu tree and permission-based pruning.
//!
//! The tree below is the source of truth for which pages exist. Route
//! permissions only ever grant or withhold paths that appear here; the route
//! editor renders exactly these leaves.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path of the dashboard landing page, reachable by anyone authenticated.
pub const DASHBOARD_HOME: &str = "/dashboard/home";

/// Path anonymous users are sent to.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuLeaf {
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuGroup {
    pub group_name: String,
    pub list: Vec<MenuLeaf>,
}

fn leaf(title: &str, path: &str) -> MenuLeaf {
    MenuLeaf {
        title: title.to_string(),
        path: path.to_string(),
    }
}

fn group(group_name: &str, list: Vec<MenuLeaf>) -> MenuGroup {
    MenuGroup {
        group_name: group_name.to_string(),
        list,
    }
}

/// The complete back-office menu.
pub fn menu_tree() -> Vec<MenuGroup> {
    vec![
        group(
            "Operations",
            vec![
                leaf("Home", DASHBOARD_HOME),
                leaf("Orders", "/dashboard/orders"),
                leaf("Tables", "/dashboard/tables"),
            ],
        ),
        group(
            "Inventory",
            vec![
                leaf("Stocks", "/dashboard/stocks"),
                leaf("Products", "/dashboard/products"),
                leaf("Purchases", "/dashboard/purchases"),
                leaf("Vendors", "/dashboard/vendors"),
            ],
        ),
        group(
            "Accounting",
            vec![
                leaf("Expenses", "/dashboard/expenses"),
                leaf("Reports", "/dashboard/reports"),
            ],
        ),
        group(
            "People",
            vec![
                leaf("Customers", "/dashboard/customers"),
                leaf("Staff Roles", "/dashboard/roles"),
            ],
        ),
        group(
            "Administration",
            vec![
                leaf("Route Permissions", "/dashboard/permissions/routes"),
                leaf("Feature Permissions", "/dashboard/permissions/features"),
            ],
        ),
    ]
}

/// Whether `path` is a leaf of the static tree.
pub fn is_known_path(path: &str) -> bool {
    menu_tree()
        .iter()
        .any(|g| g.list.iter().any(|l| l.path == path))
}

pub fn is_admin_role(role: &str) -> bool {
    role.eq_ignore_ascii_case("admin")
}

/// Prune `tree` down to the leaves whose path is in `allowed`.
///
/// A group survives only if at least one of its leaves does, and its list is
/// replaced by the survivors. Order is preserved as defined.
///
/// Failsafe: an admin with an empty allowed set gets the whole tree back.
/// Admin route permissions are often never seeded, and an administrator who
/// cannot reach the permission editors cannot fix that.
pub fn filter_menu(tree: Vec<MenuGroup>, allowed: &[String], is_admin: bool) -> Vec<MenuGroup> {
    if is_admin && allowed.is_empty() {
        return tree;
    }

    tree.into_iter()
        .filter_map(|group| {
            let list: Vec<MenuLeaf> = group
                .list
                .into_iter()
                .filter(|leaf| allowed.iter().any(|path| *path == leaf.path))
                .collect();
            if list.is_empty() {
                None
            } else {
                Some(MenuGroup {
                    group_name: group.group_name,
                    list,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn every_retained_leaf_is_allowed() {
        let allowed = allowed(&[DASHBOARD_HOME, "/dashboard/stocks"]);
        let pruned = filter_menu(menu_tree(), &allowed, false);
        for group in &pruned {
            for leaf in &group.list {
                assert!(allowed.contains(&leaf.path));
            }
        }
    }

    #[test]
    fn group_survives_iff_a_leaf_survives() {
        let pruned = filter_menu(menu_tree(), &allowed(&["/dashboard/expenses"]), false);
        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned[0].group_name, "Accounting");
        assert_eq!(pruned[0].list.len(), 1);
        assert_eq!(pruned[0].list[0].path, "/dashboard/expenses");
    }

    #[test]
    fn order_is_preserved() {
        let allowed = allowed(&["/dashboard/vendors", "/dashboard/stocks", DASHBOARD_HOME]);
        let pruned = filter_menu(menu_tree(), &allowed, false);
        assert_eq!(pruned[0].group_name, "Operations");
        assert_eq!(pruned[1].group_name, "Inventory");
        assert_eq!(pruned[1].list[0].path, "/dashboard/stocks");
        assert_eq!(pruned[1].list[1].path, "/dashboard/vendors");
    }

    #[test]
    fn empty_allowed_set_empties_the_menu_for_non_admins() {
        assert!(filter_menu(menu_tree(), &[], false).is_empty());
    }

    #[test]
    fn admin_with_empty_allowed_set_gets_the_full_tree() {
        let full = menu_tree();
        assert_eq!(filter_menu(menu_tree(), &[], true), full);
    }

    #[test]
    fn admin_with_explicit_grants_is_pruned_like_anyone_else() {
        let pruned = filter_menu(menu_tree(), &allowed(&[DASHBOARD_HOME]), true);
        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned[0].list[0].path, DASHBOARD_HOME);
    }

    #[test]
    fn known_paths_cover_the_tree() {
        assert!(is_known_path("/dashboard/stocks"));
        assert!(is_known_path(DASHBOARD_HOME));
        assert!(!is_known_path("/dashboard/nonexistent"));
    }
}
