//! Feature-action capability catalog.
//!
//! The editor screens and every `can_perform` call site used to agree on
//! feature names by convention only. The catalog below is the single closed
//! registry both sides share: a grid can only ever contain these features, so
//! a typo at a call site fails to compile instead of silently denying.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every feature the back office can gate. The display name is the key used
/// in stored grids and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    StockManagement,
    VendorManagement,
    ProductManagement,
    PurchaseManagement,
    ExpenseManagement,
    OrderManagement,
    TableManagement,
    CustomerManagement,
    AccountingReports,
    PermissionManagement,
}

impl Feature {
    /// All catalog features, in the order the editor renders its rows.
    pub const ALL: [Feature; 10] = [
        Feature::StockManagement,
        Feature::VendorManagement,
        Feature::ProductManagement,
        Feature::PurchaseManagement,
        Feature::ExpenseManagement,
        Feature::OrderManagement,
        Feature::TableManagement,
        Feature::CustomerManagement,
        Feature::AccountingReports,
        Feature::PermissionManagement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::StockManagement => "Stock Management",
            Feature::VendorManagement => "Vendor Management",
            Feature::ProductManagement => "Product Management",
            Feature::PurchaseManagement => "Purchase Management",
            Feature::ExpenseManagement => "Expense Management",
            Feature::OrderManagement => "Order Management",
            Feature::TableManagement => "Table Management",
            Feature::CustomerManagement => "Customer Management",
            Feature::AccountingReports => "Accounting Reports",
            Feature::PermissionManagement => "Permission Management",
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// CRUD-style action within a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::View, Action::Add, Action::Edit, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Add => "add",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

/// The four grant flags of one feature row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActionFlags {
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub add: bool,
    #[serde(default)]
    pub edit: bool,
    #[serde(default)]
    pub delete: bool,
}

impl ActionFlags {
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.view,
            Action::Add => self.add,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
        }
    }
}

/// Feature-action grid for one (role, branch).
///
/// Keyed by feature display name so the stored JSON and the wire payload are
/// the same shape. A `BTreeMap` keeps editor rows in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureGrid {
    pub features: BTreeMap<String, ActionFlags>,
}

impl FeatureGrid {
    /// Grid with no grants at all; what a failed or not-found read degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shape the editor always shows: every catalog feature present,
    /// every action false.
    pub fn full_default() -> Self {
        let features = Feature::ALL
            .iter()
            .map(|f| (f.name().to_string(), ActionFlags::default()))
            .collect();
        Self { features }
    }

    /// Merge stored rows over the full default shape, so a sparse or absent
    /// grid still renders as the complete editor surface.
    pub fn normalized(&self) -> Self {
        let mut full = Self::full_default();
        for (name, flags) in &self.features {
            if Feature::from_name(name).is_some() {
                full.features.insert(name.clone(), *flags);
            }
        }
        full
    }

    /// Feature names present in the payload but not in the catalog.
    pub fn unknown_features(&self) -> Vec<&str> {
        self.features
            .keys()
            .filter(|name| Feature::from_name(name).is_none())
            .map(String::as_str)
            .collect()
    }

    pub fn allows(&self, feature: Feature, action: Action) -> bool {
        self.features
            .get(feature.name())
            .is_some_and(|flags| flags.allows(action))
    }
}

/// Whether `role` may perform `action` on `feature` under `grid`.
///
/// An admin role passes unconditionally; everyone else is denied unless the
/// grid has an explicit true flag for that cell.
pub fn can_perform(role: &str, grid: &FeatureGrid, feature: Feature, action: Action) -> bool {
    if role.eq_ignore_ascii_case("admin") {
        return true;
    }
    grid.allows(feature, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_view_edit_grid() -> FeatureGrid {
        let mut grid = FeatureGrid::empty();
        grid.features.insert(
            "Stock Management".to_string(),
            ActionFlags {
                view: true,
                edit: true,
                ..Default::default()
            },
        );
        grid
    }

    #[test]
    fn admin_bypasses_empty_grid() {
        let grid = FeatureGrid::empty();
        for feature in Feature::ALL {
            for action in Action::ALL {
                assert!(can_perform("admin", &grid, feature, action));
                assert!(can_perform("ADMIN", &grid, feature, action));
            }
        }
    }

    #[test]
    fn manager_follows_grid() {
        let grid = stock_view_edit_grid();
        assert!(can_perform("manager", &grid, Feature::StockManagement, Action::View));
        assert!(can_perform("manager", &grid, Feature::StockManagement, Action::Edit));
        assert!(!can_perform("manager", &grid, Feature::StockManagement, Action::Add));
        assert!(!can_perform("manager", &grid, Feature::StockManagement, Action::Delete));
        assert!(!can_perform("manager", &grid, Feature::VendorManagement, Action::View));
    }

    #[test]
    fn missing_feature_denies_all_actions() {
        let grid = FeatureGrid::empty();
        for action in Action::ALL {
            assert!(!can_perform("user", &grid, Feature::OrderManagement, action));
        }
    }

    #[test]
    fn full_default_covers_the_whole_catalog_with_no_grants() {
        let grid = FeatureGrid::full_default();
        assert_eq!(grid.features.len(), Feature::ALL.len());
        for (name, flags) in &grid.features {
            assert!(Feature::from_name(name).is_some());
            assert_eq!(*flags, ActionFlags::default());
        }
    }

    #[test]
    fn normalized_keeps_stored_flags_and_fills_gaps() {
        let normalized = stock_view_edit_grid().normalized();
        assert_eq!(normalized.features.len(), Feature::ALL.len());
        assert!(normalized.allows(Feature::StockManagement, Action::View));
        assert!(!normalized.allows(Feature::VendorManagement, Action::View));
    }

    #[test]
    fn unknown_features_are_reported() {
        let mut grid = FeatureGrid::empty();
        grid.features
            .insert("Time Travel".to_string(), ActionFlags::default());
        assert_eq!(grid.unknown_features(), vec!["Time Travel"]);
        assert!(stock_view_edit_grid().unknown_features().is_empty());
    }

    #[test]
    fn feature_names_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_name(feature.name()), Some(feature));
        }
        assert_eq!(Feature::from_name("stock management"), None);
    }

    #[test]
    fn grid_serializes_as_a_bare_map() {
        let json = serde_json::to_value(stock_view_edit_grid()).unwrap();
        assert_eq!(json["Stock Management"]["view"], true);
        assert_eq!(json["Stock Management"]["delete"], false);
    }
}
