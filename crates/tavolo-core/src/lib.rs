//! # Tavolo Core
//!
//! Pure access-control decision logic for the Tavolo back-office API.
//!
//! This crate has no I/O. It owns the three decisions every other part of the
//! system defers to:
//!
//! - [`capability`]: the closed feature/action catalog and `can_perform`
//! - [`menu`]: the static menu tree and permission-based pruning
//! - [`guard`]: the route-guard decision table
//!
//! # Example
//!
//! ```ignore
//! use tavolo_core::capability::{can_perform, Action, Feature, FeatureGrid};
//!
//! let grid = FeatureGrid::empty();
//! assert!(can_perform("admin", &grid, Feature::StockManagement, Action::Delete));
//! assert!(!can_perform("manager", &grid, Feature::StockManagement, Action::View));
//! ```

pub mod capability;
pub mod guard;
pub mod menu;

// Re-export commonly used types at crate root
pub use capability::{Action, ActionFlags, Feature, FeatureGrid, can_perform};
pub use guard::{GuardDecision, RouteState, SessionState, decide};
pub use menu::{DASHBOARD_HOME, LOGIN_PATH, MenuGroup, MenuLeaf, filter_menu, is_admin_role, menu_tree};
