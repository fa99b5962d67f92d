//! Tavolo: access-control service for the restaurant back-office dashboard.
//!
//! Owns the per-(role, branch) permission data behind the dashboard: coarse
//! route grants, fine feature-action grids, the editors for both, and the
//! navigation/guard decisions, with deny-by-default and an admin bypass.

pub mod cache;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
