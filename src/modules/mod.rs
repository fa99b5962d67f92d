pub mod feature_permissions;
pub mod guard;
pub mod navigation;
pub mod roles;
pub mod route_permissions;
