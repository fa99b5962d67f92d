use serde::{Deserialize, Serialize};
use tavolo_core::capability::{Action, FeatureGrid};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// The complete feature-action grid of one (role, branch).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeaturePermissionSet {
    pub role: String,
    pub branch: String,
    #[schema(value_type = Object)]
    pub permissions: FeatureGrid,
}

/// Whole-grid save. The payload replaces everything stored for the role;
/// there is no per-cell patch.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplaceFeatureGridDto {
    #[validate(length(min = 1, max = 100, message = "Role must be between 1 and 100 characters"))]
    pub role: String,
    #[schema(value_type = Object)]
    pub permissions: FeatureGrid,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GridParams {
    /// Role whose grid is being edited.
    pub role: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CapabilityCheckParams {
    /// Feature display name, e.g. "Stock Management".
    pub feature: String,
    pub action: Action,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CapabilityCheckResponse {
    pub feature: String,
    pub action: Action,
    pub allowed: bool,
}
