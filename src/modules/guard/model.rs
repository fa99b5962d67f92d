use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GuardParams {
    /// The dashboard path the client wants to render.
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GuardOutcome {
    Render,
    Redirect,
}

/// Guard verdict for one requested path.
#[derive(Debug, Serialize, ToSchema)]
pub struct GuardResponse {
    pub decision: GuardOutcome,
    /// Redirect target when the decision is `redirect`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// The attempted path, echoed on login redirects so the client can come
    /// back after authenticating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}
