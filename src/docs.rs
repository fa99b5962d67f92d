use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use tavolo_core::capability::{Action, ActionFlags};
use tavolo_core::menu::{MenuGroup, MenuLeaf};

use crate::modules::feature_permissions::model::{
    CapabilityCheckResponse, FeaturePermissionSet, ReplaceFeatureGridDto,
};
use crate::modules::guard::model::{GuardOutcome, GuardResponse};
use crate::modules::navigation::model::{AllowedRoutesResponse, NavigationResponse};
use crate::modules::roles::model::{CreateRoleDto, Role, RoleCatalogResponse};
use crate::modules::route_permissions::model::{
    RouteEditorGroup, RoutePermissionRecord, RouteToggle, UpsertRoutePermissionDto,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::route_permissions::controller::get_route_permissions,
        crate::modules::route_permissions::controller::upsert_route_permission,
        crate::modules::feature_permissions::controller::get_feature_grid,
        crate::modules::feature_permissions::controller::replace_feature_grid,
        crate::modules::feature_permissions::controller::check_capability_for_session,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::get_allowed_routes,
        crate::modules::guard::controller::check_route,
        crate::modules::roles::controller::get_role_catalog,
        crate::modules::roles::controller::create_role,
    ),
    components(
        schemas(
            Action,
            ActionFlags,
            MenuLeaf,
            MenuGroup,
            RoutePermissionRecord,
            UpsertRoutePermissionDto,
            RouteToggle,
            RouteEditorGroup,
            FeaturePermissionSet,
            ReplaceFeatureGridDto,
            CapabilityCheckResponse,
            NavigationResponse,
            AllowedRoutesResponse,
            GuardOutcome,
            GuardResponse,
            Role,
            CreateRoleDto,
            RoleCatalogResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Route permissions", description = "Coarse page-level grants and their editor"),
        (name = "Feature permissions", description = "Fine CRUD-action grants and their editor"),
        (name = "Navigation", description = "Permission-pruned sidebar menu"),
        (name = "Guard", description = "Route guard verdicts"),
        (name = "Roles", description = "Role catalog per branch")
    )
)]
pub struct ApiDoc;
