#![allow(dead_code)]

use docket_config::SwaggerProperties;
use docket_core::DynPlugin;
use docket_observability::Metrics;
use docket_server::DocsState;
use utoipa::openapi::path::{HttpMethod, OperationBuilder, PathItem};
use utoipa::openapi::{Info, OpenApi, OpenApiBuilder, PathsBuilder};

pub const TEST_CLIENT: &str = "test-client";
pub const TEST_SECRET: &str = "test-secret";
pub const TEST_BASE_URL: &str = "http://localhost:9103/idm";
pub const TEST_AUTH_PATH: &str = "/v2/authorize";
pub const TEST_TOKEN_PATH: &str = "/v2/token";
pub const TEST_AUTH_URL: &str = "http://localhost:9103/idm/v2/authorize";
pub const TEST_TOKEN_URL: &str = "http://localhost:9103/idm/v2/token";

/// Properties with SSO pointing at the test identity provider.
pub fn sso_properties() -> SwaggerProperties {
    let mut properties = SwaggerProperties::default();
    let sso = &mut properties.security.sso;
    sso.enabled = true;
    sso.client_id = TEST_CLIENT.to_string();
    sso.client_secret = TEST_SECRET.to_string();
    sso.base_url = TEST_BASE_URL.to_string();
    sso.authorize_path = TEST_AUTH_PATH.to_string();
    sso.token_path = TEST_TOKEN_PATH.to_string();
    properties
}

/// `sso_properties` plus OAuth2 against the same provider.
pub fn oauth2_properties() -> SwaggerProperties {
    let mut properties = sso_properties();
    let oauth2 = &mut properties.security.oauth2;
    oauth2.enabled = true;
    oauth2.client_id = TEST_CLIENT.to_string();
    oauth2.client_secret = TEST_SECRET.to_string();
    oauth2.base_url = TEST_BASE_URL.to_string();
    oauth2.authorize_path = TEST_AUTH_PATH.to_string();
    oauth2.token_path = TEST_TOKEN_PATH.to_string();
    properties
}

fn operation(id: &str) -> PathItem {
    PathItem::new(
        HttpMethod::Get,
        OperationBuilder::new().operation_id(Some(id)).build(),
    )
}

/// Generated document of an application exposing two API versions plus an
/// undocumented route.
pub fn test_source() -> OpenApi {
    let paths = PathsBuilder::new()
        .path("/test/v1/do", operation("v1_do"))
        .path("/test/v2/{action}", operation("v2_action"))
        .path("/other", operation("other"))
        .build();

    OpenApiBuilder::new()
        .info(Info::new("generated", "0.0.0"))
        .paths(paths)
        .build()
}

pub fn build_state(properties: SwaggerProperties, plugins: Vec<DynPlugin>) -> DocsState {
    DocsState::build(
        properties,
        plugins,
        test_source(),
        Metrics::new().expect("metrics"),
    )
}
