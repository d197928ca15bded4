use utoipa::OpenApi;

use crate::handlers::metadata;

/// OpenAPI document of the metadata endpoints themselves.
#[derive(OpenApi)]
#[openapi(
    paths(
        metadata::sso_configuration,
        metadata::oauth_security_configuration,
        metadata::resources,
        metadata::metadata,
    ),
    components(
        schemas(
            docket_core::DocketError,
            docket_openapi::SsoSecurityConfiguration,
            docket_openapi::OAuthSecurityConfiguration,
            docket_openapi::SwaggerResource,
        )
    ),
    tags(
        (name = "Metadata", description = "Configuration the documentation UI reads at startup"),
    ),
    info(
        title = "API Documentation Metadata",
        version = "0.1.0",
        license(
            name = "MIT OR Apache-2.0"
        )
    )
)]
pub struct MetadataApiDoc;

/// URL the metadata document is served at.
pub const METADATA_DOCUMENT_URL: &str = "/api-docs/metadata/openapi.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_metadata_route() {
        let doc = MetadataApiDoc::openapi();
        for path in [
            "/metadata",
            "/metadata/configuration/security",
            "/metadata/configuration/security/sso",
            "/metadata/configuration/metadata",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }

        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("SsoSecurityConfiguration"));
        assert!(schemas.contains_key("DocketError"));
    }
}
