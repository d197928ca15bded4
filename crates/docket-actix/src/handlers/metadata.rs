use actix_web::{web, HttpResponse};

use docket_core::DocketError;
use docket_observability::Metrics;
use docket_openapi::{
    MetadataResources, OAuthSecurityConfiguration, SsoSecurityConfiguration, SwaggerResource,
};
use utoipa::openapi::OpenApi;

/// SSO client configuration for the documentation UI.
#[utoipa::path(
    get,
    path = "/metadata/configuration/security/sso",
    responses(
        (status = 200, description = "SSO client configuration", body = SsoSecurityConfiguration),
        (status = 404, description = "Single sign-on disabled", body = DocketError),
    ),
    tag = "Metadata"
)]
pub async fn sso_configuration(
    resources: web::Data<MetadataResources>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse, DocketError> {
    match resources.sso.as_ref() {
        Some(sso) => {
            metrics.record_metadata_request("sso", 200);
            Ok(HttpResponse::Ok().json(sso))
        }
        None => {
            metrics.record_metadata_request("sso", 404);
            tracing::debug!("sso configuration requested while sso is disabled");
            Err(DocketError::not_found(
                "Single sign-on is not enabled for the API documentation",
            ))
        }
    }
}

/// OAuth2 client configuration for the UI's authorize dialog.
#[utoipa::path(
    get,
    path = "/metadata/configuration/security",
    responses(
        (status = 200, description = "OAuth2 client configuration", body = OAuthSecurityConfiguration),
        (status = 404, description = "OAuth2 disabled", body = DocketError),
    ),
    tag = "Metadata"
)]
pub async fn oauth_security_configuration(
    resources: web::Data<MetadataResources>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse, DocketError> {
    match resources.oauth.as_ref() {
        Some(oauth) => {
            metrics.record_metadata_request("security", 200);
            Ok(HttpResponse::Ok().json(oauth))
        }
        None => {
            metrics.record_metadata_request("security", 404);
            Err(DocketError::not_found(
                "OAuth2 is not enabled for the API documentation",
            ))
        }
    }
}

/// List of published documentation groups.
#[utoipa::path(
    get,
    path = "/metadata",
    responses(
        (status = 200, description = "Published documentation groups", body = Vec<SwaggerResource>),
    ),
    tag = "Metadata"
)]
pub async fn resources(
    resources: web::Data<MetadataResources>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse, DocketError> {
    metrics.record_metadata_request("resources", 200);
    Ok(HttpResponse::Ok().json(&resources.resources))
}

/// Free-form `swagger.metadata` entries.
#[utoipa::path(
    get,
    path = "/metadata/configuration/metadata",
    responses(
        (status = 200, description = "Settings metadata as a string map"),
    ),
    tag = "Metadata"
)]
pub async fn metadata(
    resources: web::Data<MetadataResources>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse, DocketError> {
    metrics.record_metadata_request("metadata", 200);
    Ok(HttpResponse::Ok().json(&resources.metadata))
}

/// Rendered OpenAPI document, served directly when the UI is disabled.
pub async fn document(document: web::Data<OpenApi>) -> HttpResponse {
    HttpResponse::Ok().json(document.get_ref())
}
