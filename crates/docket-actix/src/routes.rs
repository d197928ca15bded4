use actix_web::web;

use docket_config::UiProperties;
use utoipa::openapi::OpenApi;

use crate::handlers::{admin, metadata, ui};

/// Register the `/metadata` scope.
///
/// Handlers expect `web::Data<MetadataResources>` and `web::Data<Metrics>` on the app.
pub fn configure_metadata(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/metadata")
            .route("", web::get().to(metadata::resources))
            .route(
                "/configuration/security/sso",
                web::get().to(metadata::sso_configuration),
            )
            .route(
                "/configuration/security",
                web::get().to(metadata::oauth_security_configuration),
            )
            .route(
                "/configuration/metadata",
                web::get().to(metadata::metadata),
            ),
    );
}

pub fn configure_metrics(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(admin::system_metrics));
}

/// Register the UI entry endpoint. Nothing is registered when the UI is
/// disabled or either path is empty.
pub fn configure_ui_redirect(ui_properties: &UiProperties) -> impl FnOnce(&mut web::ServiceConfig) {
    let target = (ui_properties.enabled
        && !ui_properties.endpoint.is_empty()
        && !ui_properties.view.is_empty())
    .then(|| (ui_properties.endpoint.clone(), ui_properties.view.clone()));

    move |cfg: &mut web::ServiceConfig| {
        if let Some((endpoint, view)) = target {
            cfg.app_data(web::Data::new(ui::UiRedirect { view }))
                .route(&endpoint, web::get().to(ui::ui_redirect));
        }
    }
}

/// Serve `document` as JSON at `url`.
pub fn configure_document(
    url: String,
    document: web::Data<OpenApi>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(document)
            .route(&url, web::get().to(metadata::document));
    }
}
