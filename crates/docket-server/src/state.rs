use actix_web::web;
use utoipa::openapi::OpenApi;
use utoipa::OpenApi as _;
use utoipa_swagger_ui::SwaggerUi;

use docket_actix::{MetadataApiDoc, METADATA_DOCUMENT_URL};
use docket_config::SwaggerProperties;
use docket_core::{Docket, DynPlugin};
use docket_observability::Metrics;
use docket_openapi::{document_url, render, DocketComposer, MetadataResources};

/// Everything composed at startup and shared by all workers.
#[derive(Clone)]
pub struct DocsState {
    pub properties: SwaggerProperties,
    pub docket: Option<web::Data<Docket>>,
    pub document: Option<web::Data<OpenApi>>,
    pub resources: web::Data<MetadataResources>,
    pub metrics: web::Data<Metrics>,
}

impl DocsState {
    /// Run one composition pass and project it onto `source`.
    pub fn build(
        properties: SwaggerProperties,
        plugins: Vec<DynPlugin>,
        source: OpenApi,
        metrics: Metrics,
    ) -> Self {
        let composer = DocketComposer::new(properties, plugins);
        let docket = composer.compose();
        metrics.record_composition(composer.plugin_count());

        let docket = docket.filter(|d| {
            if !d.is_enabled() {
                tracing::info!(group = d.group_name(), "docket disabled by plugin");
            }
            d.is_enabled()
        });
        let document = docket.as_ref().map(|d| render(d, source));
        let resources = MetadataResources::from_properties(composer.properties(), docket.as_ref());

        Self {
            properties: composer.properties().clone(),
            docket: docket.map(web::Data::new),
            document: document.map(web::Data::new),
            resources: web::Data::new(resources),
            metrics: web::Data::new(metrics),
        }
    }

    /// URL the document is published at, if one was composed.
    pub fn document_url(&self) -> Option<String> {
        self.docket.as_ref().map(|d| document_url(d.group_name()))
    }
}

/// Register the documentation surface: metadata endpoints and UI redirect
/// (UI enabled only), metrics, and the document (through Swagger UI when the
/// UI is mounted).
pub fn configure_docs(state: DocsState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state.resources.clone())
            .app_data(state.metrics.clone());

        let ui = &state.properties.ui;
        if ui.enabled {
            docket_actix::configure_metadata(cfg);
        }
        docket_actix::configure_metrics(cfg);

        if let (Some(url), Some(document)) = (state.document_url(), state.document.clone()) {
            match swagger_ui_route(&ui.view).filter(|_| ui.enabled) {
                Some(route) => {
                    cfg.service(
                        SwaggerUi::new(route)
                            .url(url, document.get_ref().clone())
                            .url(METADATA_DOCUMENT_URL, MetadataApiDoc::openapi()),
                    );
                }
                None => docket_actix::configure_document(url, document)(cfg),
            }
        }

        docket_actix::configure_ui_redirect(ui)(cfg);
    }
}

/// Swagger UI route under `view`; `None` when `view` names no path below the root.
fn swagger_ui_route(view: &str) -> Option<String> {
    let prefix = view.trim_end_matches('/');
    if prefix.is_empty() {
        return None;
    }
    Some(format!("{}/{{_:.*}}", prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_core::{DocketPlugin, Ordered};
    use std::sync::Arc;
    use utoipa::openapi::{Info, OpenApiBuilder};

    struct Disabling;

    impl Ordered for Disabling {}

    impl DocketPlugin for Disabling {
        fn configure(&self, docket: Docket) -> Docket {
            docket.with_enabled(false)
        }
    }

    fn source() -> OpenApi {
        OpenApiBuilder::new()
            .info(Info::new("source", "0"))
            .build()
    }

    #[test]
    fn swagger_ui_route_from_view() {
        assert_eq!(swagger_ui_route("/swagger-ui/").as_deref(), Some("/swagger-ui/{_:.*}"));
        assert_eq!(swagger_ui_route("/docs").as_deref(), Some("/docs/{_:.*}"));
        assert_eq!(swagger_ui_route(""), None);
        assert_eq!(swagger_ui_route("/"), None);
    }

    #[test]
    fn build_publishes_default_group() {
        let state = DocsState::build(
            SwaggerProperties::default(),
            Vec::new(),
            source(),
            Metrics::new().unwrap(),
        );

        assert_eq!(state.document_url().as_deref(), Some("/api-docs/default-api/openapi.json"));
        assert_eq!(state.document.as_ref().unwrap().info.title, "Default API");
        assert_eq!(state.resources.resources.len(), 1);
        assert_eq!(state.metrics.composition_passes.get(), 1);
    }

    #[test]
    fn plugin_can_disable_the_docket() {
        let plugins: Vec<DynPlugin> = vec![Arc::new(Disabling)];
        let state = DocsState::build(
            SwaggerProperties::default(),
            plugins,
            source(),
            Metrics::new().unwrap(),
        );

        assert!(state.docket.is_none());
        assert!(state.document.is_none());
        assert!(state.resources.resources.is_empty());
        assert_eq!(state.metrics.plugins_registered.get(), 1);
    }
}
