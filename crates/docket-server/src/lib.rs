//! Runnable assembly of the documentation server.
//!
//! Loads configuration, composes the docket from the registered plugins and
//! serves the rendered document next to the metadata endpoints.

pub mod demo;
pub mod state;

use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;

use docket_config::Config;
use docket_core::DynPlugin;
use docket_observability::Metrics;

pub use state::{configure_docs, DocsState};

/// Start the server with `application.conf` (or the environment) and the demo API.
pub async fn run() -> std::io::Result<()> {
    if let Err(e) = docket_observability::init_telemetry("api-docket") {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    let config = Config::load()
        .and_then(|config| config.validate().map(|()| config))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    tracing::info!(config = ?config.sanitized(), "configuration loaded");

    let plugins: Vec<DynPlugin> = vec![Arc::new(demo::DemoPlugin)];
    run_with(config, plugins, demo::DemoApiDoc::openapi()).await
}

/// Start the server for `source`, documented through `plugins`.
pub async fn run_with(
    config: Config,
    plugins: Vec<DynPlugin>,
    source: utoipa::openapi::OpenApi,
) -> std::io::Result<()> {
    let metrics = Metrics::new()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let state = DocsState::build(config.swagger.clone(), plugins, source, metrics);

    match state.document_url() {
        Some(url) => tracing::info!(document = %url, "API documentation published"),
        None => tracing::info!("API documentation not published"),
    }

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_docs(state.clone()))
            .configure(demo::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
