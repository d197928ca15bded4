use actix_web::{web, HttpResponse};

use docket_core::DocketError;
use docket_observability::{encode_prometheus_text, Metrics, PROMETHEUS_CONTENT_TYPE};

/// Composition and metadata-request counters for scraping.
pub async fn system_metrics(metrics: web::Data<Metrics>) -> Result<HttpResponse, DocketError> {
    let body = encode_prometheus_text(&metrics.registry).map_err(|e| {
        tracing::error!(error = %e, "failed to encode metrics");
        DocketError::new("metrics_unavailable", Some(&e.to_string()))
    })?;

    Ok(HttpResponse::Ok()
        .content_type(PROMETHEUS_CONTENT_TYPE)
        .body(body))
}
