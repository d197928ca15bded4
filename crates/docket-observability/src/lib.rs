pub mod metrics;
pub mod telemetry;

pub use metrics::Metrics;
pub use telemetry::init_telemetry;

/// Render every docket metric in `registry` as Prometheus text.
pub fn encode_prometheus_text(
    registry: &prometheus::Registry,
) -> Result<Vec<u8>, prometheus::Error> {
    use prometheus::Encoder;

    let mut buffer = Vec::new();
    prometheus::TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(buffer)
}

/// Content type of [`encode_prometheus_text`] output.
pub const PROMETHEUS_CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;
