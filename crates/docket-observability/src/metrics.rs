use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts, Registry};

/// Prometheus metrics for documentation composition and the metadata endpoints.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,
    pub composition_passes: IntCounter,
    pub plugins_registered: IntGauge,
    pub metadata_requests: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let composition_passes = IntCounter::new(
            "docket_composition_passes_total",
            "Number of docket composition passes run",
        )?;
        let plugins_registered = IntGauge::new(
            "docket_plugins_registered",
            "Number of docket plugins in the last composition pass",
        )?;
        let metadata_requests = IntCounterVec::new(
            Opts::new(
                "docket_metadata_requests_total",
                "Metadata endpoint requests by endpoint and status",
            ),
            &["endpoint", "status"],
        )?;

        registry.register(Box::new(composition_passes.clone()))?;
        registry.register(Box::new(plugins_registered.clone()))?;
        registry.register(Box::new(metadata_requests.clone()))?;

        Ok(Self {
            registry,
            composition_passes,
            plugins_registered,
            metadata_requests,
        })
    }

    pub fn record_composition(&self, plugin_count: usize) {
        self.composition_passes.inc();
        self.plugins_registered
            .set(i64::try_from(plugin_count).unwrap_or(i64::MAX));
    }

    pub fn record_metadata_request(&self, endpoint: &str, status: u16) {
        let status = status.to_string();
        self.metadata_requests
            .with_label_values(&[endpoint, status.as_str()])
            .inc();
    }
}
