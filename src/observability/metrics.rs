use prometheus::{Encoder, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub proxied_requests_total: IntCounterVec,
    pub upstream_latency_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let proxied_requests_total = IntCounterVec::new(
            Opts::new(
                "proxied_requests_total",
                "Requests forwarded to the upstream backend by route and outcome",
            ),
            &["route", "outcome"],
        )
        .expect("valid proxied_requests_total metric");

        let upstream_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "upstream_latency_seconds",
                "Latency of forwarded upstream calls in seconds",
            ),
            &["route"],
        )
        .expect("valid upstream_latency_seconds metric");

        registry
            .register(Box::new(proxied_requests_total.clone()))
            .expect("register proxied_requests_total");
        registry
            .register(Box::new(upstream_latency_seconds.clone()))
            .expect("register upstream_latency_seconds");

        Self {
            registry,
            proxied_requests_total,
            upstream_latency_seconds,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
