use crate::ports::outbound::UpstreamHealthRecorder;
use crate::shared::Result;
use prometheus::{IntGaugeVec, Opts, Registry, TextEncoder};

/// PrometheusHealthMetrics adapter owning the process metrics registry
///
/// Built once at startup and shared by handle. The registry is private to
/// the handle; nothing is registered in the global default registry.
pub struct PrometheusHealthMetrics {
    registry: Registry,
    upstream_health: IntGaugeVec,
}

impl PrometheusHealthMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let upstream_health = IntGaugeVec::new(
            Opts::new(
                "upstream_healthcheck",
                "health of an upstream dependency - 1 = healthy, 0 = not healthy",
            ),
            &["service"],
        )?;
        registry.register(Box::new(upstream_health.clone()))?;

        Ok(Self {
            registry,
            upstream_health,
        })
    }

    /// Renders every registered metric in the Prometheus text exposition format
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        Ok(encoder.encode_to_string(&self.registry.gather())?)
    }
}

impl UpstreamHealthRecorder for PrometheusHealthMetrics {
    fn record(&self, service: &str, healthy: bool) {
        self.upstream_health
            .with_label_values(&[service])
            .set(i64::from(healthy));
    }
}
