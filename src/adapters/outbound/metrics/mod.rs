/// Metrics adapters
mod prometheus_metrics;

pub use prometheus_metrics::PrometheusHealthMetrics;
