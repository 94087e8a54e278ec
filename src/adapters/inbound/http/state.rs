use crate::adapters::outbound::metrics::PrometheusHealthMetrics;
use crate::application::use_cases::{
    CheckHealthUseCase, ListCatalogueUseCase, MonitorOptionsUseCase, PublishEventUseCase,
    ReadQueueUseCase, ResolveScopeUseCase,
};
use crate::ports::outbound::{CatalogueRepository, HealthCheck, StreamPublisher, StreamStore};
use std::sync::Arc;

/// Shared state handed to every handler
///
/// Cloning is cheap: every field is a handle onto shared adapters.
#[derive(Clone)]
pub struct AppState {
    pub resolve_scope: ResolveScopeUseCase<dyn CatalogueRepository>,
    pub list_catalogue: ListCatalogueUseCase<dyn CatalogueRepository>,
    pub monitor_options: MonitorOptionsUseCase<dyn CatalogueRepository>,
    pub read_queue: ReadQueueUseCase<dyn StreamStore>,
    pub publish_event: PublishEventUseCase<dyn StreamPublisher>,
    pub check_health: CheckHealthUseCase,
    pub metrics: Arc<PrometheusHealthMetrics>,
}

impl AppState {
    pub fn new(
        catalogue: Arc<dyn CatalogueRepository>,
        stream_store: Arc<dyn StreamStore>,
        stream_publisher: Arc<dyn StreamPublisher>,
        health_checks: Vec<Arc<dyn HealthCheck>>,
        metrics: Arc<PrometheusHealthMetrics>,
        max_streams: usize,
    ) -> Self {
        Self {
            resolve_scope: ResolveScopeUseCase::new(Arc::clone(&catalogue)),
            list_catalogue: ListCatalogueUseCase::new(Arc::clone(&catalogue)),
            monitor_options: MonitorOptionsUseCase::new(catalogue),
            read_queue: ReadQueueUseCase::new(stream_store, max_streams),
            publish_event: PublishEventUseCase::new(stream_publisher),
            check_health: CheckHealthUseCase::new(health_checks, metrics.clone()),
            metrics,
        }
    }
}
