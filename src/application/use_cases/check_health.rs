use crate::application::dto::{ComponentHealth, HealthReport, HealthStatus};
use crate::ports::outbound::{HealthCheck, UpstreamHealthRecorder};
use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

/// CheckHealthUseCase - Probes every upstream dependency concurrently
///
/// Each result is published to the health recorder (1 healthy, 0 not) and
/// collected into a report that is UP only when every check is UP.
#[derive(Clone)]
pub struct CheckHealthUseCase {
    checks: Vec<Arc<dyn HealthCheck>>,
    recorder: Arc<dyn UpstreamHealthRecorder>,
}

impl CheckHealthUseCase {
    pub fn new(checks: Vec<Arc<dyn HealthCheck>>, recorder: Arc<dyn UpstreamHealthRecorder>) -> Self {
        Self { checks, recorder }
    }

    pub async fn execute(&self) -> HealthReport {
        let results = join_all(self.checks.iter().map(|check| async move {
            let outcome = check.check().await;
            (check.name().to_string(), outcome)
        }))
        .await;

        let mut status = HealthStatus::Up;
        let mut components = BTreeMap::new();

        for (name, outcome) in results {
            let healthy = outcome.is_ok();
            self.recorder.record(&name, healthy);

            let message = match outcome {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!(service = %name, error = %e, "Health check failed");
                    status = HealthStatus::Down;
                    e.to_string()
                }
            };
            components.insert(name, ComponentHealth { status: message });
        }

        HealthReport { status, components }
    }
}
