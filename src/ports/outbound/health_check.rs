use crate::shared::Result;
use async_trait::async_trait;

/// HealthCheck port for probing an upstream dependency
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Name reported in the health payload and used as the gauge label
    fn name(&self) -> &str;

    /// Probes the dependency
    ///
    /// # Returns
    /// A short status message when the dependency is healthy
    ///
    /// # Errors
    /// Any error marks the dependency as DOWN; its message is reported as-is.
    async fn check(&self) -> Result<String>;
}
