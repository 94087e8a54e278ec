/// Data Transfer Objects for application layer
///
/// DTOs carry request input into the use cases and response shapes back to
/// the HTTP adapter, keeping the domain layer isolated.
mod health_report;
mod monitor_options;
mod queue_request;

pub use health_report::{ComponentHealth, HealthReport, HealthStatus};
pub use monitor_options::{MonitorOptions, SelectOption};
pub use queue_request::{ComponentQueueRequest, StreamsRequest};
