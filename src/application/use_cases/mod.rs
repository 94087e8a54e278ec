/// Use cases module containing application business logic orchestration
mod check_health;
mod list_catalogue;
mod monitor_options;
mod publish_event;
mod read_queue;
mod resolve_scope;

#[cfg(test)]
mod tests;

pub use check_health::CheckHealthUseCase;
pub use list_catalogue::ListCatalogueUseCase;
pub use monitor_options::MonitorOptionsUseCase;
pub use publish_event::PublishEventUseCase;
pub use read_queue::{ReadQueueUseCase, DEFAULT_MAX_STREAMS};
pub use resolve_scope::ResolveScopeUseCase;
