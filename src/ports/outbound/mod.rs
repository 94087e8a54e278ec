/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (service catalogue, stream store, metrics).
pub mod catalogue_repository;
pub mod health_check;
pub mod health_recorder;
pub mod stream_publisher;
pub mod stream_store;

pub use catalogue_repository::CatalogueRepository;
pub use health_check::HealthCheck;
pub use health_recorder::UpstreamHealthRecorder;
pub use stream_publisher::StreamPublisher;
pub use stream_store::StreamStore;
