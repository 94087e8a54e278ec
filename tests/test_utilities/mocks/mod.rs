/// Mock implementations for testing
mod mock_catalogue_repository;
mod mock_stream_store;

pub use mock_catalogue_repository::{environment, product, MockCatalogueRepository};
pub use mock_stream_store::MockStreamStore;
