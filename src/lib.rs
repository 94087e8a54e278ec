//! catalogue-monitor - service catalogue monitoring backend
//!
//! Resolves a monitoring scope (everything, a product, a team or a service
//! area) against the service catalogue into a flat list of component
//! environments, and serves the health/info/version event streams of those
//! environments to the dashboard. Built with hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`monitoring`): scope, catalogue records, stream keys and cursors
//! - **Application Layer** (`application`): use cases and request/response DTOs
//! - **Ports** (`ports`): interfaces onto the catalogue, stream store and metrics
//! - **Adapters** (`adapters`): Strapi client, in-memory stream store, Prometheus, HTTP API
//! - **Shared** (`shared`): error types and the common `Result`
//!
//! # Example
//!
//! ```no_run
//! use catalogue_monitor::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let catalogue = Arc::new(StrapiCatalogueClient::new(
//!     "http://localhost:1337",
//!     Duration::from_secs(10),
//!     None,
//! )?);
//! let use_case = ResolveScopeUseCase::new(catalogue);
//!
//! let scope = MonitorScope::parse("team", Some("42"))?;
//! for record in use_case.execute(&scope).await? {
//!     println!("{} / {}", record.component_name, record.environment_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod monitoring;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::{build_router, AppState};
    pub use crate::adapters::outbound::metrics::PrometheusHealthMetrics;
    pub use crate::adapters::outbound::network::StrapiCatalogueClient;
    pub use crate::adapters::outbound::stream::InMemoryStreamStore;
    pub use crate::application::dto::{ComponentQueueRequest, MonitorOptions, StreamsRequest};
    pub use crate::application::use_cases::{
        CheckHealthUseCase, ListCatalogueUseCase, MonitorOptionsUseCase, PublishEventUseCase,
        ReadQueueUseCase, ResolveScopeUseCase,
    };
    pub use crate::monitoring::domain::{
        FlatEnvironmentRecord, MonitorScope, ScopeKind, StreamKey, StreamMessages, StreamQuery,
    };
    pub use crate::ports::outbound::{
        CatalogueRepository, HealthCheck, StreamPublisher, StreamStore, UpstreamHealthRecorder,
    };
    pub use crate::shared::Result;
}
