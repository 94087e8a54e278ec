/// Domain model of the monitor: catalogue records, scopes and event streams
pub mod catalogue;
pub mod environment_record;
pub mod resource_name;
pub mod scope;
pub mod stream;

pub use catalogue::{
    CatalogueCollection, CatalogueEntry, Component, Environment, Product, ScopeNode, ServiceArea,
    Team,
};
pub use environment_record::FlatEnvironmentRecord;
pub use resource_name::ResourceName;
pub use scope::{MonitorScope, ScopeId, ScopeKind};
pub use stream::{
    StreamCategory, StreamCursor, StreamEntryId, StreamKey, StreamMessage, StreamMessages,
    StreamQuery, FROM_BEGINNING, LATEST,
};
