use crate::monitoring::domain::{StreamEntryId, StreamKey};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// StreamPublisher port for appending events to a stream
///
/// Used by health pollers pushing health, info and version events. Entry ids
/// are assigned by the store and increase monotonically per stream.
#[async_trait]
pub trait StreamPublisher: Send + Sync {
    async fn append(&self, key: &StreamKey, fields: BTreeMap<String, String>)
        -> Result<StreamEntryId>;
}
