use crate::monitoring::domain::{StreamMessages, StreamQuery};
use crate::shared::Result;
use async_trait::async_trait;

/// StreamStore port for reading keyed, append-only event streams
///
/// A single call reads every requested stream, so one component/environment
/// poll costs exactly one round trip regardless of how many categories it asks for.
#[async_trait]
pub trait StreamStore: Send + Sync {
    /// Reads the entries newer than each query's cursor
    ///
    /// # Returns
    /// A mapping containing every requested stream key. Streams with no
    /// newer entries, or that do not exist, map to an empty list.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable or rejects the read.
    /// No partial result is returned.
    async fn read_streams(&self, queries: &[StreamQuery]) -> Result<StreamMessages>;
}
