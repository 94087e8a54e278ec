use crate::monitoring::domain::{StreamEntryId, StreamKey};
use crate::ports::outbound::StreamPublisher;
use crate::shared::error::MonitorError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::sync::Arc;

/// PublishEventUseCase - Appends one health/info/version event to its stream
pub struct PublishEventUseCase<P: StreamPublisher + ?Sized> {
    publisher: Arc<P>,
}

impl<P: StreamPublisher + ?Sized> Clone for PublishEventUseCase<P> {
    fn clone(&self) -> Self {
        Self {
            publisher: Arc::clone(&self.publisher),
        }
    }
}

impl<P: StreamPublisher + ?Sized> PublishEventUseCase<P> {
    pub fn new(publisher: Arc<P>) -> Self {
        Self { publisher }
    }

    /// # Errors
    /// Returns a validation error for a malformed stream key or an event
    /// without fields.
    pub async fn execute(
        &self,
        stream_key: &str,
        fields: BTreeMap<String, String>,
    ) -> Result<StreamEntryId> {
        let key = StreamKey::parse(stream_key)?;
        if fields.is_empty() {
            return Err(MonitorError::validation("An event needs at least one field").into());
        }

        let id = self
            .publisher
            .append(&key, fields)
            .await
            .inspect_err(|e| tracing::error!(stream = %key, error = %e, "Event append failed"))?;
        tracing::debug!(stream = %key, id = %id, "Event appended");
        Ok(id)
    }
}
