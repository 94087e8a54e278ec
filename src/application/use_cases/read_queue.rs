use crate::application::dto::{ComponentQueueRequest, StreamsRequest};
use crate::monitoring::domain::{StreamCursor, StreamKey, StreamMessages, StreamQuery};
use crate::monitoring::services::StreamKeyDeriver;
use crate::ports::outbound::StreamStore;
use crate::shared::error::MonitorError;
use crate::shared::Result;
use anyhow::Context;
use std::sync::Arc;

/// Default upper bound on streams read by one batched call
pub const DEFAULT_MAX_STREAMS: usize = 64;

/// ReadQueueUseCase - Batched reads of health/info/version streams
///
/// Every request maps to exactly one `read_streams` call on the store.
pub struct ReadQueueUseCase<S: StreamStore + ?Sized> {
    stream_store: Arc<S>,
    max_streams: usize,
}

impl<S: StreamStore + ?Sized> Clone for ReadQueueUseCase<S> {
    fn clone(&self) -> Self {
        Self {
            stream_store: Arc::clone(&self.stream_store),
            max_streams: self.max_streams,
        }
    }
}

impl<S: StreamStore + ?Sized> ReadQueueUseCase<S> {
    pub fn new(stream_store: Arc<S>, max_streams: usize) -> Self {
        Self {
            stream_store,
            max_streams,
        }
    }

    /// Reads the three streams of one component environment
    pub async fn read_component_queue(
        &self,
        request: ComponentQueueRequest,
    ) -> Result<StreamMessages> {
        let queries = StreamKeyDeriver::derive_queries(
            request.component_name.as_str(),
            request.environment_name.as_str(),
            &request.cursors,
        );

        tracing::info!(
            component = %request.component_name,
            environment = %request.environment_name,
            "Queue read for component environment"
        );

        self.read(&queries).await
    }

    /// Reads an arbitrary set of streams, each from its own cursor
    ///
    /// # Errors
    /// Returns a validation error if the mapping is empty, exceeds the
    /// configured limit, or contains a malformed key or cursor.
    pub async fn read_streams(&self, request: StreamsRequest) -> Result<StreamMessages> {
        let queries = self.validate_streams(request)?;
        tracing::info!(streams = queries.len(), "Queue read for stream set");
        self.read(&queries).await
    }

    fn validate_streams(&self, request: StreamsRequest) -> Result<Vec<StreamQuery>> {
        if request.streams.is_empty() {
            return Err(MonitorError::validation("At least one stream must be requested").into());
        }
        if request.streams.len() > self.max_streams {
            return Err(MonitorError::validation(format!(
                "Too many streams requested ({}). Maximum allowed: {}",
                request.streams.len(),
                self.max_streams
            ))
            .into());
        }

        request
            .streams
            .into_iter()
            .map(|(key, cursor)| -> Result<StreamQuery> {
                let key = StreamKey::parse(&key)?;
                StreamCursor::parse(&cursor)?;
                Ok(StreamQuery::new(key.to_string(), cursor))
            })
            .collect()
    }

    async fn read(&self, queries: &[StreamQuery]) -> Result<StreamMessages> {
        self.stream_store
            .read_streams(queries)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Stream store read failed"))
            .with_context(|| format!("Failed to read {} stream(s)", queries.len()))
    }
}
