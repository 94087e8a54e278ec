use async_trait::async_trait;
use catalogue_monitor::monitoring::domain::StreamMessage;
use catalogue_monitor::prelude::*;
use catalogue_monitor::shared::error::MonitorError;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// Mock StreamStore for testing
///
/// Returns canned messages per stream key (empty for unknown keys) and
/// keeps every batch of queries it receives.
#[derive(Default)]
pub struct MockStreamStore {
    pub messages: HashMap<String, Vec<StreamMessage>>,
    pub should_fail: bool,
    batches: Mutex<Vec<Vec<StreamQuery>>>,
}

impl MockStreamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, stream_key: &str, id: &str, status: &str) -> Self {
        self.messages
            .entry(stream_key.to_string())
            .or_default()
            .push(StreamMessage {
                id: id.to_string(),
                message: BTreeMap::from([("status".to_string(), status.to_string())]),
            });
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn batches(&self) -> Vec<Vec<StreamQuery>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl StreamStore for MockStreamStore {
    async fn read_streams(&self, queries: &[StreamQuery]) -> Result<StreamMessages> {
        self.batches.lock().unwrap().push(queries.to_vec());
        if self.should_fail {
            return Err(MonitorError::StreamRead {
                details: "connection refused".to_string(),
            }
            .into());
        }

        Ok(queries
            .iter()
            .map(|query| {
                let messages = self
                    .messages
                    .get(&query.stream_key)
                    .cloned()
                    .unwrap_or_default();
                (query.stream_key.clone(), messages)
            })
            .collect())
    }
}
