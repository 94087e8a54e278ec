use crate::monitoring::domain::{
    StreamCursor, StreamEntryId, StreamKey, StreamMessage, StreamMessages, StreamQuery,
};
use crate::ports::outbound::{HealthCheck, StreamPublisher, StreamStore};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct StoredEntry {
    id: StreamEntryId,
    fields: BTreeMap<String, String>,
}

/// InMemoryStreamStore adapter: a keyed, append-only log held in memory
///
/// Entry ids are `<millis>-<sequence>`. Within one stream they increase
/// strictly, even when the wall clock stalls or steps backwards, because a
/// new id never goes below the last one handed out.
#[derive(Debug, Default)]
pub struct InMemoryStreamStore {
    streams: DashMap<String, Vec<StoredEntry>>,
}

impl InMemoryStreamStore {
    pub const HEALTH_CHECK_NAME: &'static str = "streamStore";

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time
    pub fn append_now(&self, key: &StreamKey, fields: BTreeMap<String, String>) -> StreamEntryId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.append_at(key, now, fields)
    }

    fn append_at(
        &self,
        key: &StreamKey,
        now_millis: u64,
        fields: BTreeMap<String, String>,
    ) -> StreamEntryId {
        let mut entries = self.streams.entry(key.to_string()).or_default();

        let id = match entries.last() {
            Some(last) if last.id.millis >= now_millis => {
                StreamEntryId::new(last.id.millis, last.id.sequence + 1)
            }
            _ if now_millis == 0 => StreamEntryId::new(0, 1),
            _ => StreamEntryId::new(now_millis, 0),
        };

        entries.push(StoredEntry { id, fields });
        id
    }

    fn read_one(&self, query: &StreamQuery) -> Result<Vec<StreamMessage>> {
        let after = match StreamCursor::parse(&query.resume_from_id)? {
            StreamCursor::Latest => return Ok(Vec::new()),
            StreamCursor::After(id) => id,
        };

        let Some(entries) = self.streams.get(&query.stream_key) else {
            return Ok(Vec::new());
        };

        // Ids are sorted, so the first newer entry starts the tail
        let start = entries.partition_point(|entry| entry.id <= after);
        Ok(entries[start..]
            .iter()
            .map(|entry| StreamMessage {
                id: entry.id.to_string(),
                message: entry.fields.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl StreamStore for InMemoryStreamStore {
    async fn read_streams(&self, queries: &[StreamQuery]) -> Result<StreamMessages> {
        queries
            .iter()
            .map(|query| -> Result<(String, Vec<StreamMessage>)> {
                Ok((query.stream_key.clone(), self.read_one(query)?))
            })
            .collect()
    }
}

#[async_trait]
impl StreamPublisher for InMemoryStreamStore {
    async fn append(
        &self,
        key: &StreamKey,
        fields: BTreeMap<String, String>,
    ) -> Result<StreamEntryId> {
        Ok(self.append_now(key, fields))
    }
}

#[async_trait]
impl HealthCheck for InMemoryStreamStore {
    fn name(&self) -> &str {
        Self::HEALTH_CHECK_NAME
    }

    async fn check(&self) -> Result<String> {
        Ok(format!("OK ({} streams)", self.streams.len()))
    }
}
