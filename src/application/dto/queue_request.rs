use crate::monitoring::domain::ResourceName;
use crate::monitoring::services::CursorToken;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// ComponentQueueRequest - Poll of the three streams of one component environment
///
/// Names are validated on construction so the derived stream keys are safe
/// to use verbatim as store lookups.
#[derive(Debug, Clone)]
pub struct ComponentQueueRequest {
    pub component_name: ResourceName,
    pub environment_name: ResourceName,
    /// Cursor mapping keyed `<h|i|v>:<environment>`
    pub cursors: HashMap<String, String>,
}

impl ComponentQueueRequest {
    pub fn new(
        component_name: ResourceName,
        environment_name: ResourceName,
        cursors: HashMap<String, String>,
    ) -> Self {
        Self {
            component_name,
            environment_name,
            cursors,
        }
    }

    /// Builds a request from raw path segments and the cursor token
    pub fn parse(component_name: &str, environment_name: &str, cursor_token: &str) -> Result<Self> {
        Ok(Self::new(
            ResourceName::new(component_name)?,
            ResourceName::new(environment_name)?,
            CursorToken::parse(cursor_token)?,
        ))
    }
}

/// StreamsRequest - Body of a batched read of arbitrary streams
///
/// Maps each stream key to the cursor to resume from. Keys and cursors are
/// validated by the use case, not during deserialisation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamsRequest {
    #[serde(default)]
    pub streams: BTreeMap<String, String>,
}

impl StreamsRequest {
    pub fn new(streams: BTreeMap<String, String>) -> Self {
        Self { streams }
    }
}
