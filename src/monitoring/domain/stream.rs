use super::resource_name::ResourceName;
use crate::shared::error::MonitorError;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Cursor meaning "read the stream from its first entry"
pub const FROM_BEGINNING: &str = "0";

/// Cursor meaning "only entries appended after this read"
pub const LATEST: &str = "$";

/// Messages returned by a batched read, keyed by stream key
pub type StreamMessages = BTreeMap<String, Vec<StreamMessage>>;

/// Event category polled for every component/environment pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamCategory {
    Health,
    Info,
    Version,
}

impl StreamCategory {
    /// All categories in query order
    pub const ALL: [StreamCategory; 3] = [
        StreamCategory::Health,
        StreamCategory::Info,
        StreamCategory::Version,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamCategory::Health => "health",
            StreamCategory::Info => "info",
            StreamCategory::Version => "version",
        }
    }

    /// Single-letter prefix used for cursor keys (`h:<env>`, `i:<env>`, `v:<env>`)
    pub fn cursor_prefix(&self) -> &'static str {
        match self {
            StreamCategory::Health => "h",
            StreamCategory::Info => "i",
            StreamCategory::Version => "v",
        }
    }

    pub fn from_cursor_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.cursor_prefix() == prefix)
    }

    pub fn stream_key(&self, component_name: &str, environment_name: &str) -> String {
        format!("{}:{}:{}", self.as_str(), component_name, environment_name)
    }

    pub fn cursor_key(&self, environment_name: &str) -> String {
        format!("{}:{}", self.cursor_prefix(), environment_name)
    }
}

impl FromStr for StreamCategory {
    type Err = MonitorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| MonitorError::validation(format!("Unknown stream category '{}'", s)))
    }
}

/// Position of an entry inside one stream: `<millis>-<sequence>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StreamEntryId {
    pub millis: u64,
    pub sequence: u64,
}

impl StreamEntryId {
    pub const ZERO: StreamEntryId = StreamEntryId {
        millis: 0,
        sequence: 0,
    };

    pub fn new(millis: u64, sequence: u64) -> Self {
        Self { millis, sequence }
    }
}

impl fmt::Display for StreamEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.millis, self.sequence)
    }
}

impl FromStr for StreamEntryId {
    type Err = MonitorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || MonitorError::validation(format!("Malformed stream entry id '{}'", s));
        let (millis, sequence) = match s.split_once('-') {
            Some((millis, sequence)) => (millis, Some(sequence)),
            None => (s, None),
        };

        let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_number(millis) || !sequence.map(is_number).unwrap_or(true) {
            return Err(invalid());
        }

        let millis = millis.parse::<u64>().map_err(|_| invalid())?;
        let sequence = match sequence {
            Some(sequence) => sequence.parse::<u64>().map_err(|_| invalid())?,
            None => 0,
        };
        Ok(Self { millis, sequence })
    }
}

/// Validated resume position of a stream read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamCursor {
    /// Everything after the given entry; `"0"` parses to `After(ZERO)`
    After(StreamEntryId),
    /// Nothing that exists at read time
    Latest,
}

impl StreamCursor {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw == LATEST {
            return Ok(StreamCursor::Latest);
        }
        Ok(StreamCursor::After(raw.parse::<StreamEntryId>()?))
    }
}

/// Validated stream key: `<category>:<componentName>:<environmentName>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreamKey {
    category: StreamCategory,
    component: ResourceName,
    environment: ResourceName,
}

impl StreamKey {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.splitn(3, ':');
        let (Some(category), Some(component), Some(environment)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(MonitorError::validation(format!(
                "Stream key '{}' must have the form <category>:<component>:<environment>",
                raw
            ))
            .into());
        };

        Ok(Self {
            category: category.parse()?,
            component: ResourceName::new(component)?,
            environment: ResourceName::new(environment)?,
        })
    }

    pub fn category(&self) -> StreamCategory {
        self.category
    }
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            &self
                .category
                .stream_key(self.component.as_str(), self.environment.as_str()),
        )
    }
}

/// One stream to read and where to resume it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamQuery {
    pub stream_key: String,
    pub resume_from_id: String,
}

impl StreamQuery {
    pub fn new(stream_key: impl Into<String>, resume_from_id: impl Into<String>) -> Self {
        Self {
            stream_key: stream_key.into(),
            resume_from_id: resume_from_id.into(),
        }
    }
}

/// A single stream entry as returned to the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamMessage {
    pub id: String,
    pub message: BTreeMap<String, String>,
}
