use crate::monitoring::domain::{ResourceName, StreamCategory, StreamCursor};
use crate::shared::error::MonitorError;
use crate::shared::Result;
use std::collections::HashMap;
use url::form_urlencoded;

/// CursorToken service for parsing the query-string shaped cursor segment
///
/// The dashboard appends `h:<env>=<id>&i:<env>=<id>&v:<env>=<id>` to the
/// component queue path. Keys must carry a known category prefix and a valid
/// environment name, values must be valid stream cursors. A repeated key keeps
/// its last value.
pub struct CursorToken;

impl CursorToken {
    pub fn parse(token: &str) -> Result<HashMap<String, String>> {
        let token = token.strip_prefix('?').unwrap_or(token);
        let mut cursors = HashMap::new();

        for (key, value) in form_urlencoded::parse(token.as_bytes()) {
            Self::validate_key(&key)?;
            StreamCursor::parse(&value).map_err(|e| {
                MonitorError::validation(format!("Invalid cursor for '{}': {}", key, e))
            })?;
            cursors.insert(key.into_owned(), value.into_owned());
        }

        Ok(cursors)
    }

    fn validate_key(key: &str) -> Result<()> {
        let Some((prefix, environment)) = key.split_once(':') else {
            return Err(MonitorError::validation(format!(
                "Cursor key '{}' must have the form <h|i|v>:<environment>",
                key
            ))
            .into());
        };

        if StreamCategory::from_cursor_prefix(prefix).is_none() {
            return Err(MonitorError::validation(format!(
                "Cursor key '{}' has unknown category prefix '{}'",
                key, prefix
            ))
            .into());
        }

        ResourceName::new(environment)?;
        Ok(())
    }
}
