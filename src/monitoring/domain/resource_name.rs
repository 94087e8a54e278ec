use crate::shared::error::MonitorError;
use crate::shared::Result;

/// Maximum length for component and environment names
const MAX_RESOURCE_NAME_LENGTH: usize = 128;

/// NewType wrapper for a component or environment name used in stream keys.
///
/// Stream keys are `:`-separated store lookup keys, so names are restricted to
/// alphanumerics, hyphens, underscores and dots. A validated name can never
/// make a key ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(MonitorError::validation("Name cannot be empty").into());
        }

        if name.len() > MAX_RESOURCE_NAME_LENGTH {
            return Err(MonitorError::validation(format!(
                "Name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_RESOURCE_NAME_LENGTH
            ))
            .into());
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(MonitorError::validation(format!(
                "Name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed.",
                name
            ))
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
