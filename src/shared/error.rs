use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the catalogue monitor.
///
/// Validation variants are caller mistakes and surface as client errors;
/// the upstream variants surface as server errors. Everything else that
/// travels as a plain `anyhow::Error` is treated as an internal failure.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Malformed request input (names, cursor tokens, stream maps)
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid monitor scope '{kind}': {reason}")]
    InvalidScope { kind: String, reason: String },

    #[error("Service catalogue request failed: {operation}\nDetails: {details}")]
    CatalogueFetch { operation: String, details: String },

    #[error("Not found in service catalogue: {resource}")]
    CatalogueNotFound { resource: String },

    #[error("Stream store read failed\nDetails: {details}")]
    StreamRead { details: String },

    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: Check the config file against the documented schema")]
    ConfigError { path: PathBuf, details: String },
}

impl MonitorError {
    pub fn validation(message: impl Into<String>) -> Self {
        MonitorError::Validation {
            message: message.into(),
        }
    }

    pub fn catalogue(operation: impl Into<String>, details: impl Into<String>) -> Self {
        MonitorError::CatalogueFetch {
            operation: operation.into(),
            details: details.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        MonitorError::CatalogueNotFound {
            resource: resource.into(),
        }
    }

    /// True for errors caused by the request rather than by an upstream or the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MonitorError::Validation { .. } | MonitorError::InvalidScope { .. }
        )
    }

    /// True for failures of the catalogue or the stream store.
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            MonitorError::CatalogueFetch { .. } | MonitorError::StreamRead { .. }
        )
    }
}
