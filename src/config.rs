//! Configuration file support for catalogue-monitor.
//!
//! Settings come from an optional `catalogue-monitor.config.yml` (explicit
//! path or discovered in the working directory), overridden by CLI flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::application::use_cases::DEFAULT_MAX_STREAMS;
use crate::shared::error::MonitorError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "catalogue-monitor.config.yml";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub bind_address: Option<String>,
    pub catalogue: Option<CatalogueSection>,
    pub queue: Option<QueueSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CatalogueSection {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    /// Bearer token sent with every catalogue request
    pub api_token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct QueueSection {
    pub max_streams: Option<usize>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(path, &config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    let invalid = |details: String| MonitorError::ConfigError {
        path: path.to_path_buf(),
        details,
    };

    if let Some(catalogue) = &config.catalogue {
        if let Some(url) = &catalogue.url {
            validate_catalogue_url(url).map_err(|e| invalid(format!("catalogue.url: {}", e)))?;
        }
        if catalogue.timeout_seconds == Some(0) {
            return Err(invalid("catalogue.timeout_seconds must be greater than 0".into()).into());
        }
    }

    if config.queue.as_ref().and_then(|q| q.max_streams) == Some(0) {
        return Err(invalid("queue.max_streams must be greater than 0".into()).into());
    }

    Ok(())
}

fn validate_catalogue_url(url: &str) -> std::result::Result<(), String> {
    let parsed = Url::parse(url).map_err(|e| format!("'{}' is not a valid URL ({})", url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}', use http or https", other)),
    }
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored");
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub catalogue_url: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_address: SocketAddr,
    pub catalogue_url: String,
    pub catalogue_timeout: Duration,
    pub catalogue_api_token: Option<String>,
    pub max_streams: usize,
}

impl Settings {
    /// Merges the config file (if any) with CLI overrides and applies defaults
    ///
    /// # Errors
    /// Returns an error when no catalogue URL is configured, the URL is not
    /// http(s), or the bind address cannot be parsed.
    pub fn resolve(file: Option<ConfigFile>, overrides: ConfigOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();
        let catalogue = file.catalogue.unwrap_or_default();

        let bind = overrides
            .bind_address
            .or(file.bind_address)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address: SocketAddr = bind.parse().with_context(|| {
            format!(
                "Invalid bind address: {}\n\n💡 Hint: Use <ip>:<port>, e.g. 0.0.0.0:3000",
                bind
            )
        })?;

        let Some(catalogue_url) = overrides.catalogue_url.or(catalogue.url) else {
            bail!(
                "No service catalogue URL configured.\n\n\
                 💡 Hint: Pass --catalogue-url, set SERVICE_CATALOGUE_URL, or add catalogue.url to {}",
                CONFIG_FILENAME
            );
        };
        if let Err(reason) = validate_catalogue_url(&catalogue_url) {
            bail!("Invalid service catalogue URL: {}", reason);
        }

        Ok(Self {
            bind_address,
            catalogue_url,
            catalogue_timeout: Duration::from_secs(
                catalogue.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            ),
            catalogue_api_token: catalogue.api_token.filter(|token| !token.trim().is_empty()),
            max_streams: file
                .queue
                .and_then(|q| q.max_streams)
                .unwrap_or(DEFAULT_MAX_STREAMS),
        })
    }
}

/// Loads the explicit config file, or discovers one in `dir`
pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}
