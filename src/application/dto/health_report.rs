use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Outcome of a single dependency check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentHealth {
    pub status: String,
}

/// HealthReport - Aggregated result of every dependency check
///
/// `status` is UP only when every check succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub components: BTreeMap<String, ComponentHealth>,
}

impl HealthReport {
    pub fn is_up(&self) -> bool {
        self.status == HealthStatus::Up
    }
}
