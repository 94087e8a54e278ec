use super::catalogue::{Component, Environment};
use serde::Serialize;

/// One component/environment pair of a resolved monitor scope.
///
/// Request-scoped output of scope resolution, serialised as-is to the
/// dashboard. It has no identity beyond the response it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatEnvironmentRecord {
    pub component_id: u64,
    pub component_name: String,
    pub environment_id: u64,
    pub environment_name: String,
    pub environment_url: String,
    pub environment_health_path: String,
}

impl FlatEnvironmentRecord {
    pub fn new(component: &Component, environment: &Environment) -> Self {
        Self {
            component_id: component.id,
            component_name: component.name.clone(),
            environment_id: environment.id,
            environment_name: environment.name.clone(),
            environment_url: environment.url.clone(),
            environment_health_path: environment.health_path.clone(),
        }
    }
}
