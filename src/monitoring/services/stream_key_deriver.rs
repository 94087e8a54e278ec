use crate::monitoring::domain::{StreamCategory, StreamQuery, FROM_BEGINNING};
use std::collections::HashMap;

/// StreamKeyDeriver service for building the per-environment stream queries
///
/// For a component/environment pair it produces exactly one query per
/// category, in the order health, info, version. Each query resumes from the
/// cursor stored under `<prefix>:<environment>`; a missing cursor means the
/// poller has never read the stream and starts from the beginning.
///
/// Names are not sanitised here. Callers pass names that were already
/// validated, because the derived keys are used verbatim as store lookups.
pub struct StreamKeyDeriver;

impl StreamKeyDeriver {
    pub fn derive_queries(
        component_name: &str,
        environment_name: &str,
        cursors: &HashMap<String, String>,
    ) -> [StreamQuery; 3] {
        StreamCategory::ALL.map(|category| {
            let resume_from_id = cursors
                .get(&category.cursor_key(environment_name))
                .cloned()
                .unwrap_or_else(|| FROM_BEGINNING.to_string());

            StreamQuery::new(
                category.stream_key(component_name, environment_name),
                resume_from_id,
            )
        })
    }
}
