use crate::monitoring::domain::{FlatEnvironmentRecord, Product, ScopeNode};

/// EnvironmentFlattener service for normalising a catalogue subgraph
///
/// Pure domain logic: walks Product -> Component -> Environment and emits one
/// record per environment, in catalogue order. Components without environments
/// and products without components contribute nothing.
pub struct EnvironmentFlattener;

impl EnvironmentFlattener {
    /// Flattens whatever scope node was fetched into environment records
    pub fn flatten(node: &ScopeNode) -> Vec<FlatEnvironmentRecord> {
        Self::flatten_products(node.products())
    }

    /// Flattens a list of products, preserving the order given
    pub fn flatten_products(products: &[Product]) -> Vec<FlatEnvironmentRecord> {
        products
            .iter()
            .flat_map(|product| product.components.iter())
            .flat_map(|component| {
                component
                    .environments
                    .iter()
                    .map(move |environment| FlatEnvironmentRecord::new(component, environment))
            })
            .collect()
    }
}
