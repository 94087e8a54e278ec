use crate::monitoring::domain::{FlatEnvironmentRecord, MonitorScope, ScopeNode};
use crate::monitoring::services::EnvironmentFlattener;
use crate::ports::outbound::CatalogueRepository;
use crate::shared::Result;
use anyhow::Context;
use std::sync::Arc;

/// ResolveScopeUseCase - Resolves a monitor scope into flat environment records
///
/// Exactly one catalogue call is made per resolution: the scoped entity is
/// fetched with its nested relations expanded and then flattened. Catalogue
/// failures propagate with the failing operation attached; no partial result
/// is produced.
///
/// # Type Parameters
/// * `C` - CatalogueRepository implementation
pub struct ResolveScopeUseCase<C: CatalogueRepository + ?Sized> {
    catalogue: Arc<C>,
}

impl<C: CatalogueRepository + ?Sized> Clone for ResolveScopeUseCase<C> {
    fn clone(&self) -> Self {
        Self {
            catalogue: Arc::clone(&self.catalogue),
        }
    }
}

impl<C: CatalogueRepository + ?Sized> ResolveScopeUseCase<C> {
    pub fn new(catalogue: Arc<C>) -> Self {
        Self { catalogue }
    }

    /// Executes the resolution
    ///
    /// # Returns
    /// Records in catalogue order. An entity without children yields an empty list.
    pub async fn execute(&self, scope: &MonitorScope) -> Result<Vec<FlatEnvironmentRecord>> {
        tracing::info!(scope = %scope, "Resolving monitor scope");

        let node = self.fetch_scope_node(scope).await.inspect_err(|e| {
            tracing::error!(scope = %scope, error = %e, "Catalogue fetch failed");
        })?;

        let records = EnvironmentFlattener::flatten(&node);
        tracing::debug!(scope = %scope, records = records.len(), "Monitor scope resolved");
        Ok(records)
    }

    async fn fetch_scope_node(&self, scope: &MonitorScope) -> Result<ScopeNode> {
        let node = match *scope {
            MonitorScope::All => ScopeNode::Products(
                self.catalogue
                    .get_products(None, true)
                    .await
                    .context("Failed to fetch all products")?,
            ),
            MonitorScope::Product(id) => ScopeNode::Product(
                self.catalogue
                    .get_product(id, true)
                    .await
                    .with_context(|| format!("Failed to fetch product {}", id))?,
            ),
            MonitorScope::Team(id) => ScopeNode::Team(
                self.catalogue
                    .get_team(id, true)
                    .await
                    .with_context(|| format!("Failed to fetch team {}", id))?,
            ),
            MonitorScope::ServiceArea(id) => ScopeNode::ServiceArea(
                self.catalogue
                    .get_service_area(id, true)
                    .await
                    .with_context(|| format!("Failed to fetch service area {}", id))?,
            ),
        };
        Ok(node)
    }
}
