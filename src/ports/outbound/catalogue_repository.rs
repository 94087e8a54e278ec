use crate::monitoring::domain::{CatalogueEntry, Product, ScopeId, ServiceArea, Team};
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogueRepository port for reading the service catalogue
///
/// This port abstracts the upstream catalogue API. Implementations return
/// fully typed records; nested relations that were not expanded, or that the
/// catalogue omitted, are returned as empty vectors.
///
/// # Async Support
/// All methods are async. Implementations must be `Send + Sync` so a single
/// instance can be shared by every request handler.
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Fetches products, optionally restricted to `ids`
    ///
    /// # Arguments
    /// * `ids` - Product ids to fetch, or `None` for every product
    /// * `expand_environments` - Expand each product's components and their
    ///   environments in the same call
    async fn get_products(
        &self,
        ids: Option<&[u64]>,
        expand_environments: bool,
    ) -> Result<Vec<Product>>;

    /// Fetches one product, optionally with components and environments expanded
    async fn get_product(&self, id: ScopeId, expand_environments: bool) -> Result<Product>;

    /// Fetches one team, optionally with its products expanded down to environments
    async fn get_team(&self, id: ScopeId, expand_products: bool) -> Result<Team>;

    /// Fetches one service area, optionally with its products expanded down to environments
    async fn get_service_area(&self, id: ScopeId, expand_products: bool) -> Result<ServiceArea>;

    async fn get_components(&self) -> Result<Vec<CatalogueEntry>>;

    async fn get_teams(&self) -> Result<Vec<CatalogueEntry>>;

    async fn get_service_areas(&self) -> Result<Vec<CatalogueEntry>>;

    async fn get_product_sets(&self) -> Result<Vec<CatalogueEntry>>;

    /// Lists products as summary rows
    ///
    /// The default implementation reuses [`get_products`](Self::get_products)
    /// without expansion.
    async fn get_product_entries(&self) -> Result<Vec<CatalogueEntry>> {
        let products = self.get_products(None, false).await?;
        Ok(products
            .into_iter()
            .map(|product| CatalogueEntry::new(product.id, product.name))
            .collect())
    }
}
