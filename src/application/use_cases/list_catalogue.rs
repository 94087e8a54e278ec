use crate::monitoring::domain::{CatalogueCollection, CatalogueEntry};
use crate::ports::outbound::CatalogueRepository;
use crate::shared::Result;
use anyhow::Context;
use std::sync::Arc;

/// ListCatalogueUseCase - Flat catalogue lists for the data tables
pub struct ListCatalogueUseCase<C: CatalogueRepository + ?Sized> {
    catalogue: Arc<C>,
}

impl<C: CatalogueRepository + ?Sized> Clone for ListCatalogueUseCase<C> {
    fn clone(&self) -> Self {
        Self {
            catalogue: Arc::clone(&self.catalogue),
        }
    }
}

impl<C: CatalogueRepository + ?Sized> ListCatalogueUseCase<C> {
    pub fn new(catalogue: Arc<C>) -> Self {
        Self { catalogue }
    }

    pub async fn execute(&self, collection: CatalogueCollection) -> Result<Vec<CatalogueEntry>> {
        let entries = match collection {
            CatalogueCollection::Components => self.catalogue.get_components().await,
            CatalogueCollection::Products => self.catalogue.get_product_entries().await,
            CatalogueCollection::Teams => self.catalogue.get_teams().await,
            CatalogueCollection::ServiceAreas => self.catalogue.get_service_areas().await,
            CatalogueCollection::ProductSets => self.catalogue.get_product_sets().await,
        }
        .inspect_err(|e| {
            tracing::error!(collection = collection.as_str(), error = %e, "Catalogue list failed")
        })
        .with_context(|| format!("Failed to list {}", collection.as_str()))?;

        tracing::debug!(
            collection = collection.as_str(),
            count = entries.len(),
            "Catalogue list fetched"
        );
        Ok(entries)
    }
}
