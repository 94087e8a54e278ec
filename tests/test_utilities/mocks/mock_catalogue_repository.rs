use async_trait::async_trait;
use catalogue_monitor::monitoring::domain::{
    CatalogueEntry, Component, Environment, Product, ScopeId, ServiceArea, Team,
};
use catalogue_monitor::prelude::*;
use catalogue_monitor::shared::error::MonitorError;
use std::sync::Mutex;

/// Builds an environment with a predictable url and health path
pub fn environment(id: u64, name: &str) -> Environment {
    Environment {
        id,
        name: name.to_string(),
        url: format!("https://{}.example.com", name),
        health_path: "/health".to_string(),
    }
}

/// Builds a product with a single component owning `environments`
pub fn product(id: u64, name: &str, component: &str, environments: &[&str]) -> Product {
    Product {
        id,
        name: name.to_string(),
        components: vec![Component {
            id: id * 100,
            name: component.to_string(),
            environments: environments
                .iter()
                .enumerate()
                .map(|(index, env)| environment(id * 100 + index as u64, env))
                .collect(),
        }],
    }
}

/// Mock CatalogueRepository for testing
///
/// Records each call so tests can assert the number of upstream requests.
#[derive(Default)]
pub struct MockCatalogueRepository {
    pub products: Vec<Product>,
    pub teams: Vec<Team>,
    pub service_areas: Vec<ServiceArea>,
    pub product_sets: Vec<CatalogueEntry>,
    pub should_fail: bool,
    calls: Mutex<Vec<String>>,
}

impl MockCatalogueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_team(mut self, id: u64, name: &str, products: Vec<Product>) -> Self {
        self.teams.push(Team {
            id,
            name: name.to_string(),
            products,
        });
        self
    }

    pub fn with_service_area(mut self, id: u64, name: &str, products: Vec<Product>) -> Self {
        self.service_areas.push(ServiceArea {
            id,
            name: name.to_string(),
            products,
        });
        self
    }

    pub fn with_product_set(mut self, id: u64, name: &str) -> Self {
        self.product_sets.push(CatalogueEntry::new(id, name));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.should_fail {
            return Err(MonitorError::catalogue("mock catalogue", "status 500").into());
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogueRepository for MockCatalogueRepository {
    async fn get_products(&self, ids: Option<&[u64]>, expand: bool) -> Result<Vec<Product>> {
        self.record(format!("get_products(expand={})", expand))?;
        Ok(self
            .products
            .iter()
            .filter(|p| ids.map_or(true, |ids| ids.contains(&p.id)))
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: ScopeId, expand: bool) -> Result<Product> {
        self.record(format!("get_product({}, expand={})", id, expand))?;
        self.products
            .iter()
            .find(|p| p.id == id.get())
            .cloned()
            .ok_or_else(|| MonitorError::not_found(format!("product {}", id)).into())
    }

    async fn get_team(&self, id: ScopeId, expand: bool) -> Result<Team> {
        self.record(format!("get_team({}, expand={})", id, expand))?;
        self.teams
            .iter()
            .find(|t| t.id == id.get())
            .cloned()
            .ok_or_else(|| MonitorError::not_found(format!("team {}", id)).into())
    }

    async fn get_service_area(&self, id: ScopeId, expand: bool) -> Result<ServiceArea> {
        self.record(format!("get_service_area({}, expand={})", id, expand))?;
        self.service_areas
            .iter()
            .find(|s| s.id == id.get())
            .cloned()
            .ok_or_else(|| MonitorError::not_found(format!("service area {}", id)).into())
    }

    async fn get_components(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_components".to_string())?;
        Ok(self
            .products
            .iter()
            .flat_map(|p| &p.components)
            .map(|c| CatalogueEntry::new(c.id, c.name.clone()))
            .collect())
    }

    async fn get_teams(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_teams".to_string())?;
        Ok(self
            .teams
            .iter()
            .map(|t| CatalogueEntry::new(t.id, t.name.clone()))
            .collect())
    }

    async fn get_service_areas(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_service_areas".to_string())?;
        Ok(self
            .service_areas
            .iter()
            .map(|s| CatalogueEntry::new(s.id, s.name.clone()))
            .collect())
    }

    async fn get_product_sets(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_product_sets".to_string())?;
        Ok(self.product_sets.clone())
    }
}
