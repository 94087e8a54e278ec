use super::strapi_types::{
    DataItem, ItemResponse, ListResponse, ProductAttributes, ProductOwnerAttributes,
    SummaryAttributes,
};
use crate::monitoring::domain::{CatalogueEntry, Product, ScopeId, ServiceArea, Team};
use crate::ports::outbound::{CatalogueRepository, HealthCheck};
use crate::shared::error::MonitorError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Populate parameter expanding a product's components and their environments
const PRODUCT_POPULATE: (&str, &str) = ("populate[components][populate][0]", "environments");

/// Populate parameter expanding owned products down to environments
const OWNER_POPULATE: (&str, &str) = (
    "populate[products][populate][components][populate][0]",
    "environments",
);

/// StrapiCatalogueClient adapter for the service catalogue REST API
///
/// Implements the CatalogueRepository port against a Strapi v4 backend.
/// Nested relations are expanded with `populate` parameters so a scope is
/// always fetched in a single request. Lists are returned sorted by name.
///
/// Every failure (transport error, non-2xx status, undecodable body) is
/// reported as `MonitorError::CatalogueFetch`, except a 404 on a single
/// record which is reported as `MonitorError::CatalogueNotFound`.
pub struct StrapiCatalogueClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl StrapiCatalogueClient {
    pub const HEALTH_CHECK_NAME: &'static str = "serviceCatalogue";

    /// Creates a client for the catalogue at `base_url`
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration, api_token: Option<String>) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid catalogue URL '{}': {}", base_url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Catalogue URL must use http or https: {}", base_url);
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("catalogue-monitor/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &str, url: Url) -> Result<T> {
        tracing::debug!(operation, url = %url, "Catalogue request");

        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MonitorError::catalogue(operation, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MonitorError::not_found(operation).into());
        }
        if !status.is_success() {
            return Err(MonitorError::catalogue(
                operation,
                format!("catalogue returned status code {}", status),
            )
            .into());
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| MonitorError::catalogue(operation, format!("invalid response: {}", e)))?;
        Ok(body)
    }

    async fn get_item<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        query: &[(String, String)],
    ) -> Result<DataItem<T>> {
        let url = self.endpoint(path, query)?;
        let response: ItemResponse<T> = self.get_json(operation, url).await?;
        response
            .data
            .ok_or_else(|| MonitorError::not_found(operation).into())
    }

    async fn list_entries(&self, operation: &str, path: &str) -> Result<Vec<CatalogueEntry>> {
        let url = self.endpoint(path, &[])?;
        let response: ListResponse<SummaryAttributes> = self.get_json(operation, url).await?;
        let mut entries: Vec<CatalogueEntry> =
            response.data.into_iter().map(CatalogueEntry::from).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn populate(expand: bool, (key, value): (&str, &str)) -> Vec<(String, String)> {
        if expand {
            vec![(key.to_string(), value.to_string())]
        } else {
            Vec::new()
        }
    }
}

#[async_trait]
impl CatalogueRepository for StrapiCatalogueClient {
    async fn get_products(
        &self,
        ids: Option<&[u64]>,
        expand_environments: bool,
    ) -> Result<Vec<Product>> {
        let mut query = Self::populate(expand_environments, PRODUCT_POPULATE);
        query.extend(
            ids.unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(index, id)| (format!("filters[id][$in][{}]", index), id.to_string())),
        );

        let url = self.endpoint("/v1/products", &query)?;
        let response: ListResponse<ProductAttributes> = self.get_json("list products", url).await?;

        let mut products: Vec<Product> = response.data.into_iter().map(Product::from).collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get_product(&self, id: ScopeId, expand_environments: bool) -> Result<Product> {
        let item = self
            .get_item::<ProductAttributes>(
                &format!("product {}", id),
                &format!("/v1/products/{}", id),
                &Self::populate(expand_environments, PRODUCT_POPULATE),
            )
            .await?;
        Ok(Product::from(item))
    }

    async fn get_team(&self, id: ScopeId, expand_products: bool) -> Result<Team> {
        let item = self
            .get_item::<ProductOwnerAttributes>(
                &format!("team {}", id),
                &format!("/v1/teams/{}", id),
                &Self::populate(expand_products, OWNER_POPULATE),
            )
            .await?;
        Ok(Team::from(item))
    }

    async fn get_service_area(&self, id: ScopeId, expand_products: bool) -> Result<ServiceArea> {
        let item = self
            .get_item::<ProductOwnerAttributes>(
                &format!("service area {}", id),
                &format!("/v1/service-areas/{}", id),
                &Self::populate(expand_products, OWNER_POPULATE),
            )
            .await?;
        Ok(ServiceArea::from(item))
    }

    async fn get_components(&self) -> Result<Vec<CatalogueEntry>> {
        self.list_entries("list components", "/v1/components").await
    }

    async fn get_teams(&self) -> Result<Vec<CatalogueEntry>> {
        self.list_entries("list teams", "/v1/teams").await
    }

    async fn get_service_areas(&self) -> Result<Vec<CatalogueEntry>> {
        self.list_entries("list service areas", "/v1/service-areas")
            .await
    }

    async fn get_product_sets(&self) -> Result<Vec<CatalogueEntry>> {
        self.list_entries("list product sets", "/v1/product-sets")
            .await
    }

    async fn get_product_entries(&self) -> Result<Vec<CatalogueEntry>> {
        self.list_entries("list products", "/v1/products").await
    }
}

#[async_trait]
impl HealthCheck for StrapiCatalogueClient {
    fn name(&self) -> &str {
        Self::HEALTH_CHECK_NAME
    }

    async fn check(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("catalogue returned status code {}", response.status());
        }
        Ok("OK".to_string())
    }
}
