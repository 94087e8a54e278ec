use serde::Serialize;

/// A deployed environment of a component (e.g. "dev", "prod")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub health_path: String,
}

/// A deployable component owning zero or more environments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub id: u64,
    pub name: String,
    pub environments: Vec<Environment>,
}

/// A product owning zero or more components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceArea {
    pub id: u64,
    pub name: String,
    pub products: Vec<Product>,
}

/// Catalogue subgraph fetched for a monitor scope.
///
/// Every variant owns its products, directly or through a team or
/// service area, so flattening only ever has to walk
/// Product -> Component -> Environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeNode {
    Products(Vec<Product>),
    Product(Product),
    Team(Team),
    ServiceArea(ServiceArea),
}

impl ScopeNode {
    pub fn products(&self) -> &[Product] {
        match self {
            ScopeNode::Products(products) => products,
            ScopeNode::Product(product) => std::slice::from_ref(product),
            ScopeNode::Team(team) => &team.products,
            ScopeNode::ServiceArea(service_area) => &service_area.products,
        }
    }
}

/// The catalogue collections exposed as flat lists for data tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogueCollection {
    Components,
    Products,
    Teams,
    ServiceAreas,
    ProductSets,
}

impl CatalogueCollection {
    pub const ALL: [CatalogueCollection; 5] = [
        CatalogueCollection::Components,
        CatalogueCollection::Products,
        CatalogueCollection::Teams,
        CatalogueCollection::ServiceAreas,
        CatalogueCollection::ProductSets,
    ];

    /// Path segment of the collection, as used by the catalogue and the data endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogueCollection::Components => "components",
            CatalogueCollection::Products => "products",
            CatalogueCollection::Teams => "teams",
            CatalogueCollection::ServiceAreas => "service-areas",
            CatalogueCollection::ProductSets => "product-sets",
        }
    }
}

/// Summary row of any catalogue collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogueEntry {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}
