//! Wire format of the Strapi v4 REST API.
//!
//! Every record arrives wrapped as `{ "id": .., "attributes": { .. } }` and
//! every relation as `{ "data": [..] }`. These types exist only to be
//! converted into domain records at the adapter boundary. Relations that were
//! not populated, or came back `null`, convert to empty vectors.

use crate::monitoring::domain::{
    CatalogueEntry, Component, Environment, Product, ServiceArea, Team,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct ListResponse<T> {
    pub data: Vec<DataItem<T>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ItemResponse<T> {
    pub data: Option<DataItem<T>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DataItem<T> {
    pub id: u64,
    pub attributes: T,
}

#[derive(Debug, Deserialize)]
pub(super) struct Relation<T> {
    pub data: Option<Vec<DataItem<T>>>,
}

fn relation_items<T>(relation: Option<Relation<T>>) -> Vec<DataItem<T>> {
    relation.and_then(|r| r.data).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub(super) struct SummaryAttributes {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct EnvironmentAttributes {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub health_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ComponentAttributes {
    pub name: String,
    #[serde(default)]
    pub environments: Option<Vec<EnvironmentAttributes>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProductAttributes {
    pub name: String,
    #[serde(default)]
    pub components: Option<Relation<ComponentAttributes>>,
}

/// Shared shape of teams and service areas: a name plus owned products
#[derive(Debug, Deserialize)]
pub(super) struct ProductOwnerAttributes {
    pub name: String,
    #[serde(default)]
    pub products: Option<Relation<ProductAttributes>>,
}

impl From<EnvironmentAttributes> for Environment {
    fn from(attributes: EnvironmentAttributes) -> Self {
        Environment {
            id: attributes.id,
            name: attributes.name,
            url: attributes.url.unwrap_or_default(),
            health_path: attributes.health_path.unwrap_or_default(),
        }
    }
}

impl From<DataItem<ComponentAttributes>> for Component {
    fn from(item: DataItem<ComponentAttributes>) -> Self {
        Component {
            id: item.id,
            name: item.attributes.name,
            environments: item
                .attributes
                .environments
                .unwrap_or_default()
                .into_iter()
                .map(Environment::from)
                .collect(),
        }
    }
}

impl From<DataItem<ProductAttributes>> for Product {
    fn from(item: DataItem<ProductAttributes>) -> Self {
        Product {
            id: item.id,
            name: item.attributes.name,
            components: relation_items(item.attributes.components)
                .into_iter()
                .map(Component::from)
                .collect(),
        }
    }
}

impl DataItem<ProductOwnerAttributes> {
    fn into_parts(self) -> (u64, String, Vec<Product>) {
        let products = relation_items(self.attributes.products)
            .into_iter()
            .map(Product::from)
            .collect();
        (self.id, self.attributes.name, products)
    }
}

impl From<DataItem<ProductOwnerAttributes>> for Team {
    fn from(item: DataItem<ProductOwnerAttributes>) -> Self {
        let (id, name, products) = item.into_parts();
        Team { id, name, products }
    }
}

impl From<DataItem<ProductOwnerAttributes>> for ServiceArea {
    fn from(item: DataItem<ProductOwnerAttributes>) -> Self {
        let (id, name, products) = item.into_parts();
        ServiceArea { id, name, products }
    }
}

impl From<DataItem<SummaryAttributes>> for CatalogueEntry {
    fn from(item: DataItem<SummaryAttributes>) -> Self {
        CatalogueEntry::new(item.id, item.attributes.name)
            .with_description(item.attributes.description)
    }
}
