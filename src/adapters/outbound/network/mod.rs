/// Network adapters for external API calls
mod strapi_client;
mod strapi_types;

pub use strapi_client::StrapiCatalogueClient;
