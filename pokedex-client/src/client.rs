use async_trait::async_trait;
use pokedex_data::{
    CatalogPage,
    Pokemon,
};

use crate::FetchError;

/// Client for the remote Pokemon catalog.
///
/// Every response is validated before it is returned. A response that does not match its schema
/// is reported as [`FetchError::Schema`], never as a partially-filled value.
#[async_trait]
pub trait PokeApiClient: Send + Sync {
    /// Reads a page of catalog references.
    async fn catalog_page(&self, limit: usize, offset: usize) -> Result<CatalogPage, FetchError>;
    /// Reads a single Pokemon from its detail resource.
    async fn pokemon(&self, url: &str) -> Result<Pokemon, FetchError>;
}
