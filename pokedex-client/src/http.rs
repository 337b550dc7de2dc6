use anyhow::{
    Context,
    Result,
};
use async_trait::async_trait;
use pokedex_data::{
    CatalogPage,
    Pokemon,
    validate_catalog_page_str,
    validate_pokemon_str,
};
use reqwest::Client;

use crate::{
    FetchError,
    PokeApiClient,
};

/// Implementation of [`PokeApiClient`] over HTTP.
///
/// Requests are made exactly once. There is no retry, backoff, or timeout.
pub struct HttpPokeApiClient {
    client: Client,
    base_url: String,
}

impl HttpPokeApiClient {
    /// Base URL of the public PokeAPI service.
    pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

    /// Creates a new client against the given base URL.
    pub fn new<S>(base_url: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let client = Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { client, base_url })
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn catalog_url(&self, limit: usize, offset: usize) -> String {
        format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url)
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| FetchError::network(url, err))?;
        response
            .text()
            .await
            .map_err(|err| FetchError::network(url, err))
    }
}

#[async_trait]
impl PokeApiClient for HttpPokeApiClient {
    async fn catalog_page(&self, limit: usize, offset: usize) -> Result<CatalogPage, FetchError> {
        let body = self.get(&self.catalog_url(limit, offset)).await?;
        Ok(validate_catalog_page_str(&body)?)
    }

    async fn pokemon(&self, url: &str) -> Result<Pokemon, FetchError> {
        let body = self.get(url).await?;
        Ok(validate_pokemon_str(&body)?)
    }
}
