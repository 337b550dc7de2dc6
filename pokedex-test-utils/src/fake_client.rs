use std::sync::Mutex;

use ahash::HashMap;
use async_trait::async_trait;
use pokedex_client::{
    FetchError,
    PokeApiClient,
};
use pokedex_data::{
    CatalogPage,
    Pokemon,
    validate_catalog_page,
    validate_pokemon,
};
use serde_json::{
    Value,
    json,
};

/// Implementation of [`PokeApiClient`] that serves raw JSON documents from memory.
///
/// Documents are validated the same way a real response would be, so malformed documents can be
/// used to exercise schema failures. Detail URLs with no document fail as network errors.
pub struct FakePokeApiClient {
    page: Value,
    details: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl FakePokeApiClient {
    /// The detail URL the fake uses for a Pokemon.
    pub fn url_for(pokemon: &Pokemon) -> String {
        format!("fake://pokemon/{}/", pokemon.id)
    }

    /// Creates a fake that serves the given catalog.
    pub fn new(catalog: &[Pokemon]) -> Self {
        let page = json!({
            "count": catalog.len(),
            "results": catalog
                .iter()
                .map(|pokemon| json!({ "name": pokemon.name, "url": Self::url_for(pokemon) }))
                .collect::<Vec<_>>(),
        });
        let details = catalog.iter().map(|pokemon| {
            (
                Self::url_for(pokemon),
                serde_json::to_value(pokemon).unwrap(),
            )
        });
        Self::from_documents(page, details)
    }

    /// Creates a fake that serves the given raw documents.
    pub fn from_documents<I>(page: Value, details: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            page,
            details: details.into_iter().collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the document at the given detail URL.
    pub fn set_detail(&mut self, url: &str, document: Value) {
        self.details.insert(url.to_owned(), document);
    }

    /// Removes the document at the given detail URL, so that requesting it fails.
    pub fn remove_detail(&mut self, url: &str) {
        self.details.remove(url);
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

#[async_trait]
impl PokeApiClient for FakePokeApiClient {
    async fn catalog_page(&self, limit: usize, offset: usize) -> Result<CatalogPage, FetchError> {
        self.record(format!("catalog?limit={limit}&offset={offset}"));
        Ok(validate_catalog_page(self.page.clone())?)
    }

    async fn pokemon(&self, url: &str) -> Result<Pokemon, FetchError> {
        self.record(url.to_owned());
        let document = self
            .details
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::network(url, "404 Not Found"))?;
        Ok(validate_pokemon(document)?)
    }
}
