mod client;
mod error;
mod fetch;
mod http;

pub use client::PokeApiClient;
pub use error::FetchError;
pub use fetch::{
    CATALOG_PAGE_SIZE,
    fetch_catalog,
};
pub use http::HttpPokeApiClient;
