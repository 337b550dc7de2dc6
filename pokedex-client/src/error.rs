use std::error::Error;

use pokedex_data::SchemaError;
use thiserror::Error;

/// An error for fetching data from the remote catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed, or the server answered with a failure status.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The response was received but does not match the expected shape.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl FetchError {
    /// Creates a new network error for the given URL.
    pub fn network<S, E>(url: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self::Network {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Checks if the error is a schema mismatch.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Checks if the error is a network failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
