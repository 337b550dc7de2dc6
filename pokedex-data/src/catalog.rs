use serde::{
    Deserialize,
    Serialize,
};

/// A reference to the detail resource of a single Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReference {
    pub url: String,
}

/// A single page of the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<CatalogReference>,
}
