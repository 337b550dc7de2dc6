use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::{
    CatalogPage,
    Pokemon,
};

/// An external document that is validated before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// A page of catalog references.
    CatalogPage,
    /// A single Pokemon detail resource.
    Pokemon,
    /// The stored snapshot of captured Pokemon.
    CapturedSnapshot,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogPage => write!(f, "catalog page"),
            Self::Pokemon => write!(f, "pokemon"),
            Self::CapturedSnapshot => write!(f, "captured snapshot"),
        }
    }
}

/// An error for an external document not matching its expected shape.
#[derive(Debug, Error)]
#[error("{document} does not match schema: {source}")]
pub struct SchemaError {
    document: Document,
    source: serde_json::Error,
}

impl SchemaError {
    fn new(document: Document, source: serde_json::Error) -> Self {
        Self { document, source }
    }

    /// The document that failed validation.
    pub fn document(&self) -> Document {
        self.document
    }
}

fn validate<T>(document: Document, value: Value) -> Result<T, SchemaError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|err| SchemaError::new(document, err))
}

fn validate_str<T>(document: Document, text: &str) -> Result<T, SchemaError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(|err| SchemaError::new(document, err))
}

/// Validates a catalog page.
///
/// The page is accepted whole or not at all.
pub fn validate_catalog_page(value: Value) -> Result<CatalogPage, SchemaError> {
    validate(Document::CatalogPage, value)
}

/// Validates a catalog page from raw JSON text.
pub fn validate_catalog_page_str(text: &str) -> Result<CatalogPage, SchemaError> {
    validate_str(Document::CatalogPage, text)
}

/// Validates a single Pokemon detail resource.
pub fn validate_pokemon(value: Value) -> Result<Pokemon, SchemaError> {
    validate(Document::Pokemon, value)
}

/// Validates a single Pokemon detail resource from raw JSON text.
pub fn validate_pokemon_str(text: &str) -> Result<Pokemon, SchemaError> {
    validate_str(Document::Pokemon, text)
}

/// Validates a stored snapshot of captured Pokemon.
///
/// Every record in the snapshot is held to the same schema as a freshly fetched record.
pub fn validate_captured(text: &str) -> Result<Vec<Pokemon>, SchemaError> {
    validate_str(Document::CapturedSnapshot, text)
}

#[cfg(test)]
mod schema_test {
    use assert_matches::assert_matches;
    use serde_json::json;

    use crate::{
        CatalogPage,
        CatalogReference,
        Document,
        Pokemon,
        validate_captured,
        validate_catalog_page,
        validate_pokemon,
        validate_pokemon_str,
    };

    #[test]
    fn accepts_detail_resource_and_drops_unknown_fields() {
        let value = json!({
            "id": 1,
            "name": "bulbasaur",
            "base_experience": 64,
            "sprites": {
                "front_default": "https://img/1.png",
                "back_default": "https://img/1-back.png",
            },
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://api/type/12/" } },
                { "slot": 2, "type": { "name": "poison", "url": "https://api/type/4/" } },
            ],
        });
        pretty_assertions::assert_eq!(
            validate_pokemon(value).unwrap(),
            Pokemon::new(1, "bulbasaur", "https://img/1.png", ["grass", "poison"])
        );
    }

    #[test]
    fn rejects_missing_image() {
        let value = json!({
            "id": 1,
            "name": "bulbasaur",
            "sprites": { "front_default": null },
            "types": [],
        });
        assert_matches!(validate_pokemon(value), Err(err) => {
            assert_eq!(err.document(), Document::Pokemon);
        });
    }

    #[test]
    fn rejects_wrong_field_types() {
        assert_matches!(
            validate_pokemon_str(
                r#"{"id":"1","name":"bulbasaur","sprites":{"front_default":"a"},"types":[]}"#
            ),
            Err(_)
        );
        assert_matches!(
            validate_pokemon_str(
                r#"{"id":1,"name":"bulbasaur","sprites":{"front_default":"a"},"types":["grass"]}"#
            ),
            Err(_)
        );
    }

    #[test]
    fn requires_non_negative_integer_id() {
        for id in ["1.0", "-1", "1.5"] {
            let text =
                format!(r#"{{"id":{id},"name":"a","sprites":{{"front_default":"a"}},"types":[]}}"#);
            assert_matches!(validate_pokemon_str(&text), Err(err) => {
                assert_eq!(err.document(), Document::Pokemon);
            });
        }
    }

    #[test]
    fn accepts_catalog_page() {
        let value = json!({
            "count": 1302,
            "next": "https://api/pokemon?offset=10&limit=10",
            "results": [
                { "name": "bulbasaur", "url": "https://api/pokemon/1/" },
                { "name": "ivysaur", "url": "https://api/pokemon/2/" },
            ],
        });
        pretty_assertions::assert_eq!(
            validate_catalog_page(value).unwrap(),
            CatalogPage {
                results: Vec::from_iter([
                    CatalogReference {
                        url: "https://api/pokemon/1/".to_owned(),
                    },
                    CatalogReference {
                        url: "https://api/pokemon/2/".to_owned(),
                    },
                ]),
            }
        );
    }

    #[test]
    fn rejects_whole_catalog_page_on_single_bad_reference() {
        let value = json!({
            "results": [
                { "url": "https://api/pokemon/1/" },
                { "name": "ivysaur" },
            ],
        });
        assert_matches!(validate_catalog_page(value), Err(err) => {
            assert_eq!(err.document(), Document::CatalogPage);
        });
    }

    #[test]
    fn validates_captured_snapshot() {
        let text = r#"[{"id":4,"name":"charmander","sprites":{"front_default":"c.png"},"types":[{"type":{"name":"fire"}}]}]"#;
        pretty_assertions::assert_eq!(
            validate_captured(text).unwrap(),
            Vec::from_iter([Pokemon::new(4, "charmander", "c.png", ["fire"])])
        );
        assert_matches!(validate_captured("not json"), Err(err) => {
            assert_eq!(err.document(), Document::CapturedSnapshot);
        });
        assert_matches!(validate_captured(r#"{"id":4}"#), Err(_));
    }
}
