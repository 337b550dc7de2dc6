mod catalog;
mod pokemon;
mod schema;

pub use catalog::{
    CatalogPage,
    CatalogReference,
};
pub use pokemon::{
    NamedResource,
    Pokemon,
    PokemonId,
    PokemonSprites,
    PokemonTypeSlot,
};
pub use schema::{
    Document,
    SchemaError,
    validate_captured,
    validate_catalog_page,
    validate_catalog_page_str,
    validate_pokemon,
    validate_pokemon_str,
};
