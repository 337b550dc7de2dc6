use serde::{
    Deserialize,
    Serialize,
};

/// Identifier of a single Pokemon.
///
/// Unique within a single catalog fetch. Uniqueness is never enforced locally; it is only used
/// for membership checks.
pub type PokemonId = u64;

/// A named reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Sprites for a Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonSprites {
    /// The default front-facing image.
    pub front_default: String,
}

/// A single type slot of a Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A single Pokemon record.
///
/// The serialized form is the subset of the remote detail resource that this crate depends on.
/// Records are stored in the same form, so a stored record and a freshly fetched record are
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub sprites: PokemonSprites,
    /// Types, in slot order.
    pub types: Vec<PokemonTypeSlot>,
}

impl Pokemon {
    /// Creates a new record from its parts.
    pub fn new<N, I, T, S>(id: PokemonId, name: N, image: I, types: T) -> Self
    where
        N: Into<String>,
        I: Into<String>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            sprites: PokemonSprites {
                front_default: image.into(),
            },
            types: types
                .into_iter()
                .map(|name| PokemonTypeSlot {
                    kind: NamedResource { name: name.into() },
                })
                .collect(),
        }
    }

    /// The image reference for the Pokemon.
    pub fn image(&self) -> &str {
        &self.sprites.front_default
    }

    /// The type names of the Pokemon, in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.kind.name.as_str())
    }

    /// Checks if the Pokemon has the given type.
    pub fn has_type(&self, name: &str) -> bool {
        self.type_names().any(|type_name| type_name == name)
    }
}
