use anyhow::{
    Error,
    Result,
};
use pokedex_data::{
    Pokemon,
    PokemonId,
};

use crate::FilterCriteria;

/// The complete state of the application.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PokedexState {
    /// Pokemon fetched for this session, in catalog order.
    pub catalog: Vec<Pokemon>,
    /// Captured Pokemon, in capture order.
    pub captured: Vec<Pokemon>,
    pub filter: FilterCriteria,
}

impl PokedexState {
    /// Checks if a Pokemon with the given ID is captured.
    pub fn is_captured(&self, id: PokemonId) -> bool {
        self.captured.iter().any(|pokemon| pokemon.id == id)
    }

    /// Looks up a Pokemon in the catalog by ID.
    pub fn catalog_pokemon(&self, id: PokemonId) -> Option<&Pokemon> {
        self.catalog.iter().find(|pokemon| pokemon.id == id)
    }

    /// Looks up a Pokemon in the catalog by ID, failing if it does not exist.
    pub fn catalog_pokemon_or_else(&self, id: PokemonId) -> Result<&Pokemon> {
        self.catalog_pokemon(id)
            .ok_or_else(|| Error::msg(format!("pokemon {id} is not in the catalog")))
    }
}

/// A single update to [`PokedexState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The catalog finished loading.
    CatalogLoaded(Vec<Pokemon>),
    /// The name filter was edited.
    SetNameFilter(String),
    /// The type filter was selected. Empty selects all types.
    SetTypeFilter(String),
    /// A catalog Pokemon was captured.
    Capture(PokemonId),
    /// A captured Pokemon was released.
    Release(PokemonId),
}

/// Applies a message that does not touch the captured set.
///
/// [`Message::Capture`] and [`Message::Release`] are rejected; they must go through
/// [`crate::Pokedex::dispatch`] so the captured set is persisted.
pub fn alter_state(state: PokedexState, message: &Message) -> Result<PokedexState> {
    let mut state = state;
    alter_state_internal(&mut state, message)?;
    Ok(state)
}

/// Same as [`alter_state`], but in place. The state is unchanged on error.
pub(crate) fn alter_state_internal(state: &mut PokedexState, message: &Message) -> Result<()> {
    match message {
        Message::CatalogLoaded(catalog) => {
            state.catalog = catalog.clone();
        }
        Message::SetNameFilter(name) => {
            state.filter.name = name.clone();
        }
        Message::SetTypeFilter(type_name) => {
            state.filter.type_name = type_name.clone();
        }
        Message::Capture(_) | Message::Release(_) => {
            return Err(Error::msg(format!(
                "{message:?} must be dispatched through the capture store"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod state_test {
    use pokedex_test_utils::{
        assert_error_message,
        starter_catalog,
    };

    use crate::{
        FilterCriteria,
        Message,
        PokedexState,
        alter_state,
    };

    fn loaded_state() -> PokedexState {
        alter_state(
            PokedexState::default(),
            &Message::CatalogLoaded(starter_catalog()),
        )
        .unwrap()
    }

    #[test]
    fn loads_catalog_in_one_update() {
        pretty_assertions::assert_eq!(
            loaded_state(),
            PokedexState {
                catalog: starter_catalog(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn edits_filters_independently() {
        let state = loaded_state();
        let state = alter_state(state, &Message::SetNameFilter("saur".to_owned())).unwrap();
        let state = alter_state(state, &Message::SetTypeFilter("grass".to_owned())).unwrap();
        let state = alter_state(state, &Message::SetNameFilter(String::new())).unwrap();
        pretty_assertions::assert_eq!(
            state.filter,
            FilterCriteria {
                name: String::new(),
                type_name: "grass".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_captured_set_changes() {
        assert_error_message(
            alter_state(loaded_state(), &Message::Capture(4)),
            "Capture(4) must be dispatched through the capture store",
        );
        assert_error_message(
            alter_state(loaded_state(), &Message::Release(4)),
            "Release(4) must be dispatched through the capture store",
        );
    }
}
