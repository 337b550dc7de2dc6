use pokedex_data::{
    Pokemon,
    PokemonId,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    PokedexState,
    type_options,
    visible_catalog,
};

/// Label of the type option that matches every type.
pub const ALL_TYPES_LABEL: &str = "All types";

/// The button on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardButton {
    /// Captures a catalog Pokemon.
    Capture,
    /// Shown on a catalog Pokemon that is already captured. Disabled.
    Captured,
    /// Releases a captured Pokemon.
    Release,
}

impl CardButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Capture => "Capture",
            Self::Captured => "Captured",
            Self::Release => "Release",
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, Self::Captured)
    }
}

/// A single Pokemon card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: PokemonId,
    pub name: String,
    pub image: String,
    pub types: Vec<String>,
    /// Whether the Pokemon is in the captured set.
    pub captured: bool,
    pub button: CardButton,
}

impl Card {
    fn new(pokemon: &Pokemon, captured: bool, button: CardButton) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image: pokemon.image().to_owned(),
            types: pokemon.type_names().map(|name| name.to_owned()).collect(),
            captured,
            button,
        }
    }
}

/// An option in the type selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOption {
    /// The filter value. Empty for all types.
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub name: String,
    pub type_options: Vec<TypeOption>,
}

/// A titled list of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub cards: Vec<Card>,
}

/// Everything that is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub filters: Filters,
    /// The filtered catalog.
    pub pokedex: Panel,
    /// The full captured set. Never filtered.
    pub captured: Panel,
}

fn filters(state: &PokedexState) -> Filters {
    let selected = &state.filter.type_name;
    let all = TypeOption {
        value: String::new(),
        label: ALL_TYPES_LABEL.to_owned(),
        selected: selected.is_empty(),
    };
    let type_options = type_options(&state.catalog).into_iter().map(|type_name| TypeOption {
        selected: &type_name == selected,
        label: type_name.clone(),
        value: type_name,
    });
    Filters {
        name: state.filter.name.clone(),
        type_options: [all].into_iter().chain(type_options).collect(),
    }
}

/// Renders the state into a [`View`].
pub fn render(state: &PokedexState) -> View {
    let pokedex = visible_catalog(&state.catalog, &state.filter)
        .into_iter()
        .map(|pokemon| {
            let captured = state.is_captured(pokemon.id);
            let button = if captured {
                CardButton::Captured
            } else {
                CardButton::Capture
            };
            Card::new(pokemon, captured, button)
        })
        .collect();
    let captured = state
        .captured
        .iter()
        .map(|pokemon| Card::new(pokemon, true, CardButton::Release))
        .collect();
    View {
        filters: filters(state),
        pokedex: Panel {
            title: "Pokedex".to_owned(),
            cards: pokedex,
        },
        captured: Panel {
            title: "Captured".to_owned(),
            cards: captured,
        },
    }
}
