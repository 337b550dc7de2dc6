use indexmap::IndexSet;
use pokedex_data::Pokemon;

/// Criteria for deriving the visible subset of the catalog.
///
/// An empty field matches every Pokemon.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the Pokemon name.
    pub name: String,
    /// Exact type name.
    pub type_name: String,
}

impl FilterCriteria {
    /// Checks if the Pokemon matches both criteria.
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        self.matches_name(pokemon) && self.matches_type(pokemon)
    }

    fn matches_name(&self, pokemon: &Pokemon) -> bool {
        self.name.is_empty()
            || pokemon
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase())
    }

    fn matches_type(&self, pokemon: &Pokemon) -> bool {
        self.type_name.is_empty() || pokemon.has_type(&self.type_name)
    }
}

/// All type names across the catalog, deduplicated in first-seen order.
pub fn type_options(catalog: &[Pokemon]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|pokemon| pokemon.type_names())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(|type_name| type_name.to_owned())
        .collect()
}

/// The catalog Pokemon matching the filter, in catalog order.
pub fn visible_catalog<'c>(catalog: &'c [Pokemon], filter: &FilterCriteria) -> Vec<&'c Pokemon> {
    catalog
        .iter()
        .filter(|pokemon| filter.matches(pokemon))
        .collect()
}
