use pokedex_data::{
    Pokemon,
    PokemonId,
};

fn sprite(id: PokemonId) -> String {
    format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
}

/// Creates a Pokemon with a generated image reference.
pub fn pokemon(id: PokemonId, name: &str, types: &[&str]) -> Pokemon {
    Pokemon::new(id, name, sprite(id), types.iter().copied())
}

pub fn bulbasaur() -> Pokemon {
    pokemon(1, "bulbasaur", &["grass", "poison"])
}

pub fn ivysaur() -> Pokemon {
    pokemon(2, "ivysaur", &["grass", "poison"])
}

pub fn charmander() -> Pokemon {
    pokemon(4, "charmander", &["fire"])
}

pub fn squirtle() -> Pokemon {
    pokemon(7, "squirtle", &["water"])
}

/// A small catalog covering repeated and unique types.
pub fn starter_catalog() -> Vec<Pokemon> {
    Vec::from_iter([bulbasaur(), ivysaur(), charmander(), squirtle()])
}
