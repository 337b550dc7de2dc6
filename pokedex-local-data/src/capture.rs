use anyhow::{
    Context,
    Result,
};
use pokedex_data::{
    Pokemon,
    PokemonId,
    validate_captured,
};

use crate::KeyValueStorage;

/// The set of captured Pokemon, mirrored to durable storage.
///
/// The full snapshot is rewritten to storage on every mutation. After a mutation returns
/// successfully, storage reflects the in-memory set exactly. If the write fails, the in-memory set
/// has already changed and the error is returned to the caller; the two are reconciled by the next
/// successful write.
pub struct CaptureStore<S> {
    storage: S,
    captured: Vec<Pokemon>,
}

impl<S> CaptureStore<S>
where
    S: KeyValueStorage,
{
    /// Storage key for the captured snapshot.
    pub const KEY: &str = "savedpokemons";

    /// Loads the captured set from storage.
    ///
    /// A missing snapshot is an empty set. A snapshot that does not match the record schema is
    /// discarded with a warning and also treated as an empty set. Failing to read storage at all
    /// is an error.
    pub fn load(storage: S) -> Result<Self> {
        let snapshot = storage
            .get(Self::KEY)
            .context("failed to read captured snapshot")?;
        let captured = match snapshot {
            None => Vec::new(),
            Some(snapshot) => match validate_captured(&snapshot) {
                Ok(captured) => captured,
                Err(err) => {
                    log::warn!("discarding corrupt captured snapshot: {err}");
                    Vec::new()
                }
            },
        };
        log::debug!("loaded {} captured pokemon", captured.len());
        Ok(Self { storage, captured })
    }

    /// The captured Pokemon, in capture order.
    pub fn captured(&self) -> &[Pokemon] {
        &self.captured
    }

    /// Checks if a Pokemon with the given ID is captured.
    pub fn is_captured(&self, id: PokemonId) -> bool {
        self.captured.iter().any(|pokemon| pokemon.id == id)
    }

    /// Captures a Pokemon.
    ///
    /// Does nothing if a Pokemon with the same ID is already captured. Returns whether the set
    /// changed.
    pub fn capture(&mut self, pokemon: &Pokemon) -> Result<bool> {
        if self.is_captured(pokemon.id) {
            return Ok(false);
        }
        self.captured.push(pokemon.clone());
        self.persist()?;
        log::info!("captured {} ({})", pokemon.name, pokemon.id);
        Ok(true)
    }

    /// Releases every Pokemon with the given ID.
    ///
    /// Does nothing if no such Pokemon is captured. Returns whether the set changed.
    pub fn release(&mut self, id: PokemonId) -> Result<bool> {
        let before = self.captured.len();
        self.captured.retain(|pokemon| pokemon.id != id);
        if self.captured.len() == before {
            return Ok(false);
        }
        self.persist()?;
        log::info!("released {id}");
        Ok(true)
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot =
            serde_json::to_string(&self.captured).context("failed to serialize captured set")?;
        self.storage
            .set(Self::KEY, &snapshot)
            .context("failed to write captured snapshot")
    }
}
