use anyhow::{
    Context,
    Result,
};
use pokedex_client::{
    PokeApiClient,
    fetch_catalog,
};
use pokedex_local_data::{
    CaptureStore,
    KeyValueStorage,
};

use crate::{
    Message,
    PokedexState,
    View,
    render,
    state::alter_state_internal,
};

/// The Pokedex application.
///
/// All mutations go through [`Pokedex::dispatch`]. Capturing and releasing are persisted through
/// the [`CaptureStore`] before the call returns.
pub struct Pokedex<S> {
    state: PokedexState,
    store: CaptureStore<S>,
}

impl<S> Pokedex<S>
where
    S: KeyValueStorage,
{
    /// Creates a new application, loading the captured set from storage.
    pub fn new(storage: S) -> Result<Self> {
        let store = CaptureStore::load(storage)?;
        let state = PokedexState {
            captured: store.captured().to_vec(),
            ..Default::default()
        };
        Ok(Self { state, store })
    }

    /// The current state.
    pub fn state(&self) -> &PokedexState {
        &self.state
    }

    /// The capture store.
    pub fn store(&self) -> &CaptureStore<S> {
        &self.store
    }

    /// Renders the current state.
    pub fn view(&self) -> View {
        render(&self.state)
    }

    /// Fetches the catalog and publishes it in a single update.
    ///
    /// On failure, the state is left untouched.
    pub async fn load_catalog<C>(&mut self, client: &C) -> Result<()>
    where
        C: PokeApiClient + ?Sized,
    {
        let catalog = fetch_catalog(client)
            .await
            .context("failed to load catalog")?;
        self.dispatch(Message::CatalogLoaded(catalog))
    }

    /// Applies a single message.
    pub fn dispatch(&mut self, message: Message) -> Result<()> {
        log::trace!("dispatching {message:?}");
        match &message {
            Message::Capture(id) => {
                let pokemon = self.state.catalog_pokemon_or_else(*id)?.clone();
                let result = self.store.capture(&pokemon);
                self.sync_captured();
                result?;
            }
            Message::Release(id) => {
                let result = self.store.release(*id);
                self.sync_captured();
                result?;
            }
            _ => alter_state_internal(&mut self.state, &message)?,
        }
        Ok(())
    }

    fn sync_captured(&mut self) {
        self.state.captured = self.store.captured().to_vec();
    }
}
