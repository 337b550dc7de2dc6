mod app;
mod filter;
mod state;
pub mod ui;

pub use app::Pokedex;
pub use filter::{
    FilterCriteria,
    type_options,
    visible_catalog,
};
pub use state::{
    Message,
    PokedexState,
    alter_state,
};
pub use ui::{
    View,
    render,
};
