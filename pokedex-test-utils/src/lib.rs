mod error_assert;
mod fake_client;
mod fixtures;
mod setup;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use fake_client::FakePokeApiClient;
pub use fixtures::{
    bulbasaur,
    charmander,
    ivysaur,
    pokemon,
    squirtle,
    starter_catalog,
};
pub use setup::setup_test_environment;
