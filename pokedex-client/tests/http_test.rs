use std::time::Duration;

use assert_matches::assert_matches;
use pokedex_client::{
    FetchError,
    HttpPokeApiClient,
    PokeApiClient,
    fetch_catalog,
};
use pokedex_data::{
    Document,
    Pokemon,
};
use pokedex_test_utils::{
    bulbasaur,
    charmander,
    setup_test_environment,
    squirtle,
};
use serde_json::{
    Value,
    json,
};
use wiremock::{
    Mock,
    MockServer,
    ResponseTemplate,
    matchers::{
        method,
        path,
        query_param,
    },
};

fn detail_document(pokemon: &Pokemon) -> Value {
    json!({
        "id": pokemon.id,
        "name": pokemon.name,
        "height": 7,
        "sprites": {
            "front_default": pokemon.image(),
            "front_shiny": null,
        },
        "types": pokemon
            .type_names()
            .enumerate()
            .map(|(i, name)| json!({ "slot": i + 1, "type": { "name": name, "url": "" } }))
            .collect::<Vec<_>>(),
    })
}

async fn mount_catalog(server: &MockServer, catalog: &[Pokemon]) {
    let results = catalog
        .iter()
        .map(|pokemon| {
            json!({
                "name": pokemon.name,
                "url": format!("{}/pokemon/{}/", server.uri(), pokemon.id),
            })
        })
        .collect::<Vec<_>>();
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1302,
            "next": null,
            "previous": null,
            "results": results,
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, pokemon: &Pokemon, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{}/", pokemon.id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(detail_document(pokemon))
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetches_catalog_over_http() {
    setup_test_environment();
    let server = MockServer::start().await;
    let catalog = Vec::from_iter([bulbasaur(), charmander(), squirtle()]);
    mount_catalog(&server, &catalog).await;
    for pokemon in &catalog {
        mount_detail(&server, pokemon, Duration::ZERO).await;
    }

    let client = HttpPokeApiClient::new(server.uri()).unwrap();
    pretty_assertions::assert_eq!(fetch_catalog(&client).await.unwrap(), catalog);
}

#[tokio::test]
async fn preserves_reference_order_when_details_resolve_out_of_order() {
    setup_test_environment();
    let server = MockServer::start().await;
    let catalog = Vec::from_iter([bulbasaur(), charmander(), squirtle()]);
    mount_catalog(&server, &catalog).await;
    mount_detail(&server, &catalog[0], Duration::from_millis(300)).await;
    mount_detail(&server, &catalog[1], Duration::from_millis(150)).await;
    mount_detail(&server, &catalog[2], Duration::ZERO).await;

    let client = HttpPokeApiClient::new(server.uri()).unwrap();
    pretty_assertions::assert_eq!(fetch_catalog(&client).await.unwrap(), catalog);
}

#[tokio::test]
async fn failure_status_is_network_error() {
    setup_test_environment();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/9999/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let client = HttpPokeApiClient::new(server.uri()).unwrap();
    let url = format!("{}/pokemon/9999/", server.uri());
    assert_matches!(client.pokemon(&url).await, Err(FetchError::Network { url: failed, .. }) => {
        assert_eq!(failed, url);
    });
}

#[tokio::test]
async fn non_json_body_is_schema_error() {
    setup_test_environment();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let client = HttpPokeApiClient::new(server.uri()).unwrap();
    assert_matches!(client.catalog_page(10, 0).await, Err(FetchError::Schema(err)) => {
        assert_eq!(err.document(), Document::CatalogPage);
    });
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    setup_test_environment();
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HttpPokeApiClient::new(uri).unwrap();
    assert_matches!(fetch_catalog(&client).await, Err(err) => {
        assert!(err.is_network());
    });
}
