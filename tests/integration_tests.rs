use anyhow::Result;
use fruit_catalog::{CatalogSession, CliConfig, FruityviceClient, LoadState, SortKey};
use httpmock::prelude::*;

fn config_for(server: &MockServer) -> CliConfig {
    CliConfig {
        api_endpoint: server.url("/api/fruit/all"),
        filter: String::new(),
        sort_by: SortKey::Calories,
        verbose: false,
    }
}

fn fruityvice_payload() -> serde_json::Value {
    serde_json::json!([
        {
            "name": "Apple",
            "id": 6,
            "family": "Rosaceae",
            "order": "Rosales",
            "genus": "Malus",
            "nutritions": {
                "calories": 52,
                "fat": 0.4,
                "sugar": 10.3,
                "carbohydrates": 11.4,
                "protein": 0.3
            }
        },
        {
            "name": "Banana",
            "id": 1,
            "family": "Musaceae",
            "order": "Zingiberales",
            "genus": "Musa",
            "nutritions": {
                "calories": 89,
                "fat": 0.3,
                "sugar": 17.2,
                "carbohydrates": 22.0,
                "protein": 1.0
            }
        },
        {
            "name": "Pineapple",
            "id": 10,
            "family": "Bromeliaceae",
            "order": "Poales",
            "genus": "Ananas",
            "nutritions": {
                "calories": 50,
                "fat": 0.12,
                "sugar": 9.85,
                "carbohydrates": 13.12,
                "protein": 0.54
            }
        }
    ])
}

#[tokio::test]
async fn test_end_to_end_load_filter_and_sort() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/fruit/all");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(fruityvice_payload());
    });

    let client = FruityviceClient::with_default_client(config_for(&server));
    let mut session = CatalogSession::new(client);

    let state = session.load().await;

    api_mock.assert();
    assert_eq!(state, LoadState::Loaded);
    assert_eq!(session.catalog().len(), 3);

    // "apple" matches Apple and Pineapple; descending calories puts
    // Apple (52) first.
    let matches = session.view("apple", SortKey::Calories);
    let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Pineapple"]);

    Ok(())
}

#[tokio::test]
async fn test_every_sort_key_orders_the_full_catalog_descending() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/fruit/all");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(fruityvice_payload());
    });

    let client = FruityviceClient::with_default_client(config_for(&server));
    let mut session = CatalogSession::new(client);
    session.load().await;

    for key in [
        SortKey::Calories,
        SortKey::Fat,
        SortKey::Sugar,
        SortKey::Carbohydrates,
        SortKey::Protein,
    ] {
        let result = session.view("", key);
        assert_eq!(result.len(), 3);
        for pair in result.windows(2) {
            assert!(
                key.value(&pair[0].nutritions) >= key.value(&pair[1].nutritions),
                "view not descending for {:?}",
                key
            );
        }
    }

    Ok(())
}

#[tokio::test]
async fn test_fetch_failure_ends_in_failed_with_empty_catalog() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/fruit/all");
        then.status(500);
    });

    let client = FruityviceClient::with_default_client(config_for(&server));
    let mut session = CatalogSession::new(client);

    let state = session.load().await;

    api_mock.assert();
    assert_eq!(state, LoadState::Failed);
    assert!(session.catalog().is_empty());
    assert!(session.view("", SortKey::Calories).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_ends_in_failed() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/fruit/all");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json at all");
    });

    let client = FruityviceClient::with_default_client(config_for(&server));
    let mut session = CatalogSession::new(client);

    let state = session.load().await;

    assert_eq!(state, LoadState::Failed);
    assert!(session.catalog().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_second_load_does_not_refetch() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/fruit/all");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(fruityvice_payload());
    });

    let client = FruityviceClient::with_default_client(config_for(&server));
    let mut session = CatalogSession::new(client);

    session.load().await;
    let state = session.load().await;

    assert_eq!(state, LoadState::Loaded);
    api_mock.assert_hits(1);

    Ok(())
}

#[tokio::test]
async fn test_empty_payload_loads_successfully() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/fruit/all");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let client = FruityviceClient::with_default_client(config_for(&server));
    let mut session = CatalogSession::new(client);

    let state = session.load().await;

    // Loaded-but-empty is a distinct outcome from Failed.
    assert_eq!(state, LoadState::Loaded);
    assert!(session.catalog().is_empty());
    assert!(session.view("", SortKey::Sugar).is_empty());

    Ok(())
}
