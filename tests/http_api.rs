//! End-to-end tests: a real listener driven over HTTP with `reqwest`.

#![allow(clippy::panic)]

use std::net::SocketAddr;

use book_catalog::api::build_app;
use book_catalog::app_state::AppState;
use book_catalog::config::CatalogConfig;
use book_catalog::persistence;
use book_catalog::service::BookService;
use serde_json::{Value, json};

async fn spawn_server() -> SocketAddr {
    let Ok(config) = CatalogConfig::from_lookup(|key| match key {
        "LISTEN_ADDR" => Some("127.0.0.1:0".to_string()),
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "DATABASE_MAX_CONNECTIONS" | "DATABASE_MIN_CONNECTIONS" => Some("1".to_string()),
        _ => None,
    }) else {
        panic!("test config must parse");
    };

    let Ok(pool) = persistence::connect(&config).await else {
        panic!("in-memory pool must open");
    };
    let Ok(()) = persistence::ensure_schema(&pool).await else {
        panic!("schema must be created");
    };
    let app = build_app(AppState::new(BookService::new(pool)));

    let Ok(listener) = tokio::net::TcpListener::bind(config.listen_addr).await else {
        panic!("listener must bind");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has an address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn json_body(response: reqwest::Response) -> Value {
    response.json::<Value>().await.unwrap_or(Value::Null)
}

#[tokio::test]
async fn catalog_round_trip_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}/api/v1");

    let Ok(response) = client.get(format!("{base}/books")).send().await else {
        panic!("list request failed");
    };
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_body(response).await, json!([]));

    let Ok(response) = client
        .post(format!("{base}/books"))
        .json(&json!({"title": "Dune", "author": "Herbert", "genre": "SciFi"}))
        .send()
        .await
    else {
        panic!("create request failed");
    };
    assert_eq!(response.status().as_u16(), 201);
    let created = json_body(response).await;
    assert_eq!(created["id"], 1);

    let Ok(response) = client
        .put(format!("{base}/books/1"))
        .json(&json!({"title": "Children of Dune", "author": "Herbert", "genre": "SciFi"}))
        .send()
        .await
    else {
        panic!("update request failed");
    };
    assert_eq!(response.status().as_u16(), 200);

    let Ok(response) = client
        .get(format!("{base}/books/search?title=children"))
        .send()
        .await
    else {
        panic!("search request failed");
    };
    assert_eq!(response.status().as_u16(), 200);
    let found = json_body(response).await;
    assert_eq!(found.as_array().map(Vec::len), Some(1));
    assert_eq!(found[0]["title"], "Children of Dune");

    let Ok(response) = client.delete(format!("{base}/books/1")).send().await else {
        panic!("delete request failed");
    };
    assert_eq!(response.status().as_u16(), 204);

    let Ok(response) = client.get(format!("{base}/books/1")).send().await else {
        panic!("get request failed");
    };
    assert_eq!(response.status().as_u16(), 404);
    let body = json_body(response).await;
    assert_eq!(body["error"]["message"], "book not found: 1");
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let Ok(response) = client.get(format!("http://{addr}/health")).send().await else {
        panic!("health request failed");
    };
    assert_eq!(response.status().as_u16(), 200);

    let Ok(response) = client
        .get(format!("http://{addr}/api-docs/openapi.json"))
        .send()
        .await
    else {
        panic!("openapi request failed");
    };
    assert_eq!(response.status().as_u16(), 200);
    let doc = json_body(response).await;
    assert!(doc["paths"].get("/api/v1/books").is_some());
}
