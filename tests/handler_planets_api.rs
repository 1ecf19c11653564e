mod common;

use axum::{Router, http::StatusCode};
use axum_test::TestServer;
use planets::AppState;
use planets::api;
use planets::infrastructure::persistence::InMemoryPlanetRepository;
use serde_json::json;
use std::sync::Arc;

fn setup() -> (TestServer, AppState, Arc<InMemoryPlanetRepository>) {
    common::make_server(Router::new().nest("/api", api::routes::routes()))
}

// ─── LIST / GET ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_planets() {
    let (server, state, _repo) = setup();
    common::create_test_planet(&state, "Mercury", None, None).await;
    common::create_test_planet(&state, "Venus", Some("Hot"), None).await;

    let response = server.get("/api/planets").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Mercury");
    assert_eq!(items[1]["name"], "Venus");
    assert_eq!(items[1]["description"], "Hot");
    assert!(items[0]["description"].is_null());
}

#[tokio::test]
async fn test_get_planet() {
    let (server, state, _repo) = setup();
    let mars = common::create_test_planet(&state, "Mars", None, Some("mars.png")).await;

    let response = server.get(&format!("/api/planets/{}", mars.id)).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], mars.id.value());
    assert_eq!(json["name"], "Mars");
    assert_eq!(json["image"], "mars.png");
    assert!(json.get("created_at").is_some());
    assert!(json.get("updated_at").is_some());
}

#[tokio::test]
async fn test_get_planet_not_found() {
    let (server, _state, _repo) = setup();

    for path in ["/api/planets/404", "/api/planets/abc"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "not_found");
    }
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_planet() {
    let (server, _state, repo) = setup();

    let response = server
        .post("/api/planets")
        .json(&json!({ "name": "Mars", "description": "Red" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "Mars");
    assert_eq!(json["description"], "Red");
    assert!(json["image"].is_null());
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_planet_blank_name() {
    let (server, _state, repo) = setup();

    for name in ["", "   "] {
        let response = server
            .post("/api/planets")
            .json(&json!({ "name": name }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert!(repo.is_empty());
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_planet_field_semantics() {
    let (server, state, _repo) = setup();
    let mars = common::create_test_planet(&state, "Mars", Some("Red"), Some("mars.png")).await;

    let response = server
        .put(&format!("/api/planets/{}", mars.id))
        .json(&json!({ "name": "Earth", "description": null }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], mars.id.value());
    assert_eq!(json["name"], "Earth");
    assert!(json["description"].is_null());
    assert_eq!(json["image"], "mars.png");
}

#[tokio::test]
async fn test_update_planet_not_found() {
    let (server, _state, repo) = setup();

    let response = server
        .put("/api/planets/12")
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_update_planet_blank_name() {
    let (server, state, _repo) = setup();
    let mars = common::create_test_planet(&state, "Mars", None, None).await;

    server
        .put(&format!("/api/planets/{}", mars.id))
        .json(&json!({ "name": " " }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let planet = state.planet_service.get_planet(mars.id).await.unwrap();
    assert_eq!(planet.name, "Mars");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_planet() {
    let (server, state, repo) = setup();
    let mars = common::create_test_planet(&state, "Mars", None, None).await;
    let path = format!("/api/planets/{}", mars.id);

    server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(repo.is_empty());

    server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_unavailable_returns_503() {
    let (server, _state, repo) = setup();
    repo.set_available(false);

    let response = server.get("/api/planets").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "store_unavailable");
}
