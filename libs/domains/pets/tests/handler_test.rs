//! Handler tests for Pets domain
//!
//! These tests drive the pets router directly with the in-memory repository:
//! - Request deserialization (JSON → Rust structs)
//! - Envelope serialization and HTTP status codes
//! - Extractor rejections (bad ids, bad JSON)

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_pets::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = PetService::new(InMemoryPetRepository::new());
    handlers::router(PetOrchestrator::new(service))
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_pet_returns_201_envelope() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");
    let name = builder.name("pet", "create");

    let body = create(
        &app,
        json!({
            "name": name,
            "species": builder.species(),
            "age": builder.age(),
            "imageUrl": "https://example.com/pet.png"
        }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Pet created successfully.");
    assert_eq!(body["data"]["name"], name.as_str());
    assert_eq!(body["data"]["imageUrl"], "https://example.com/pet.png");
    assert_eq!(body["data"]["isAvailable"], true);
    assert_eq!(body["data"]["createdAt"], body["data"]["updatedAt"]);
}

#[tokio::test]
async fn test_create_pet_validation_failure_is_400() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "", "species": "Dog", "age": 51, "imageUrl": "nope"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation failed");
    assert!(body.get("success").is_none());
    for field in ["name", "age", "imageUrl"] {
        assert!(body["errors"][field].is_array(), "missing errors for {field}");
    }
    assert!(body["errors"].get("species").is_none());
}

#[tokio::test]
async fn test_create_pet_null_name_is_validation_failure() {
    let response = app()
        .oneshot(json_request("POST", "/", json!({"name": null, "species": "Dog"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation failed");
    assert!(body.get("code").is_none());
    assert_eq!(body["errors"]["name"][0], "Name is required.");
    assert!(body["errors"].get("species").is_none());
}

#[tokio::test]
async fn test_create_pet_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid or missing request body");
}

#[tokio::test]
async fn test_create_pet_missing_body_is_400() {
    let response = app().oneshot(empty_request("POST", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_pet_not_found_is_404() {
    let response = app().oneshot(empty_request("GET", "/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"success": false, "error": "Pet with ID 42 not found."})
    );
}

#[tokio::test]
async fn test_get_pet_non_positive_id_is_400() {
    let response = app().oneshot(empty_request("GET", "/0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Invalid pet ID. Must be a positive integer.");
}

#[tokio::test]
async fn test_get_pet_non_integer_id_is_400() {
    let response = app().oneshot(empty_request("GET", "/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["code"], "INVALID_ID");
}

#[tokio::test]
async fn test_list_pets_pages_and_falls_back_on_bad_params() {
    let app = app();
    for name in ["A", "B", "C"] {
        create(&app, json!({"name": name, "species": "Cat"})).await;
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?limit=2&offset=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["limit"], 2);
    assert_eq!(body["data"]["offset"], 1);
    assert_eq!(body["data"]["pets"][0]["name"], "B");

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?limit=many&offset=x"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["limit"], 100);
    assert_eq!(body["data"]["offset"], 0);
    assert_eq!(body["data"]["count"], 3);
}

#[tokio::test]
async fn test_list_pets_out_of_range_is_400() {
    let app = app();
    for (query, error) in [
        ("/?limit=0", "Invalid limit. Must be between 1 and 1000."),
        ("/?limit=1001", "Invalid limit. Must be between 1 and 1000."),
        ("/?offset=-1", "Invalid offset. Must be 0 or greater."),
    ] {
        let response = app
            .clone()
            .oneshot(empty_request("GET", query))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{query}");
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], error);
    }
}

#[tokio::test]
async fn test_update_missing_pet_is_404() {
    let response = app()
        .oneshot(json_request("PUT", "/7", json!({"age": 3})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_validation_failure_is_400() {
    let app = app();
    let created = create(&app, json!({"name": "Max", "species": "Dog"})).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request("PUT", &format!("/{id}"), json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert!(body["errors"]["name"].is_array());
}

#[tokio::test]
async fn test_update_null_clears_reference_field() {
    let app = app();
    let created = create(
        &app,
        json!({"name": "Max", "species": "Dog", "color": "brown", "breed": "Beagle"}),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request("PUT", &format!("/{id}"), json!({"color": null})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert!(body["data"]["color"].is_null());
    assert_eq!(body["data"]["breed"], "Beagle");
}

#[tokio::test]
async fn test_delete_missing_pet_is_404() {
    let response = app().oneshot(empty_request("DELETE", "/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Pet with ID 9 not found.");
}

#[tokio::test]
async fn test_delete_non_positive_id_is_400() {
    let response = app().oneshot(empty_request("DELETE", "/-3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_max_the_dog_over_http() {
    let app = app();

    let created = create(&app, json!({"name": "Max", "species": "Dog", "age": 5})).await;
    assert_eq!(created["data"]["name"], "Max");
    assert_eq!(created["data"]["age"], 5);
    assert!(created["data"]["breed"].is_null());
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/{id}");

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({"age": 6})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Pet updated successfully.");
    assert_eq!(body["data"]["age"], 6);
    assert_eq!(body["data"]["name"], "Max");

    let response = app
        .clone()
        .oneshot(json_request("PUT", &uri, json!({"breed": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["breed"], "");

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
