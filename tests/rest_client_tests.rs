//! Integration tests for the REST API client functionality.
//!
//! These tests verify the REST client construction, path normalization,
//! error handling, and API method behavior.

mod common;

use std::collections::HashMap;

use common::{client_for, store_path, STORE_ID};
use ecwid_api::clients::RestClient;
use ecwid_api::{AccessToken, EcwidConfig, HttpError, InvalidHttpRequestError, StoreId};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_uses_store_scoped_url() {
    let config = EcwidConfig::builder()
        .store_id(StoreId::new(1003).unwrap())
        .access_token(AccessToken::new("secret_token").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    assert_eq!(client.store_id().get(), 1003);
    assert_eq!(client.base_uri(), "https://app.ecwid.com/api/v3/1003");
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_paths_are_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(store_path("categories/5")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get("/categories/5", None).await.unwrap();
    client.get("categories/5/", None).await.unwrap();
}

#[tokio::test]
async fn test_empty_path_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = client.get("//", None).await;

    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidPath {
            path: ref rejected
        })) if rejected == "//"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_each_method_reaches_the_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(store_path("products")))
        .and(query_param("keyword", "tea"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(store_path("products")))
        .and(body_json(json!({"name": "Tea"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(store_path("products/7")))
        .and(body_json(json!({"price": 3.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updateCount": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(store_path("products/7")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleteCount": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut query = HashMap::new();
    query.insert("keyword".to_string(), "tea".to_string());

    let found = client.get("products", Some(query)).await.unwrap();
    assert_eq!(found.body["total"], 0);

    let added = client.post("products", json!({"name": "Tea"}), None).await.unwrap();
    assert_eq!(added.body["id"], 7);

    let updated = client.put("products/7", json!({"price": 3.5}), None).await.unwrap();
    assert_eq!(updated.body["updateCount"], 1);

    let deleted = client.delete("products/7", None).await.unwrap();
    assert_eq!(deleted.body["deleteCount"], 1);
}

#[tokio::test]
async fn test_empty_query_map_adds_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(store_path("categories")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get("categories", Some(HashMap::new())).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[0].url.path(), format!("/{STORE_ID}/categories"));
}
