//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ecwid_api::{AccessToken, ApiUrl, EcwidConfig, RestClient, StoreId};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const STORE_ID: u64 = 1003;

/// Creates a configuration pointing at the mock server.
pub fn config_for(server: &MockServer) -> EcwidConfig {
    EcwidConfig::builder()
        .store_id(StoreId::new(STORE_ID).unwrap())
        .access_token(AccessToken::new("secret_token").unwrap())
        .api_url(ApiUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

/// Creates a REST client pointing at the mock server.
pub fn client_for(server: &MockServer) -> RestClient {
    RestClient::new(&config_for(server))
}

/// Builds the store-scoped path the mock server sees.
pub fn store_path(resource: &str) -> String {
    format!("/{STORE_ID}/{resource}")
}

/// Builds a search page of products whose IDs run from `first_id`.
pub fn product_page(total: u64, offset: u64, limit: u64, first_id: u64, count: u64) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            let id = first_id + i;
            json!({ "id": id, "name": format!("Product {id}"), "sku": format!("SKU-{id}") })
        })
        .collect();

    json!({
        "total": total,
        "count": count,
        "offset": offset,
        "limit": limit,
        "items": items
    })
}
