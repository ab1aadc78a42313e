//! Integration tests for the offset pagination trampoline.
//!
//! These tests verify page advancement, termination, visitor ordering and
//! early exit against a mock Ecwid server.

mod common;

use common::{client_for, product_page, store_path};
use ecwid_api::rest::{pagination, Filter, ResourceError, RestResource};
use ecwid_api::Product;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn filter_with(pairs: &[(&str, &str)]) -> Filter {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[tokio::test]
async fn test_empty_result_set_visits_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(store_path("products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0, "count": 0, "offset": 0, "limit": 100, "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut visits = 0;
    Product::trampoline::<_, _, ResourceError>(&client, &Filter::new(), |_, _| {
        visits += 1;
        async { Ok(()) }
    })
    .await
    .unwrap();

    assert_eq!(visits, 0);
}

#[tokio::test]
async fn test_walks_every_page_in_order() {
    let server = MockServer::start().await;
    for (offset, count) in [(0, 10), (10, 10), (20, 5)] {
        Mock::given(method("GET"))
            .and(path(store_path("products")))
            .and(query_param("offset", offset.to_string()))
            .and(query_param("limit", "10"))
            .and(header("Authorization", "Bearer secret_token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(product_page(25, offset, 10, offset + 1, count)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let filter = filter_with(&[("offset", "0"), ("limit", "10")]);

    let mut seen = Vec::new();
    Product::trampoline::<_, _, ResourceError>(&client, &filter, |index, product| {
        seen.push((index, product.id));
        async { Ok(()) }
    })
    .await
    .unwrap();

    assert_eq!(seen.len(), 25);
    for (position, (index, id)) in seen.iter().enumerate() {
        assert_eq!(*index, position);
        assert_eq!(*id, Some(position as u64 + 1));
    }
    assert_eq!(filter.get("offset"), Some(&"0".to_string()));
}

#[tokio::test]
async fn test_short_page_with_more_remaining_fetches_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(store_path("products")))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(5, 0, 100, 1, 3)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(store_path("products")))
        .and(query_param("offset", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(5, 3, 100, 4, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut ids = Vec::new();
    pagination::trampoline::<Product, _, _, ResourceError>(
        &client,
        &filter_with(&[("offset", "0")]),
        |_, product| {
            ids.push(product.id);
            async { Ok(()) }
        },
    )
    .await
    .unwrap();

    assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4), Some(5)]);
}

#[tokio::test]
async fn test_visitor_error_stops_before_next_page() {
    #[derive(Debug, PartialEq)]
    enum VisitError {
        Stop(usize),
        Api(String),
    }

    impl From<ResourceError> for VisitError {
        fn from(error: ResourceError) -> Self {
            Self::Api(error.to_string())
        }
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(store_path("products")))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(25, 0, 10, 1, 10)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(store_path("products")))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(25, 10, 10, 11, 10)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut calls = 0;
    let result = Product::trampoline(
        &client,
        &filter_with(&[("offset", "0"), ("limit", "10")]),
        |index, _| {
            calls += 1;
            let outcome = if index == 6 {
                Err(VisitError::Stop(index))
            } else {
                Ok(())
            };
            async move { outcome }
        },
    )
    .await;

    assert_eq!(result, Err(VisitError::Stop(6)));
    assert_eq!(calls, 7);
}

#[tokio::test]
async fn test_search_failure_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(store_path("products")))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"errorMessage": "Token is invalid"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = Product::trampoline::<_, _, ResourceError>(&client, &Filter::new(), |_, _| async {
        Ok(())
    })
    .await;

    match result {
        Err(ResourceError::Http(error)) => assert_eq!(error.status(), Some(403)),
        other => panic!("expected HTTP error, got {other:?}"),
    }
}
