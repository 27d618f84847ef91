#![allow(clippy::unwrap_used)]
// Integration tests for `NominatimClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hilal_api::{Error, NominatimClient, TransportConfig};

async fn setup() -> (MockServer, NominatimClient) {
    let server = MockServer::start().await;
    let client = NominatimClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

#[tokio::test]
async fn search_sends_expected_params_and_accept_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("format", "json"))
        .and(query_param("q", "London"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("limit", "10"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "London",
                "display_name": "London, Greater London, England, United Kingdom",
                "address": { "city": "London", "country": "United Kingdom" }
            },
            {
                "name": "London",
                "address": { "town": "London", "country": "Canada" }
            }
        ])))
        .mount(&server)
        .await;

    let results = client.search("London", 10).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].settlement(), Some("London"));
    assert_eq!(results[0].country(), Some("United Kingdom"));
    assert_eq!(results[1].country(), Some("Canada"));
}

#[tokio::test]
async fn empty_result_set_is_ok() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let results = client.search("zzzzzz", 10).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn rate_limited_is_upstream_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let result = client.search("London", 10).await;

    assert!(
        matches!(result, Err(Error::Upstream { status: 429, .. })),
        "expected Upstream 429, got: {result:?}"
    );
}
