//! End-to-end integration tests against a mock Sprinklr API.
//!
//! These exercise the full stack through the facade crate: OAuth token
//! exchange, credential handling, resource CRUD, cursor-based search
//! pagination, and reporting queries, all against a wiremock server.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sprinklr_api::auth::{OAuthClient, SprinklrCredentials};
use sprinklr_api::rest::{
    endpoints, EntityType, ReportBuilder, SearchRequest, SprinklrRestClient,
};
use sprinklr_api::Environment;

const API_KEY: &str = "test-api-key";
const SECRET: &str = "test-secret";
const REDIRECT: &str = "https://example.com/callback";

/// Build a REST client pointed at the mock server, carrying the given token.
fn rest_client(server: &MockServer, token: &str) -> SprinklrRestClient {
    SprinklrRestClient::new(API_KEY, token)
        .expect("client should build")
        .with_host(server.uri())
}

#[tokio::test]
async fn oauth_exchange_then_authenticated_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(query_param("grant_type", "authorization_code"))
        .and(query_param("client_id", API_KEY))
        .and(query_param("client_secret", SECRET))
        .and(query_param("code", "the-code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "issued-token",
            "token_type": "Bearer",
            "refresh_token": "issued-refresh"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/me"))
        .and(header("Authorization", "Bearer issued-token"))
        .and(header("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"userId": 42}
        })))
        .mount(&server)
        .await;

    let oauth = OAuthClient::new(API_KEY).with_host(server.uri());
    let tokens = oauth
        .exchange_code(SECRET, REDIRECT, "the-code")
        .await
        .expect("token exchange should succeed");

    let creds = SprinklrCredentials::from_token_response(API_KEY, &tokens);
    assert!(creds.is_valid());
    assert_eq!(creds.refresh_token(), Some("issued-refresh"));

    let client = SprinklrRestClient::from_credentials(&creds)
        .expect("client should build")
        .with_host(server.uri());

    let me = client.current_user().await.expect("me should succeed");
    let body = me.json_value().expect("me should return JSON");
    assert_eq!(body["data"]["userId"], 42);
}

#[tokio::test]
async fn refresh_flow_updates_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(query_param("refresh_token", "old-refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let oauth = OAuthClient::new(API_KEY).with_host(server.uri());
    let refreshed = oauth
        .refresh_token(SECRET, REDIRECT, "old-refresh")
        .await
        .expect("refresh should succeed");

    let mut creds = SprinklrCredentials::new(API_KEY, "stale-token")
        .with_refresh_token("old-refresh");
    creds.update_from(&refreshed);

    assert_eq!(creds.access_token(), "fresh-token");
    // A refresh response without a new refresh token keeps the old one.
    assert_eq!(creds.refresh_token(), Some("old-refresh"));
}

#[tokio::test]
async fn search_paginates_with_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/search/CASE"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "cursor": "page-2",
                "searchResults": [{"id": 1}, {"id": 2}]
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/search/CASE"))
        .and(query_param("id", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "searchResults": [{"id": 3}]
            }
        })))
        .mount(&server)
        .await;

    let client = rest_client(&server, "tok");
    let request = SearchRequest::new(json!({"filterType": "IN", "field": "status"}));

    let first = client
        .search(EntityType::Case, &request)
        .await
        .expect("first page should succeed");
    assert!(first.has_next());
    assert_eq!(first.result()["data"]["searchResults"][0]["id"], 1);

    let second = client
        .search_next(&first)
        .await
        .expect("second page should succeed");
    assert!(!second.has_next());
    assert_eq!(second.result()["data"]["searchResults"][0]["id"], 3);

    // Exhausted page fails locally without touching the network.
    let requests_before = server.received_requests().await.unwrap().len();
    let err = client.search_next(&second).await.unwrap_err();
    assert!(err.is_no_active_cursor());
    assert_eq!(err.status_code(), -1);
    let requests_after = server.received_requests().await.unwrap().len();
    assert_eq!(requests_before, requests_after);
}

#[tokio::test]
async fn report_query_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/reports/query"))
        .and(body_partial_json(json!({
            "reportingEngine": "LISTENING",
            "report": "SPRINKSIGHTS",
            "page": 0,
            "pageSize": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [["MENTIONS", 1234]]
        })))
        .mount(&server)
        .await;

    let client = rest_client(&server, "tok");

    let mut builder = ReportBuilder::new();
    builder
        .set_engine("listening")
        .expect("engine name should parse");
    builder
        .set_name("SPRINKSIGHTS")
        .set_start_time(1_696_118_400_000)
        .set_end_time(1_696_204_800_000)
        .set_time_zone("UTC");

    let report = client
        .fetch_report(&builder.build())
        .await
        .expect("report query should succeed");
    let body = report.json_value().expect("report should return JSON");
    assert_eq!(body["rows"][0][0], "MENTIONS");
}

#[tokio::test]
async fn resource_crud_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/case"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "c-1", "subject": "hello"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/case/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "c-1", "subject": "hello"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/case/c-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = rest_client(&server, "tok");

    let created = client
        .create(&endpoints::CASE, &json!({"subject": "hello"}))
        .await
        .expect("create should succeed");
    let id = created.json_value().expect("json body")["data"]["id"]
        .as_str()
        .expect("id should be present")
        .to_string();

    let fetched = client
        .fetch(&endpoints::CASE, &id)
        .await
        .expect("fetch should succeed");
    assert_eq!(fetched.json_value().expect("json body")["data"]["subject"], "hello");

    let deleted = client
        .delete(&endpoints::CASE, &id)
        .await
        .expect("delete should succeed");
    assert!(deleted.is_ok());
    assert_eq!(deleted.status(), 204);
}

#[tokio::test]
async fn environment_prefixes_api_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sandbox/api/v2/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = SprinklrRestClient::new(API_KEY, "tok")
        .expect("client should build")
        .with_host(server.uri())
        .with_environment(Environment::Sandbox);

    client
        .current_user()
        .await
        .expect("sandbox-prefixed request should succeed");
}

#[tokio::test]
async fn transport_failure_reports_synthetic_status() {
    // Nothing listens here; connection is refused.
    let client = SprinklrRestClient::new(API_KEY, "tok")
        .expect("client should build")
        .with_host("http://127.0.0.1:1");

    let err = client.current_user().await.unwrap_err();
    assert_eq!(err.status_code(), -1);
}
