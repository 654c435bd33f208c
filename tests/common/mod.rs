#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use indices_rs::MassiveClient;
use std::{fs, path::Path, time::Duration};
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> MassiveClient {
    MassiveClient::builder()
        .api_key(API_KEY)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

pub fn cached_client_for(server: &MockServer) -> MassiveClient {
    MassiveClient::builder()
        .api_key(API_KEY)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap()
}

pub fn mock_ticker_news<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/reference/news")
            .query_param("ticker", symbol)
            .query_param("limit", "5")
            .query_param("apiKey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_reference", symbol, "json"));
    })
}

pub fn mock_general_news(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/reference/news")
            .query_param("limit", "20")
            .query_param("apiKey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_reference", "GENERAL", "json"));
    })
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("INDICES_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("INDICES_RECORD").ok().as_deref() == Some("1")
}
