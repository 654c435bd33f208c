use httpmock::Method::GET;
use httpmock::MockServer;
use indices_rs::{IndicesError, MassiveClient, NewsQuery, NewsService, get_news};
use std::time::Duration;
use url::Url;

use crate::common::{API_KEY, client_for};

#[tokio::test]
async fn news_returns_status_error_with_redacted_url() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/reference/news")
            .query_param("ticker", "FAIL");
        then.status(401).body(r#"{"status":"ERROR","error":"Unknown API Key"}"#);
    });

    let client = client_for(&server);
    let query = NewsQuery::ticker("FAIL", 5, Duration::from_secs(60));
    let err = client.fetch_articles(&query).await.unwrap_err();
    mock.assert();

    match err {
        IndicesError::Status { status, url } => {
            assert_eq!(status, 401);
            assert!(url.contains("/v2/reference/news"));
            assert!(url.contains("ticker=FAIL"));
            assert!(!url.contains(API_KEY));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_errors_do_not_leak_the_api_key() {
    const SECRET: &str = "SECRETKEY123";

    // nothing listens on port 1, so the connect fails before any status is seen
    let client = MassiveClient::builder()
        .api_key(SECRET)
        .base_url(Url::parse("http://127.0.0.1:1/").unwrap())
        .build()
        .unwrap();

    let query = NewsQuery::general(20, Duration::from_secs(60));
    let err = client.fetch_articles(&query).await.unwrap_err();
    assert!(matches!(err, IndicesError::Http(_)), "got {err:?}");
    assert!(!err.to_string().contains(SECRET));
    assert!(!format!("{err:?}").contains(SECRET));

    let err = get_news::<_, &str>(&client, &[]).await.unwrap_err();
    match &err {
        IndicesError::NewsFetch { source } => {
            assert!(!source.to_string().contains(SECRET));
            assert!(!format!("{source:?}").contains(SECRET));
        }
        other => panic!("expected NewsFetch, got {other:?}"),
    }
}
