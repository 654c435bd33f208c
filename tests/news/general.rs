use indices_rs::{IndicesError, NewsBuilder, get_news};

use crate::common::{client_for, mock_general_news, setup_server};

#[tokio::test]
async fn general_news_filters_and_keeps_upstream_order() {
    let server = setup_server();
    let mock = mock_general_news(&server);
    let client = client_for(&server);

    let items = get_news::<_, &str>(&client, &[]).await.unwrap();
    mock.assert();

    // fixture: 20 articles, three repeated ids, two without a title
    let ids: Vec<&str> = items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        ["gen-00", "gen-03", "gen-07", "gen-08", "gen-09", "gen-10"]
    );
}

#[tokio::test]
async fn builder_without_symbols_uses_general_news() {
    let server = setup_server();
    let mock = mock_general_news(&server);
    let client = client_for(&server);

    let items = NewsBuilder::new(&client).fetch().await.unwrap();
    mock.assert();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].source, "Reuters");
}

#[tokio::test]
async fn general_news_failure_is_generic() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/v2/reference/news")
            .query_param("limit", "20");
        then.status(502).body("bad gateway");
    });
    let client = client_for(&server);

    let err = get_news::<_, &str>(&client, &[]).await.unwrap_err();
    mock.assert();

    assert_eq!(err.to_string(), "failed to fetch news");
    match err {
        IndicesError::NewsFetch { source } => match *source {
            IndicesError::Status { status, .. } => assert_eq!(status, 502),
            other => panic!("expected Status source, got {other:?}"),
        },
        other => panic!("expected NewsFetch, got {other:?}"),
    }
}

#[tokio::test]
async fn general_news_malformed_body_is_generic() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/v2/reference/news");
        then.status(200).body("<html>maintenance</html>");
    });
    let client = client_for(&server);

    let err = get_news::<_, &str>(&client, &[]).await.unwrap_err();
    assert!(matches!(err, IndicesError::NewsFetch { .. }));
}
