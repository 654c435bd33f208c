use indices_rs::{MassiveClient, NewsBuilder};

#[tokio::test]
#[ignore]
async fn live_news_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    // This call will record `tests/fixtures/news_reference_*.json` if INDICES_RECORD=1
    // (requires the `test-mode` feature).
    let client = MassiveClient::from_env().unwrap();
    let items = NewsBuilder::new(&client)
        .symbols(["AAPL", "TSLA"])
        .fetch()
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert!(items.len() <= 6);
        for item in &items {
            assert!(!item.id.is_empty());
            assert!(!item.headline.is_empty());
            assert!(item.datetime > 1_000_000_000);
        }
    }
}

#[tokio::test]
#[ignore]
async fn live_general_news_for_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = MassiveClient::from_env().unwrap();
    let items = NewsBuilder::new(&client).fetch().await.unwrap();
    assert!(items.len() <= 6);
}
