use indices_rs::watchlist::{DocumentKey, MemoryStore, SnapshotFile, UserDocument};
use indices_rs::{WatchlistLookup, get_watchlist_symbols_by_email};

const SNAPSHOT: &str = r#"{
  "users": [
    { "id": "42", "_id": { "$oid": "65f0c0ffee0000000000beef" }, "email": "u@x.com", "name": "U" },
    { "_id": { "$oid": "65f0c0ffee0000000000cafe" }, "email": "legacy@x.com" },
    { "email": "ghost@x.com" }
  ],
  "watchlist": [
    { "userId": "42", "symbol": "AAPL", "company": "Apple Inc." },
    { "userId": "7", "symbol": "TSLA" },
    { "userId": "42", "symbol": "MSFT", "company": "Microsoft Corporation" },
    { "userId": "65f0c0ffee0000000000cafe", "symbol": "NVDA" }
  ]
}"#;

#[tokio::test]
async fn symbols_for_known_user_in_storage_order() {
    let store = MemoryStore::from_json_str(SNAPSHOT).unwrap();
    let lookup = WatchlistLookup::new(store);

    let symbols = get_watchlist_symbols_by_email(&lookup, "u@x.com").await;
    assert_eq!(symbols, vec!["AAPL".to_string(), "MSFT".to_string()]);
}

#[tokio::test]
async fn absent_user_yields_empty_list() {
    let store = MemoryStore::from_json_str(SNAPSHOT).unwrap();
    let lookup = WatchlistLookup::new(store);

    assert!(lookup.symbols_by_email("absent@x.com").await.is_empty());
}

#[tokio::test]
async fn primary_key_resolves_users_without_explicit_id() {
    let store = MemoryStore::from_json_str(SNAPSHOT).unwrap();
    let lookup = WatchlistLookup::new(store);

    assert_eq!(lookup.symbols_by_email("legacy@x.com").await, vec!["NVDA".to_string()]);
    assert!(lookup.symbols_by_email("ghost@x.com").await.is_empty());
}

#[tokio::test]
async fn user_with_empty_watchlist() {
    let store = MemoryStore::new();
    store
        .insert_user(UserDocument {
            id: None,
            key: Some(DocumentKey::Number(99)),
            email: "new@x.com".into(),
            name: None,
        })
        .await;
    let lookup = WatchlistLookup::new(store.clone());
    assert!(lookup.symbols_by_email("new@x.com").await.is_empty());

    // writes through the shared store are visible to the lookup
    store.add_symbol("99", "amd", Some("Advanced Micro Devices")).await;
    assert_eq!(lookup.symbols_by_email("new@x.com").await, vec!["AMD".to_string()]);
}

#[tokio::test]
async fn snapshot_file_backs_the_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, SNAPSHOT).unwrap();

    let lookup = WatchlistLookup::new(SnapshotFile::new(&path));
    assert!(!lookup.connection().is_connected());

    let symbols = lookup.symbols_by_email("u@x.com").await;
    assert_eq!(symbols, vec!["AAPL".to_string(), "MSFT".to_string()]);
    assert!(lookup.connection().is_connected());
}

#[tokio::test]
async fn unreadable_snapshot_yields_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let lookup = WatchlistLookup::new(SnapshotFile::new(dir.path().join("missing.json")));

    assert!(lookup.symbols_by_email("u@x.com").await.is_empty());
    assert!(!lookup.connection().is_connected());
}
