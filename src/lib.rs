//! indices-rs: data layer for a market dashboard.
//!
//! - [`news`]: round-robin ticker news aggregation over the Massive reference news API.
//! - [`watchlist`]: a user's watchlist symbols, looked up by email in a document store.
//!
//! ```no_run
//! # async fn demo() -> Result<(), indices_rs::IndicesError> {
//! use indices_rs::{MassiveClient, NewsBuilder};
//!
//! let client = MassiveClient::from_env()?;
//! let items = NewsBuilder::new(&client).symbols(["AAPL", "MSFT"]).fetch().await?;
//! for item in items {
//!     println!("{} {}", item.datetime, item.headline);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod news;
pub mod watchlist;

pub use crate::core::{
    CacheMode, IndicesError, MassiveClient, MassiveClientBuilder, NewsFuture, NewsQuery,
    NewsService,
};
pub use news::{Article, NewsBuilder, NewsItem, Publisher, get_news};
pub use watchlist::{
    Connector, DocumentStore, LazyConnection, MemoryStore, SnapshotFile, UserDocument,
    WatchlistEntry, WatchlistLookup, get_watchlist_symbols_by_email,
};

/// Install a `tracing` subscriber honoring `RUST_LOG` (default `indices_rs=info`).
///
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("indices_rs=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
