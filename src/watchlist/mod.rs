//! Watchlist symbols for a signed-in user.
//!
//! Users are resolved by email against the auth service's `users` collection; their symbols
//! come from the `watchlist` collection. Lookups never fail: misses and store errors both
//! produce an empty list.

mod connection;
mod memory;
mod store;

pub use connection::{Connector, LazyConnection};
pub use memory::{MemoryStore, Snapshot, SnapshotFile};
pub use store::{DocumentKey, DocumentStore, StoreFuture, UserDocument, WatchlistEntry};

use crate::core::IndicesError;

/// Resolves watchlist symbols through a lazily opened store connection.
#[derive(Debug)]
pub struct WatchlistLookup<C: Connector> {
    conn: LazyConnection<C>,
}

impl<C: Connector> WatchlistLookup<C> {
    /// Create a lookup over `connector`. No connection is made until the first lookup.
    pub fn new(connector: C) -> Self {
        Self {
            conn: LazyConnection::new(connector),
        }
    }

    /// The underlying connection handle.
    pub fn connection(&self) -> &LazyConnection<C> {
        &self.conn
    }

    /// Symbols on the watchlist of the user registered under `email`, in storage order.
    ///
    /// Returns an empty list when the user does not exist or anything goes wrong.
    #[tracing::instrument(skip(self))]
    pub async fn symbols_by_email(&self, email: &str) -> Vec<String> {
        match self.try_symbols_by_email(email).await {
            Ok(symbols) => symbols,
            Err(e) => {
                tracing::error!(error = %e, "error fetching watchlist symbols by email");
                Vec::new()
            }
        }
    }

    async fn try_symbols_by_email(&self, email: &str) -> Result<Vec<String>, IndicesError> {
        let store = self.conn.get().await?;

        let Some(user) = store.find_user_by_email(email).await? else {
            tracing::info!("user not found for email");
            return Ok(Vec::new());
        };

        let Some(user_id) = user.user_id() else {
            tracing::warn!("user document carries no usable id");
            return Ok(Vec::new());
        };

        store.find_watchlist_symbols(&user_id).await
    }
}

/// Free-function form of [`WatchlistLookup::symbols_by_email`].
pub async fn get_watchlist_symbols_by_email<C: Connector>(
    lookup: &WatchlistLookup<C>,
    email: &str,
) -> Vec<String> {
    lookup.symbols_by_email(email).await
}
