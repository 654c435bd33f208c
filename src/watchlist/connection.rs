use tokio::sync::OnceCell;

use crate::core::IndicesError;
use crate::watchlist::store::{DocumentStore, StoreFuture};

/// Opens a handle to a document store.
pub trait Connector: Send + Sync {
    /// The store handle produced by a successful connect.
    type Store: DocumentStore;

    /// Establishes the connection.
    fn connect(&self) -> StoreFuture<'_, Self::Store>;
}

/// A store handle opened on first use and reused afterwards.
///
/// Concurrent first callers share one connect attempt. A failed attempt is not remembered, so
/// the next caller tries again.
pub struct LazyConnection<C: Connector> {
    connector: C,
    store: OnceCell<C::Store>,
}

impl<C: Connector> LazyConnection<C> {
    /// Wrap `connector` without connecting; the first [`get`](Self::get) opens the store.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            store: OnceCell::new(),
        }
    }

    /// The connected store, connecting now if this is the first use.
    ///
    /// # Errors
    ///
    /// Propagates the connector's error.
    pub async fn get(&self) -> Result<&C::Store, IndicesError> {
        self.store
            .get_or_try_init(|| async {
                tracing::debug!("opening document store connection");
                self.connector.connect().await
            })
            .await
    }

    /// Whether a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.store.initialized()
    }
}

impl<C: Connector + std::fmt::Debug> std::fmt::Debug for LazyConnection<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyConnection")
            .field("connector", &self.connector)
            .field("connected", &self.is_connected())
            .finish()
    }
}
