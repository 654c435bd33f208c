use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::core::IndicesError;
use crate::watchlist::connection::Connector;
use crate::watchlist::store::{DocumentStore, StoreFuture, UserDocument, WatchlistEntry};

/// Both collections as one JSON document: `{"users": [...], "watchlist": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<UserDocument>,
    #[serde(default)]
    pub watchlist: Vec<WatchlistEntry>,
}

/// An in-process document store.
///
/// Clones share the same collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl MemoryStore {
    /// An empty store with no users and no watchlist entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the collections in `snapshot`.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Parse a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`IndicesError::Data`] if the document does not match the snapshot layout.
    pub fn from_json_str(json: &str) -> Result<Self, IndicesError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| IndicesError::Data(format!("snapshot json parse: {e}")))?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Read and parse a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`IndicesError::Io`] if the file cannot be read, or [`IndicesError::Data`] if it
    /// cannot be parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, IndicesError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json_str(&raw)
    }

    /// A copy of the current collections.
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.clone()
    }

    /// Append `user` to the `users` collection.
    ///
    /// Earlier users with the same email still win lookups.
    pub async fn insert_user(&self, user: UserDocument) {
        self.inner.write().await.users.push(user);
    }

    /// Add `symbol` to the user's watchlist. Returns `false` if it was already there.
    pub async fn add_symbol(
        &self,
        user_id: &str,
        symbol: &str,
        company: Option<&str>,
    ) -> bool {
        let symbol = symbol.trim().to_uppercase();
        let mut guard = self.inner.write().await;
        if guard
            .watchlist
            .iter()
            .any(|e| e.user_id == user_id && e.symbol == symbol)
        {
            return false;
        }
        guard.watchlist.push(WatchlistEntry {
            user_id: user_id.to_string(),
            symbol,
            company: company.map(str::to_string),
            added_at: Some(Utc::now()),
        });
        true
    }

    /// Remove `symbol` from the user's watchlist. Returns `false` if it was not there.
    pub async fn remove_symbol(&self, user_id: &str, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        let mut guard = self.inner.write().await;
        let before = guard.watchlist.len();
        guard
            .watchlist
            .retain(|e| !(e.user_id == user_id && e.symbol == symbol));
        guard.watchlist.len() != before
    }
}

impl DocumentStore for MemoryStore {
    fn find_user_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<UserDocument>> {
        Box::pin(async move {
            let guard = self.inner.read().await;
            Ok(guard.users.iter().find(|u| u.email == email).cloned())
        })
    }

    fn find_watchlist_symbols<'a>(&'a self, user_id: &'a str) -> StoreFuture<'a, Vec<String>> {
        Box::pin(async move {
            let guard = self.inner.read().await;
            Ok(guard
                .watchlist
                .iter()
                .filter(|e| e.user_id == user_id)
                .map(|e| e.symbol.clone())
                .collect())
        })
    }
}

/// Connecting to a `MemoryStore` hands out a shared clone.
impl Connector for MemoryStore {
    type Store = Self;

    fn connect(&self) -> StoreFuture<'_, Self::Store> {
        let store = self.clone();
        Box::pin(async move { Ok(store) })
    }
}

/// Connects by loading a JSON snapshot file into a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Connector for the JSON snapshot at `path`. The file is read on connect, not here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Connector for SnapshotFile {
    type Store = MemoryStore;

    fn connect(&self) -> StoreFuture<'_, Self::Store> {
        Box::pin(MemoryStore::load(&self.path))
    }
}
