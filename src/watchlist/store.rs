use std::fmt;
use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::IndicesError;

/// Boxed `Send` future returned by the store traits.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, IndicesError>> + Send + 'a>>;

/// Primary key of a stored document.
///
/// Accepts a MongoDB extended-JSON object id (`{"$oid": "..."}`), a plain string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentKey {
    /// `{"$oid": "65f0c0ffee..."}`
    ObjectId {
        /// Hex representation of the id.
        #[serde(rename = "$oid")]
        oid: String,
    },
    /// A string key.
    Text(String),
    /// A numeric key.
    Number(i64),
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectId { oid } => f.write_str(oid),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A document in the `users` collection, owned by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    /// Identity assigned by the auth backend, when it stores one explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The document's primary key.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<DocumentKey>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserDocument {
    /// The canonical user id: the explicit `id` field, else the primary key as a string.
    pub fn user_id(&self) -> Option<String> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| self.key.as_ref().map(ToString::to_string))
            .filter(|id| !id.is_empty())
    }
}

/// A document in the `watchlist` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub user_id: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

/// Read access to the collections the watchlist lookup needs.
pub trait DocumentStore: Send + Sync {
    /// The single user whose `email` equals `email`, if any.
    fn find_user_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<UserDocument>>;

    /// The `symbol` of every watchlist entry owned by `user_id`, in storage order.
    fn find_watchlist_symbols<'a>(&'a self, user_id: &'a str) -> StoreFuture<'a, Vec<String>>;
}
