use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::core::{CacheMode, IndicesError};
use crate::news::Article;

/// Boxed `Send` future returned by [`NewsService::fetch_articles`].
pub type NewsFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Article>, IndicesError>> + Send + 'a>>;

/// Parameters for a single call to the reference news endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    /// Restrict results to articles tagged with this ticker. `None` queries general market news.
    pub ticker: Option<String>,
    /// Maximum number of articles to request.
    pub limit: u32,
    /// How long the response may be served from cache.
    pub cache_ttl: Duration,
    /// How the client cache is consulted for this call.
    pub cache_mode: CacheMode,
}

impl NewsQuery {
    /// A query for articles tagged with `ticker`.
    pub fn ticker(ticker: impl Into<String>, limit: u32, cache_ttl: Duration) -> Self {
        Self {
            ticker: Some(ticker.into()),
            limit,
            cache_ttl,
            cache_mode: CacheMode::Use,
        }
    }

    /// A query for general market news.
    pub const fn general(limit: u32, cache_ttl: Duration) -> Self {
        Self {
            ticker: None,
            limit,
            cache_ttl,
            cache_mode: CacheMode::Use,
        }
    }

    /// Replace the cache mode.
    #[must_use]
    pub const fn with_cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }
}

/// A source of news articles.
///
/// The aggregator in [`crate::news`] is written against this trait so it can be driven by
/// [`crate::MassiveClient`] in production and by in-process fakes in tests.
pub trait NewsService: Send + Sync {
    /// Fails fast when the service cannot issue requests at all (e.g. no API key).
    ///
    /// # Errors
    ///
    /// Returns [`IndicesError::MissingApiKey`] or another configuration error.
    fn ensure_configured(&self) -> Result<(), IndicesError>;

    /// Fetches one page of articles, in the order the upstream returns them.
    fn fetch_articles<'a>(&'a self, query: &'a NewsQuery) -> NewsFuture<'a>;
}
