//! Ticker news aggregation.
//!
//! With symbols, the aggregator walks them round-robin for a fixed number of rounds, taking at
//! most one fresh article per round, and returns the result newest first. Without symbols it
//! takes one page of general market news and keeps the upstream order.

mod api;
mod model;
pub mod select;
mod wire;

pub use model::{Article, NewsItem, Publisher};

use std::collections::HashSet;
use std::time::Duration;

use crate::core::{CacheMode, IndicesError, MassiveClient, NewsQuery, NewsService};

/// Upper bound on items returned by either path.
pub const MAX_ITEMS: usize = 6;
/// Number of per-symbol requests made in the symbol-driven path.
pub const MAX_ROUNDS: usize = 6;
/// Articles requested per symbol.
pub const PER_SYMBOL_LIMIT: u32 = 5;
/// Articles requested for general market news.
pub const GENERAL_LIMIT: u32 = 20;
/// Cache lifetime hint for per-symbol responses.
pub const SYMBOL_CACHE_TTL: Duration = Duration::from_secs(60 * 60);
/// Cache lifetime hint for the general news response.
pub const GENERAL_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Fetch news for `symbols`, or general market news when `symbols` is empty.
///
/// Symbols are trimmed and uppercased; blank entries are dropped before the round-robin, so
/// `["AAPL", " "]` only queries AAPL and a list of nothing but blanks takes the general path.
///
/// # Errors
///
/// Returns [`IndicesError::MissingApiKey`] before any request if the service is not configured.
/// For general news, any other failure is reported as [`IndicesError::NewsFetch`]. Failures for
/// individual symbols are logged and skipped, never returned.
pub async fn get_news<N, S>(service: &N, symbols: &[S]) -> Result<Vec<NewsItem>, IndicesError>
where
    N: NewsService + ?Sized,
    S: AsRef<str>,
{
    aggregate(service, symbols, CacheMode::Use).await
}

#[tracing::instrument(skip(service, symbols), fields(count = symbols.len()))]
async fn aggregate<N, S>(
    service: &N,
    symbols: &[S],
    cache_mode: CacheMode,
) -> Result<Vec<NewsItem>, IndicesError>
where
    N: NewsService + ?Sized,
    S: AsRef<str>,
{
    service.ensure_configured()?;

    let symbols = select::normalize_symbols(symbols);
    if symbols.is_empty() {
        return general_news(service, cache_mode).await;
    }
    Ok(symbol_news(service, &symbols, cache_mode).await)
}

async fn symbol_news<N>(service: &N, symbols: &[String], cache_mode: CacheMode) -> Vec<NewsItem>
where
    N: NewsService + ?Sized,
{
    let mut items: Vec<NewsItem> = Vec::with_capacity(MAX_ITEMS);
    let mut seen: HashSet<String> = HashSet::new();

    for (round, symbol) in select::round_robin(symbols, MAX_ROUNDS).enumerate() {
        let query = NewsQuery::ticker(symbol, PER_SYMBOL_LIMIT, SYMBOL_CACHE_TTL)
            .with_cache_mode(cache_mode);

        match service.fetch_articles(&query).await {
            Ok(articles) => {
                if let Some(article) = select::first_fresh(&articles, &seen) {
                    seen.insert(article.id.clone());
                    items.push(NewsItem::from(article.clone()));
                } else {
                    tracing::debug!(round, symbol, "no fresh article");
                }
            }
            Err(e) => {
                tracing::warn!(round, symbol, error = %e, "news fetch failed; skipping symbol");
            }
        }

        if items.len() >= MAX_ITEMS {
            break;
        }
    }

    select::sort_newest_first(&mut items);
    items
}

async fn general_news<N>(service: &N, cache_mode: CacheMode) -> Result<Vec<NewsItem>, IndicesError>
where
    N: NewsService + ?Sized,
{
    let query = NewsQuery::general(GENERAL_LIMIT, GENERAL_CACHE_TTL).with_cache_mode(cache_mode);
    let articles = service.fetch_articles(&query).await.map_err(|e| {
        tracing::error!(error = %e, "general market news fetch failed");
        IndicesError::news_fetch(e)
    })?;
    Ok(select::collect_general(articles, MAX_ITEMS))
}

/// A builder for fetching aggregated news through a [`MassiveClient`].
#[derive(Clone)]
pub struct NewsBuilder {
    client: MassiveClient,
    symbols: Vec<String>,
    cache_mode: CacheMode,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` that fetches general market news until symbols are added.
    pub fn new(client: &MassiveClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the ticker symbols to aggregate news for.
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the cache mode for the requests made by this call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Executes the aggregation.
    ///
    /// # Errors
    ///
    /// Same as [`get_news`].
    pub async fn fetch(self) -> Result<Vec<NewsItem>, IndicesError> {
        aggregate(&self.client, &self.symbols, self.cache_mode).await
    }
}
