//! Pure selection helpers for the aggregator. No I/O happens here.

use std::collections::HashSet;

use crate::news::{Article, NewsItem};

/// Trim and uppercase every symbol, dropping the ones that end up empty.
pub fn normalize_symbols<S: AsRef<str>>(symbols: &[S]) -> Vec<String> {
    symbols
        .iter()
        .map(|s| s.as_ref().trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The symbol visited in each of `rounds` rounds, cycling through `symbols`.
///
/// Yields nothing when `symbols` is empty.
pub fn round_robin(symbols: &[String], rounds: usize) -> impl Iterator<Item = &str> + '_ {
    symbols.iter().cycle().take(rounds).map(String::as_str)
}

/// The first displayable article whose id has not been seen yet, in the given order.
pub fn first_fresh<'a>(articles: &'a [Article], seen: &HashSet<String>) -> Option<&'a Article> {
    articles
        .iter()
        .find(|a| a.is_displayable() && !seen.contains(&a.id))
}

/// Filter a general-news page down to at most `max` displayable, unique items in input order.
pub fn collect_general(articles: Vec<Article>, max: usize) -> Vec<NewsItem> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|a| a.is_displayable() && seen.insert(a.id.clone()))
        .take(max)
        .map(NewsItem::from)
        .collect()
}

/// Most recent first. Equal timestamps keep their collection order.
pub fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.datetime.cmp(&a.datetime));
}
