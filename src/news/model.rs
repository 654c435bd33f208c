use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outlet that published an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    /// Display name (e.g., "Benzinga", "The Motley Fool").
    pub name: Option<String>,
    /// The publisher's home page.
    pub homepage_url: Option<String>,
    /// A logo image for the publisher.
    pub logo_url: Option<String>,
}

/// A news article as returned by the reference news endpoint.
///
/// Every field the upstream may omit is optional; only `id` is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Upstream identifier, used for deduplication.
    pub id: String,
    /// The headline.
    pub title: Option<String>,
    /// The byline, when present.
    pub author: Option<String>,
    /// Link to the full article.
    pub article_url: Option<String>,
    /// Publication time.
    pub published_utc: Option<DateTime<Utc>>,
    /// Lead image.
    pub image_url: Option<String>,
    /// Short description or teaser.
    pub description: Option<String>,
    /// Tickers the article is tagged with.
    pub tickers: Vec<String>,
    /// Publisher details.
    pub publisher: Option<Publisher>,
}

impl Article {
    /// True when the article has both a non-empty title and a non-empty link.
    pub fn is_displayable(&self) -> bool {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.is_empty());
        filled(&self.title) && filled(&self.article_url)
    }
}

/// A normalized news entry ready to be rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Source-assigned identifier, unique within one result set.
    pub id: String,
    /// The headline.
    pub headline: String,
    /// Link to the full article.
    pub url: String,
    /// Publication time as a Unix timestamp in seconds (0 when unknown).
    pub datetime: i64,
    /// Lead image URL; empty when the article has none.
    pub image: String,
    /// Short summary; empty when the article has none.
    pub summary: String,
    /// Publisher display name; empty when unknown.
    pub source: String,
    /// Tickers the article is tagged with.
    pub tickers: Vec<String>,
}

impl From<Article> for NewsItem {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            headline: a.title.unwrap_or_default(),
            url: a.article_url.unwrap_or_default(),
            datetime: a.published_utc.map_or(0, |t| t.timestamp()),
            image: a.image_url.unwrap_or_default(),
            summary: a.description.unwrap_or_default(),
            source: a.publisher.and_then(|p| p.name).unwrap_or_default(),
            tickers: a.tickers,
        }
    }
}
