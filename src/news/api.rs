use chrono::{DateTime, Utc};

use crate::{
    core::{
        IndicesError, MassiveClient, NewsFuture, NewsQuery, NewsService,
        client::redact,
        net,
    },
    news::{
        model::{Article, Publisher},
        wire,
    },
};

pub(super) async fn fetch_news(
    client: &MassiveClient,
    query: &NewsQuery,
) -> Result<Vec<Article>, IndicesError> {
    let mut url = client.news_url()?;
    {
        let mut qp = url.query_pairs_mut();
        if let Some(t) = &query.ticker {
            qp.append_pair("ticker", t);
        }
        qp.append_pair("limit", &query.limit.to_string());
    }

    if query.cache_mode.reads()
        && let Some(body) = client.cache_get(&url).await
    {
        tracing::debug!(ticker = ?query.ticker, "news served from cache");
        return decode_news(&body);
    }

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    if !resp.status().is_success() {
        return Err(IndicesError::Status {
            status: resp.status().as_u16(),
            url: redact(&url),
        });
    }

    let fixture_key = query.ticker.as_deref().unwrap_or("GENERAL");
    let body = net::get_text(resp, "news_reference", fixture_key, "json")
        .await
        .map_err(reqwest::Error::without_url)?;
    let articles = decode_news(&body)?;

    if query.cache_mode.writes() {
        client.cache_put(&url, &body, Some(query.cache_ttl)).await;
    }

    Ok(articles)
}

pub(crate) fn decode_news(body: &str) -> Result<Vec<Article>, IndicesError> {
    let envelope: wire::NewsEnvelope = serde_json::from_str(body)
        .map_err(|e| IndicesError::Data(format!("news json parse: {e}")))?;

    if envelope.status.as_deref() == Some("ERROR") {
        return Err(IndicesError::Data(format!(
            "news api error: {}",
            envelope.error.as_deref().unwrap_or("unknown")
        )));
    }

    Ok(envelope
        .results
        .unwrap_or_default()
        .into_iter()
        .filter_map(map_article)
        .collect())
}

fn map_article(node: wire::ArticleNode) -> Option<Article> {
    // without an id the article cannot be deduplicated
    let id = node.id.filter(|id| !id.is_empty())?;

    let published_utc = node.published_utc.as_deref().and_then(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .ok()
    });

    Some(Article {
        id,
        title: node.title,
        author: node.author,
        article_url: node.article_url,
        published_utc,
        image_url: node.image_url,
        description: node.description,
        tickers: node.tickers.unwrap_or_default(),
        publisher: node.publisher.map(|p| Publisher {
            name: p.name,
            homepage_url: p.homepage_url,
            logo_url: p.logo_url,
        }),
    })
}

impl NewsService for MassiveClient {
    fn ensure_configured(&self) -> Result<(), IndicesError> {
        if self.has_api_key() {
            Ok(())
        } else {
            Err(IndicesError::MissingApiKey)
        }
    }

    fn fetch_articles<'a>(&'a self, query: &'a NewsQuery) -> NewsFuture<'a> {
        Box::pin(fetch_news(self, query))
    }
}
