use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) error: Option<String>,
    pub(crate) results: Option<Vec<ArticleNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) article_url: Option<String>,
    pub(crate) published_utc: Option<String>,
    pub(crate) image_url: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) tickers: Option<Vec<String>>,
    pub(crate) publisher: Option<PublisherNode>,
}

#[derive(Deserialize)]
pub(crate) struct PublisherNode {
    pub(crate) name: Option<String>,
    pub(crate) homepage_url: Option<String>,
    pub(crate) logo_url: Option<String>,
}
