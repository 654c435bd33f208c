//! Public client surface + builder.
//! Internals are split into `cache` (TTL response cache) and `constants` (UA, endpoints, env keys).

mod cache;
mod constants;

pub use cache::CacheMode;

use crate::core::IndicesError;
use cache::CacheStore;
use constants::{
    API_KEY_PARAM, DEFAULT_BASE_URL, ENV_API_KEY, ENV_API_KEY_FALLBACK, ENV_BASE_URL, NEWS_PATH,
    USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Massive market-data REST API.
///
/// Cheap to clone; clones share the HTTP connection pool and the response cache.
#[derive(Clone)]
pub struct MassiveClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    cache: Option<Arc<CacheStore>>,
}

impl std::fmt::Debug for MassiveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MassiveClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("cache", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl MassiveClient {
    /// Create a new builder.
    pub fn builder() -> MassiveClientBuilder {
        MassiveClientBuilder::default()
    }

    /// Build a client configured from the process environment.
    ///
    /// Reads `MASSIVE_API_KEY` (falling back to `NEXT_PUBLIC_MASSIVE_API_KEY`) and the optional
    /// `MASSIVE_BASE_URL`. A missing key is not an error here; requests fail with
    /// [`IndicesError::MissingApiKey`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if `MASSIVE_BASE_URL` is set but is not a valid URL, or if the HTTP
    /// client cannot be constructed.
    pub fn from_env() -> Result<Self, IndicesError> {
        Self::builder()
            .env_with(|key| std::env::var(key).ok())?
            .build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Whether the in-memory response cache is enabled.
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// URL of the reference news endpoint with the API key attached.
    pub(crate) fn news_url(&self) -> Result<Url, IndicesError> {
        let key = self.api_key.as_deref().ok_or(IndicesError::MissingApiKey)?;
        let mut url = self.base_url.join(NEWS_PATH)?;
        url.query_pairs_mut().append_pair(API_KEY_PARAM, key);
        Ok(url)
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        self.cache.as_ref()?.get(url.as_str()).await
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        if let Some(store) = &self.cache {
            store.put(url.as_str(), body, ttl_override).await;
        }
    }
}

/// Render a URL for logs and errors with the API key masked.
pub(crate) fn redact(url: &Url) -> String {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MassiveClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl MassiveClientBuilder {
    /// Set the API key sent as the `apiKey` query parameter. Blank keys count as absent.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    /// Override the API base (e.g., `https://api.massive.com/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled. Per-request cache hints override the default.
    #[must_use]
    pub const fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Fill the API key and base URL from an environment lookup.
    ///
    /// Values already set on the builder are kept.
    ///
    /// # Errors
    ///
    /// Returns [`IndicesError::Url`] if the base URL override cannot be parsed.
    pub fn env_with<F>(mut self, lookup: F) -> Result<Self, IndicesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.api_key.is_none()
            && let Some(key) = lookup(ENV_API_KEY).or_else(|| lookup(ENV_API_KEY_FALLBACK))
        {
            self = self.api_key(key);
        }
        if self.base_url.is_none()
            && let Some(raw) = lookup(ENV_BASE_URL)
        {
            self.base_url = Some(Url::parse(&raw)?);
        }
        Ok(self)
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<MassiveClient, IndicesError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        // `Url::join` replaces the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MassiveClient {
            http,
            base_url,
            api_key: self.api_key,
            cache: self.cache_ttl.map(|ttl| Arc::new(CacheStore::new(ttl))),
        })
    }
}
