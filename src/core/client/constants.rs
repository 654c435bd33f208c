//! Centralized constants for default endpoints, UA and environment keys.

/// Identifies the crate to the upstream API.
pub(crate) const USER_AGENT: &str = concat!("indices-rs/", env!("CARGO_PKG_VERSION"));

/// Massive REST API base (endpoint paths are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.massive.com/";

/// Path of the reference news endpoint, relative to the base URL.
pub(crate) const NEWS_PATH: &str = "v2/reference/news";

/// Query parameter carrying the API key.
pub(crate) const API_KEY_PARAM: &str = "apiKey";

/// Primary environment variable holding the API key.
pub(crate) const ENV_API_KEY: &str = "MASSIVE_API_KEY";

/// Name used by the web frontend's build; accepted as a fallback.
pub(crate) const ENV_API_KEY_FALLBACK: &str = "NEXT_PUBLIC_MASSIVE_API_KEY";

/// Optional override of [`DEFAULT_BASE_URL`].
pub(crate) const ENV_BASE_URL: &str = "MASSIVE_BASE_URL";
