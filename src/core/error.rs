use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IndicesError {
    /// No API key was configured for the market news API.
    #[error("missing Massive API key (set MASSIVE_API_KEY)")]
    MissingApiKey,

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with credentials redacted.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The document store failed to connect or to answer a query.
    #[error("document store error: {0}")]
    Store(String),

    /// Reading a local snapshot failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The general market news request failed; the cause is kept as the source.
    #[error("failed to fetch news")]
    NewsFetch {
        /// The underlying failure.
        #[source]
        source: Box<IndicesError>,
    },
}

impl IndicesError {
    pub(crate) fn news_fetch(source: Self) -> Self {
        Self::NewsFetch {
            source: Box::new(source),
        }
    }
}
