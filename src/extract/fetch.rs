use std::time::Duration;

use url::Url;

/// Error raised while retrieving a page or polling a URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed in transport (DNS, connect, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The URL that was requested.
        url: Url,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The target page answered with an error status.
    #[error("{url} answered with status {status}")]
    Status {
        /// The URL that was requested.
        url: Url,
        /// The HTTP status code received.
        status: u16,
    },
}

/// Retrieves pages and polls URL health.
///
/// Checks depend on this trait rather than a concrete client so they can run
/// against canned HTML without a network.
pub trait Fetcher {
    /// Fetches the body of the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure or a non-success status.
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;

    /// Issues an HTTP HEAD request and returns the status code.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when no response arrives at all;
    /// error statuses are returned as values so callers can report them.
    fn head_status(&self, url: &Url) -> Result<u16, FetchError>;
}

/// [`Fetcher`] backed by a blocking HTTP client.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the given request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the underlying client cannot be
    /// constructed.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })
    }

    fn head_status(&self, url: &Url) -> Result<u16, FetchError> {
        let response =
            self.client
                .head(url.clone())
                .send()
                .map_err(|source| FetchError::Transport {
                    url: url.clone(),
                    source,
                })?;
        Ok(response.status().as_u16())
    }
}
