use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Method,
};
use tokio::time::sleep;

use crate::{EtherscanError, FetchOptions, Result};

/// One HTTP request to perform through the retry budget.
///
/// Method, headers and body are passed through to the transport untouched.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    /// Target URL.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// Extra request headers.
    pub headers: HeaderMap,
    /// Optional request body text.
    pub body: Option<String>,
}

impl RequestSpec {
    /// Creates a GET request spec.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request spec.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::POST,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Adds a request header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the request body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// HTTP fetcher with a bounded retry budget and fixed backoff.
///
/// Each call performs up to [`FetchOptions::max_retries`] strictly sequential
/// attempts, sleeping [`FetchOptions::backoff_ms`] between failed attempts.
/// An attempt counts as successful only when the transport call completes and
/// the response status is a success; the raw body text is returned verbatim,
/// with no JSON decoding. Intermediate failures are logged and swallowed;
/// the caller only ever sees [`EtherscanError::RetriesExhausted`], wrapping
/// the error from the final attempt.
///
/// The fetcher holds no per-call state and is cheap to clone; concurrent use
/// from multiple call sites needs no synchronization.
#[derive(Clone, Debug)]
pub struct RetryingFetcher {
    http: reqwest::Client,
    options: FetchOptions,
}

impl Default for RetryingFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryingFetcher {
    /// Creates a fetcher with default options.
    pub fn new() -> Self {
        Self::with_options(FetchOptions::default())
    }

    /// Creates a fetcher with the given options.
    pub fn with_options(options: FetchOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    /// Returns the configured options.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Performs the request, retrying until it succeeds or the attempt
    /// budget is spent.
    pub async fn fetch_text(&self, spec: &RequestSpec) -> Result<String> {
        let budget = self.options.max_retries.max(1);
        let mut attempt = 1usize;
        loop {
            match self.attempt(spec).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    tracing::warn!(
                        "attempt {}/{} for {} failed: {}",
                        attempt,
                        budget,
                        spec.url,
                        err
                    );

                    if attempt == budget {
                        return Err(EtherscanError::RetriesExhausted {
                            attempts: budget,
                            source: Box::new(err),
                        });
                    }

                    tracing::debug!("retrying in {} ms", self.options.backoff_ms);
                    sleep(Duration::from_millis(self.options.backoff_ms)).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt(&self, spec: &RequestSpec) -> Result<String> {
        let mut request = self
            .http
            .request(spec.method.clone(), &spec.url)
            .headers(spec.headers.clone())
            .timeout(Duration::from_millis(self.options.timeout_ms));
        if let Some(body) = &spec.body {
            request = request.body(body.clone());
        }

        let response = request.send().await.map_err(EtherscanError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(EtherscanError::Transport)?;

        if !status.is_success() {
            return Err(EtherscanError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
