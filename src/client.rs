use std::fmt;
use std::path::Path;

use reqwest::Url;
use serde_json::Value;

use crate::{
    abi, decode,
    fetch::{RequestSpec, RetryingFetcher},
    EtherscanError, FetchOptions, Result,
};

/// Formats an explorer API host into the canonical endpoint URL.
///
/// Example: `"api-sepolia.etherscan.io"` → `"https://api-sepolia.etherscan.io/api"`
pub fn host_to_api_url(host: &str) -> String {
    format!("https://{}/api", host.trim())
}

#[derive(Clone)]
/// HTTP client for Etherscan-compatible block-explorer APIs.
pub struct EtherscanClient {
    fetcher: RetryingFetcher,
    api_url: String,
    api_key: String,
}

impl fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtherscanClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("options", self.fetcher.options())
            .finish()
    }
}

impl EtherscanClient {
    /// Creates a client for a full API endpoint URL.
    ///
    /// Example: `"https://api-sepolia.etherscan.io/api"`.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher: RetryingFetcher::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Creates a client from an **explorer API host** and an API key.
    ///
    /// The endpoint URL is derived automatically:
    /// `https://<host>/api`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use etherscan_http::EtherscanClient;
    ///
    /// let explorer = EtherscanClient::from_host("api-sepolia.etherscan.io", "my-key");
    /// ```
    pub fn from_host(host: impl AsRef<str>, api_key: impl AsRef<str>) -> Self {
        Self::new(host_to_api_url(host.as_ref()), api_key.as_ref())
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `ETHERSCAN_API_URL` — full API endpoint URL
    ///   (e.g. `https://api-sepolia.etherscan.io/api`)
    /// - `ETHERSCAN_API_KEY` — explorer API key
    ///
    /// Returns an error if either variable is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use etherscan_http::EtherscanClient;
    ///
    /// let explorer = EtherscanClient::from_env().expect("missing ETHERSCAN_* env vars");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let url = std::env::var("ETHERSCAN_API_URL")
            .map_err(|_| "missing ETHERSCAN_API_URL environment variable".to_owned())?;
        let key = std::env::var("ETHERSCAN_API_KEY")
            .map_err(|_| "missing ETHERSCAN_API_KEY environment variable".to_owned())?;
        if url.trim().is_empty() {
            return Err("ETHERSCAN_API_URL is set but empty".to_owned());
        }
        if key.trim().is_empty() {
            return Err("ETHERSCAN_API_KEY is set but empty".to_owned());
        }
        Ok(Self::new(url, key))
    }

    /// Applies fetch options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: FetchOptions) -> Self {
        self.fetcher = RetryingFetcher::with_options(opts);
        self
    }

    /// Calls an API endpoint and returns the raw envelope `result` text.
    ///
    /// `params` are appended to the query string after `module` and `action`;
    /// the API key is always appended last.
    pub async fn call(&self, module: &str, action: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = self.endpoint_url(module, action, params)?;
        tracing::debug!("calling {module}/{action} at {}", self.api_url);
        let body = self.fetcher.fetch_text(&RequestSpec::get(url)).await?;
        decode::decode_envelope(&body)
    }

    /// Fetches the verified ABI of a deployed contract as raw JSON text.
    pub async fn get_abi_text(&self, address: &str) -> Result<String> {
        self.call("contract", "getabi", &[("address", address.trim())])
            .await
    }

    /// Fetches and parses the verified ABI of a deployed contract.
    pub async fn get_abi(&self, address: &str) -> Result<Value> {
        let text = self.get_abi_text(address).await?;
        abi::parse_abi(&text)
    }

    /// Fetches a contract's ABI and persists it to `path` as pretty-printed
    /// JSON, returning the parsed document.
    pub async fn save_abi(&self, address: &str, path: impl AsRef<Path>) -> Result<Value> {
        let document = self.get_abi(address).await?;
        abi::write_abi_file(path, &document).await?;
        Ok(document)
    }

    fn endpoint_url(&self, module: &str, action: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 3);
        pairs.push(("module", module));
        pairs.push(("action", action));
        pairs.extend_from_slice(params);
        pairs.push(("apikey", self.api_key.as_str()));

        let url = Url::parse_with_params(&self.api_url, &pairs)
            .map_err(|err| EtherscanError::InvalidUrl(err.to_string()))?;
        Ok(url.into())
    }
}
