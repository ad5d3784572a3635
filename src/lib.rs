//! `etherscan-http` is an async HTTP client for Etherscan-compatible
//! block-explorer APIs.
//!
//! The crate wraps the `/api` query endpoint with ergonomic methods:
//! - [`EtherscanClient::get_abi`]
//! - [`EtherscanClient::save_abi`]
//! - [`EtherscanClient::call`]
//!
//! Requests go through [`RetryingFetcher`], which retries failed attempts
//! with a bounded budget and a fixed backoff delay, and can also be used
//! directly for arbitrary HTTP fetches.

mod abi;
mod client;
mod decode;
mod error;
mod fetch;
mod options;
mod wire;

pub use abi::{parse_abi, write_abi_file};
pub use client::{host_to_api_url, EtherscanClient};
pub use error::EtherscanError;
pub use fetch::{RequestSpec, RetryingFetcher};
pub use options::FetchOptions;

pub type Result<T> = std::result::Result<T, EtherscanError>;
