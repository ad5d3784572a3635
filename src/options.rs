/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchOptions {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total attempt budget for one logical fetch. Values below 1 are
    /// treated as 1; attempts are strictly sequential.
    pub max_retries: usize,
    /// Fixed delay in milliseconds between failed attempts.
    pub backoff_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_retries: 3,
            backoff_ms: 3_000,
        }
    }
}
