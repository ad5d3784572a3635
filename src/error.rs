/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum EtherscanError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Terminal failure after the configured number of attempts, wrapping
    /// the error from the last attempt.
    #[error("all {attempts} attempts failed")]
    RetriesExhausted {
        /// Number of attempts performed before giving up.
        attempts: usize,
        /// Error from the final attempt.
        #[source]
        source: Box<EtherscanError>,
    },
    /// The explorer API answered with a non-success envelope status.
    #[error("api error: {message}{}", result_suffix(.result))]
    Api {
        /// Envelope `message` text, e.g. `NOTOK`.
        message: String,
        /// Envelope `result` text explaining the failure, when present.
        result: Option<String>,
    },
    /// Response decoding or protocol-shape validation error.
    #[error("decode error: {0}")]
    Decode(String),
    /// Endpoint URL could not be constructed from the configured base.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    /// Filesystem error while persisting an ABI document.
    #[error("io error: {0}")]
    Io(std::io::Error),
}

fn result_suffix(result: &Option<String>) -> String {
    match result {
        Some(text) => format!(" ({text})"),
        None => String::new(),
    }
}
