use serde::Deserialize;

/// Response envelope shared by Etherscan-compatible API endpoints.
///
/// `status` is `"1"` on success and `"0"` otherwise; `result` carries the
/// payload text on success or an explanation (e.g. rate-limit notice) on
/// failure.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub result: Option<String>,
}
