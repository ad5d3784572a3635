use crate::{wire, EtherscanError, Result};

/// Parses an API response body and unwraps the envelope into its raw
/// `result` text.
pub(crate) fn decode_envelope(body: &str) -> Result<String> {
    let envelope: wire::ApiEnvelope = serde_json::from_str(body).map_err(|err| {
        EtherscanError::Decode(format!("invalid API response JSON: {err}; body: {body}"))
    })?;

    if envelope.status != "1" {
        return Err(EtherscanError::Api {
            message: envelope.message,
            result: envelope.result,
        });
    }

    envelope
        .result
        .ok_or_else(|| EtherscanError::Decode("missing result field in API response".to_owned()))
}
