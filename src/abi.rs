use std::path::Path;

use serde_json::Value;

use crate::{EtherscanError, Result};

/// Parses ABI JSON text into a document.
///
/// Explorers return the ABI as a JSON-encoded string inside the response
/// envelope; the decoded document must be an array of item descriptors
/// (functions, events, constructors).
pub fn parse_abi(text: &str) -> Result<Value> {
    let abi: Value = serde_json::from_str(text)
        .map_err(|err| EtherscanError::Decode(format!("invalid ABI JSON: {err}")))?;

    if !abi.is_array() {
        return Err(EtherscanError::Decode(
            "ABI document must be a JSON array".to_owned(),
        ));
    }

    Ok(abi)
}

/// Writes an ABI document to disk as pretty-printed JSON.
pub async fn write_abi_file(path: impl AsRef<Path>, abi: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(abi)
        .map_err(|err| EtherscanError::Decode(format!("unserializable ABI document: {err}")))?;
    tokio::fs::write(path, pretty)
        .await
        .map_err(EtherscanError::Io)
}
