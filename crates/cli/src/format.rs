//! Output formatting for the three output modes.

use ledgercc_executor::Error;
use serde::Deserialize;
use serde_json::json;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Payload as text, `(empty)` for no payload
    #[default]
    Human,
    /// One JSON document per result
    Json,
    /// Payload bytes only
    Raw,
}

/// Render a successful payload. The result is printed without a trailing
/// newline in raw mode.
pub fn format_payload(payload: &[u8], mode: OutputMode) -> Vec<u8> {
    match mode {
        OutputMode::Human => {
            if payload.is_empty() {
                b"(empty)".to_vec()
            } else {
                String::from_utf8_lossy(payload).into_owned().into_bytes()
            }
        }
        OutputMode::Json => json!({
            "ok": true,
            "payload": String::from_utf8_lossy(payload),
        })
        .to_string()
        .into_bytes(),
        OutputMode::Raw => payload.to_vec(),
    }
}

/// Render a handler error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => err.to_json(),
        OutputMode::Human | OutputMode::Raw => format!("(error) {}", err),
    }
}

/// Render `info`.
pub fn format_info(version: u64, keys: usize, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => json!({ "version": version, "keys": keys }).to_string(),
        OutputMode::Human => format!("version: {}\nkeys: {}", version, keys),
        OutputMode::Raw => format!("{} {}", version, keys),
    }
}

/// Render `keys`.
pub fn format_keys(keys: &[String], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => json!(keys).to_string(),
        OutputMode::Human if keys.is_empty() => "(empty)".to_string(),
        OutputMode::Human => keys
            .iter()
            .enumerate()
            .map(|(i, k)| format!("{}) {}", i + 1, k))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Raw => keys.join("\n"),
    }
}
