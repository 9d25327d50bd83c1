//! Account balance encoding.
//!
//! Balances are signed 64-bit integers stored as their base-10 string
//! form. A leading `+` or `-` is accepted on input; the stored form is
//! always canonical (`"+007"` is stored as `"7"`).

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value that is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not an integer: {source}")]
pub struct AmountError {
    /// The rejected text
    pub value: String,
    /// Why the parse failed
    #[source]
    pub source: ParseIntError,
}

/// Parse a balance or transfer amount.
pub fn parse_amount(text: &str) -> Result<i64, AmountError> {
    text.parse::<i64>().map_err(|source| AmountError {
        value: text.to_string(),
        source,
    })
}

/// Parse a stored balance.
///
/// Bytes that are not UTF-8 are reported ASCII-escaped (`\xff`).
pub fn parse_stored_amount(bytes: &[u8]) -> Result<i64, AmountError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => parse_amount(text),
        Err(_) => parse_amount(&String::from_utf8_lossy(bytes)).map_err(|e| AmountError {
            value: bytes.escape_ascii().to_string(),
            source: e.source,
        }),
    }
}

/// Encode a balance for storage.
pub fn encode_amount(amount: i64) -> Vec<u8> {
    amount.to_string().into_bytes()
}

/// Human-readable summary produced by `query`.
///
/// Serializes as `{"Name":"A","Amount":"100"}`. The amount is the stored
/// value verbatim, so it is a string even when the value is not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySummary {
    /// Key that was queried
    #[serde(rename = "Name")]
    pub name: String,
    /// Stored value as text
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl QuerySummary {
    /// Build a summary for a stored value.
    pub fn new(name: impl Into<String>, value: &[u8]) -> Self {
        Self {
            name: name.into(),
            amount: String::from_utf8_lossy(value).into_owned(),
        }
    }

    /// JSON text of the summary.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{{\"Name\":{:?},\"Amount\":{:?}}}", self.name, self.amount)
        })
    }
}
