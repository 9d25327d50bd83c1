//! Authentication factor records.
//!
//! A factor record ties an address (a conventional blockchain address,
//! also used as the storage key) and an email identity to one
//! authentication factor. The `type` tag says what the payload holds:
//! a public key for `key` factors, bloom filters for biometric factors,
//! and so on.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "address": "0xabc",
//!   "email": "alice@example.com",
//!   "type": "facial",
//!   "payload": ["3/0110100111"]
//! }
//! ```
//!
//! Decoding is lenient. Keys match field names case-insensitively, an
//! exact match winning over a folded one. Missing fields, fields of the
//! wrong type and unknown fields leave the record's other fields intact;
//! only input that is not a JSON object fails. The handler stores the
//! caller's bytes verbatim; decoding is only used to find the address and
//! to describe the record in logs.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A factor record that could not be decoded at all.
#[derive(Debug, Error)]
pub enum FactorDecodeError {
    /// The bytes are not JSON
    #[error("factor record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The bytes are JSON but not an object
    #[error("factor record is not a JSON object")]
    NotAnObject,
}

/// An authentication factor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorRecord {
    /// Owner address; doubles as the ledger key
    pub address: String,
    /// Email used to identify the owner
    pub email: String,
    /// Factor type tag ("facial", "password", "pin", "key", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Type-specific payload entries
    pub payload: Vec<String>,
}

impl FactorRecord {
    /// Create a record.
    pub fn new(
        address: impl Into<String>,
        email: impl Into<String>,
        kind: impl Into<String>,
        payload: Vec<String>,
    ) -> Self {
        Self {
            address: address.into(),
            email: email.into(),
            kind: kind.into(),
            payload,
        }
    }

    /// Decode a record from its JSON bytes, keeping every field that
    /// decodes.
    pub fn decode(bytes: &[u8]) -> Result<Self, FactorDecodeError> {
        let fields = match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(fields) => fields,
            _ => return Err(FactorDecodeError::NotAnObject),
        };

        let text = |name: &str| {
            field(&fields, name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default()
        };
        let payload = match field(&fields, "payload") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().unwrap_or_default().to_string())
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            address: text("address"),
            email: text("email"),
            kind: text("type"),
            payload,
        })
    }

    /// Encode the record as JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Classified factor type.
    pub fn factor_kind(&self) -> FactorKind {
        FactorKind::from_tag(&self.kind)
    }

    /// Payload entries that parse as bloom-filter descriptors.
    pub fn bloom_descriptors(&self) -> impl Iterator<Item = BloomDescriptor<'_>> {
        self.payload
            .iter()
            .filter_map(|entry| BloomDescriptor::parse(entry))
    }
}

/// Value of `name` in `fields`: the exact key if present, otherwise the
/// first key equal to `name` ignoring ASCII case.
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

/// Known factor types.
///
/// Classification is informational; unrecognized tags are kept as
/// [`FactorKind::Other`] and never cause a record to be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorKind {
    /// Face biometric
    Facial,
    /// Password hash
    Password,
    /// Numeric PIN
    Pin,
    /// Public key
    Key,
    /// Any other tag
    Other(String),
}

impl FactorKind {
    /// Classify a type tag. Matching is case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "facial" => FactorKind::Facial,
            "password" => FactorKind::Password,
            "pin" => FactorKind::Pin,
            "key" => FactorKind::Key,
            other => FactorKind::Other(other.to_string()),
        }
    }

    /// The tag this kind was classified from.
    pub fn as_str(&self) -> &str {
        match self {
            FactorKind::Facial => "facial",
            FactorKind::Password => "password",
            FactorKind::Pin => "pin",
            FactorKind::Key => "key",
            FactorKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bloom filter payload entry, encoded as `order_number/bitstream`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomDescriptor<'a> {
    /// Position of this filter in the factor's sequence
    pub order: u32,
    /// Filter bits as a string of `0` and `1`
    pub bitstream: &'a str,
}

impl<'a> BloomDescriptor<'a> {
    /// Parse an entry. Returns `None` unless the order is a decimal number
    /// and the bitstream is non-empty and made only of `0`/`1`.
    pub fn parse(entry: &'a str) -> Option<Self> {
        let (order, bitstream) = entry.split_once('/')?;
        let order = order.parse().ok()?;
        if bitstream.is_empty() || !bitstream.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }
        Some(Self { order, bitstream })
    }

    /// Number of bits in the filter.
    pub fn len(&self) -> usize {
        self.bitstream.len()
    }

    /// Always false for a parsed descriptor.
    pub fn is_empty(&self) -> bool {
        self.bitstream.is_empty()
    }

    /// Number of set bits.
    pub fn ones(&self) -> usize {
        self.bitstream.bytes().filter(|b| *b == b'1').count()
    }
}
