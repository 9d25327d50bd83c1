//! Executor error type.
//!
//! ## Wire Format
//!
//! [`Error::to_json`] renders every error as:
//! ```json
//! {
//!   "code": "EntityNotFound",
//!   "message": "entity not found: \"A\"",
//!   "details": {"key": "A"}
//! }
//! ```
//!
//! ## Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | UnknownOperation | Function name is not a known operation |
//! | InvalidArgumentCount | Wrong number of arguments |
//! | InvalidAmount | Argument or stored balance is not an integer |
//! | Overflow | Transfer result does not fit in 64 bits |
//! | EntityNotFound | Key is absent from the ledger |
//! | LedgerReadError | Ledger `get` failed |
//! | LedgerWriteError | Ledger `put` or `delete` failed |
//! | AccessDenied | Mutation attempted on a read-only executor |

use ledgercc_core::StorageError;
use serde_json::{json, Value};
use thiserror::Error;

use crate::command::OPERATION_LIST;

/// Executor errors.
///
/// Every error is terminal for the invocation that produced it; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Function name did not match any operation
    #[error("unknown operation {name:?}, expected one of: {}", OPERATION_LIST)]
    UnknownOperation {
        /// The rejected function name
        name: String,
    },

    /// Wrong number of arguments for the operation
    #[error("incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        /// Operation name
        operation: &'static str,
        /// Arguments the operation takes
        expected: usize,
        /// Arguments supplied
        actual: usize,
    },

    /// A numeric argument or stored balance is not a base-10 integer
    #[error("invalid amount for {subject}: {value:?} is not an integer")]
    InvalidAmount {
        /// Argument name or ledger key the value came from
        subject: String,
        /// The rejected text
        value: String,
    },

    /// Transfer arithmetic left the 64-bit range
    #[error("balance overflow applying {amount} to {key:?}")]
    Overflow {
        /// Account whose balance would overflow
        key: String,
        /// Transfer amount
        amount: i64,
    },

    /// Key is absent from the ledger
    #[error("entity not found: {key:?}")]
    EntityNotFound {
        /// The missing key
        key: String,
    },

    /// Ledger `get` failed
    #[error("failed to get state for {key:?}: {source}")]
    LedgerRead {
        /// Key being read
        key: String,
        /// Ledger error
        #[source]
        source: StorageError,
    },

    /// Ledger `put` or `delete` failed
    ///
    /// `committed` lists keys this invocation had already written; the
    /// ledger has no rollback, so those writes stay in place.
    #[error("failed to write state for {key:?}{}: {source}", partial_note(.committed))]
    LedgerWrite {
        /// Key being written or deleted
        key: String,
        /// Keys written earlier in the same invocation
        committed: Vec<String>,
        /// Ledger error
        #[source]
        source: StorageError,
    },

    /// Mutating operation on a read-only executor
    #[error("{operation} is not permitted in read-only mode")]
    AccessDenied {
        /// Operation name
        operation: &'static str,
    },
}

fn partial_note(committed: &[String]) -> String {
    if committed.is_empty() {
        String::new()
    } else {
        format!(" after committing {}", committed.join(", "))
    }
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Canonical error code
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownOperation { .. } => "UnknownOperation",
            Error::InvalidArgumentCount { .. } => "InvalidArgumentCount",
            Error::InvalidAmount { .. } => "InvalidAmount",
            Error::Overflow { .. } => "Overflow",
            Error::EntityNotFound { .. } => "EntityNotFound",
            Error::LedgerRead { .. } => "LedgerReadError",
            Error::LedgerWrite { .. } => "LedgerWriteError",
            Error::AccessDenied { .. } => "AccessDenied",
        }
    }

    /// Ledger key the error is about, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Overflow { key, .. }
            | Error::EntityNotFound { key }
            | Error::LedgerRead { key, .. }
            | Error::LedgerWrite { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::EntityNotFound { .. })
    }

    /// Check if the invocation failed after some of its writes committed.
    pub fn is_partial(&self) -> bool {
        matches!(self, Error::LedgerWrite { committed, .. } if !committed.is_empty())
    }

    /// Structured details for the wire form
    pub fn details(&self) -> Value {
        match self {
            Error::UnknownOperation { name } => json!({ "name": name }),
            Error::InvalidArgumentCount {
                operation,
                expected,
                actual,
            } => json!({ "operation": operation, "expected": expected, "actual": actual }),
            Error::InvalidAmount { subject, value } => {
                json!({ "subject": subject, "value": value })
            }
            Error::Overflow { key, amount } => json!({ "key": key, "amount": amount }),
            Error::EntityNotFound { key } | Error::LedgerRead { key, .. } => json!({ "key": key }),
            Error::LedgerWrite { key, committed, .. } => {
                json!({ "key": key, "committed": committed })
            }
            Error::AccessDenied { operation } => json!({ "operation": operation }),
        }
    }

    /// JSON wire form: `{"code":..,"message":..,"details":{..}}`
    pub fn to_json(&self) -> String {
        json!({
            "code": self.code(),
            "message": self.to_string(),
            "details": self.details(),
        })
        .to_string()
    }
}
