//! Errors reported by a ledger.

use thiserror::Error;

/// Failure of a single ledger call.
///
/// The transition handler never inspects the variant; it wraps the error
/// into a read or write failure naming the key involved.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The ledger could not serve the request
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    /// A fault injected by a test or simulation wrapper
    #[error("injected fault on {operation} {key:?}")]
    Injected {
        /// Ledger call that failed ("get", "put", "delete")
        operation: &'static str,
        /// Key the call was issued for
        key: String,
    },

    /// I/O error from a file-backed ledger
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ledger calls.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
