//! Error type for the typed facade.
//!
//! Wraps executor errors and adds the failures that only the typed
//! methods can produce.

use thiserror::Error;

/// All facade errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The executor rejected or failed the operation
    #[error(transparent)]
    Executor(#[from] ledgercc_executor::Error),

    /// A factor record could not be encoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The executor returned an output the method does not expect (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Executor(e) if e.is_not_found())
    }

    /// Check if a multi-write operation failed after a partial commit.
    pub fn is_partial(&self) -> bool {
        matches!(self, Error::Executor(e) if e.is_partial())
    }

    /// The executor error, if this wraps one.
    pub fn as_executor(&self) -> Option<&ledgercc_executor::Error> {
        match self {
            Error::Executor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
