//! Executor configuration.

use serde::{Deserialize, Serialize};

/// Controls whether the executor may write to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// All operations allowed
    ReadWrite,
    /// Only `read`, `query` and `getFactor`
    ReadOnly,
}

impl Default for AccessMode {
    fn default() -> Self {
        AccessMode::ReadWrite
    }
}

/// Options for building an executor.
///
/// ```
/// use ledgercc_executor::{AccessMode, ExecutorOptions};
///
/// let opts = ExecutorOptions::new().access_mode(AccessMode::ReadOnly);
/// assert!(opts.is_read_only());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecutorOptions {
    /// Write permission
    pub access_mode: AccessMode,
}

impl ExecutorOptions {
    /// Default options (read-write)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// True in [`AccessMode::ReadOnly`]
    pub fn is_read_only(&self) -> bool {
        self.access_mode == AccessMode::ReadOnly
    }
}
