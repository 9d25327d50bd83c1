//! Convenient imports for ledgercc.
//!
//! ```
//! use ledgercc::prelude::*;
//!
//! let cc = Chaincode::ephemeral();
//! cc.write("greeting", "hello")?;
//! # Ok::<(), ledgercc::Error>(())
//! ```

// Main entry point
pub use crate::chaincode::Chaincode;

// Error handling
pub use crate::error::{Error, Result};

// Ledger contract and the in-memory ledger
pub use ledgercc_core::{FactorRecord, LedgerAccessor, QuerySummary};
pub use ledgercc_storage::MemoryLedger;

// Executor configuration
pub use ledgercc_executor::{AccessMode, ExecutorOptions};
