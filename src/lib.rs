//! # ledgercc
//!
//! A deterministic state-transition handler over an external key-value
//! ledger.
//!
//! Callers hand the handler a function name and string arguments; it
//! validates them, reads and writes the ledger, and returns a byte payload
//! or a typed error. Supported operations: balance initialization and
//! transfer, raw write/read/delete, balance query, and storage of
//! authentication factor records.
//!
//! ## Quick Start
//!
//! ```
//! use ledgercc::prelude::*;
//!
//! let cc = Chaincode::ephemeral();
//! cc.init("alice", 100, "bob", 200)?;
//! cc.transfer("alice", "bob", 30)?;
//!
//! assert_eq!(cc.balance("alice")?, 70);
//! assert_eq!(cc.query("bob")?, b"230".to_vec());
//! # Ok::<(), ledgercc::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`Chaincode`] - typed methods, one per operation
//! - [`Executor`] - the `(function, args) -> payload` entry point
//! - [`LedgerAccessor`] - the ledger contract; [`MemoryLedger`] is the
//!   bundled implementation

#![warn(missing_docs)]

mod chaincode;
mod error;

pub mod prelude;

// Re-export main entry points
pub use chaincode::Chaincode;
pub use error::{Error, Result};

// Re-export the layers underneath
pub use ledgercc_core::{FactorKind, FactorRecord, LedgerAccessor, QuerySummary, StorageError};
pub use ledgercc_executor::{AccessMode, Command, Executor, ExecutorOptions, Operation, Output};
pub use ledgercc_storage::{InstrumentedLedger, LedgerCall, LedgerSnapshot, MemoryLedger};
