//! Ledger implementations for ledgercc
//!
//! This crate provides concrete [`LedgerAccessor`](ledgercc_core::LedgerAccessor)
//! implementations:
//! - MemoryLedger: DashMap-backed store with a global write version
//! - LedgerSnapshot: JSON file image of a MemoryLedger
//! - InstrumentedLedger: call recording and fault injection over any ledger

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod instrumented;
pub mod memory;
pub mod snapshot;

pub use instrumented::{InstrumentedLedger, LedgerCall};
pub use memory::{MemoryLedger, VersionedValue};
pub use snapshot::{LedgerSnapshot, SnapshotEntry, SnapshotError};
