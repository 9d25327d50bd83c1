//! Core types for ledgercc
//!
//! This crate defines the contract between the transition handler and the
//! ledger it runs against:
//! - [`LedgerAccessor`]: get/put/delete of byte values keyed by string
//! - [`StorageError`]: failures reported by a ledger
//! - [`FactorRecord`]: the authentication factor record and its decoder
//! - [`balance`]: decimal encoding of account balances

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod balance;
pub mod error;
pub mod factor;
pub mod ledger;

pub use balance::{encode_amount, parse_amount, parse_stored_amount, AmountError, QuerySummary};
pub use error::{StorageError, StorageResult};
pub use factor::{BloomDescriptor, FactorDecodeError, FactorKind, FactorRecord};
pub use ledger::LedgerAccessor;
