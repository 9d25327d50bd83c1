//! Transition handler for ledgercc
//!
//! The executor accepts a named operation with string arguments, applies
//! it to a [`LedgerAccessor`](ledgercc_core::LedgerAccessor) and returns a
//! byte payload or a typed [`Error`].
//!
//! # Example
//!
//! ```
//! use ledgercc_executor::Executor;
//! use ledgercc_storage::MemoryLedger;
//!
//! let executor = Executor::new(MemoryLedger::new());
//! executor.init(vec!["A".into(), "100".into(), "B".into(), "200".into()])?;
//!
//! executor.apply("move", vec!["A".into(), "B".into(), "10".into()])?;
//! assert_eq!(executor.apply("query", vec!["A".into()])?, b"90".to_vec());
//! # Ok::<(), ledgercc_executor::Error>(())
//! ```
//!
//! Entry points:
//! - [`Executor::init`]: the instantiate call, seeds two balances
//! - [`Executor::apply`]: the invoke call, `(function, args) -> payload`
//! - [`Executor::execute`]: runs an already-parsed [`Command`]

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod error;
mod executor;
mod handlers;
mod options;
mod output;


pub use command::{Command, Operation};
pub use error::{Error, Result};
pub use executor::Executor;
pub use options::{AccessMode, ExecutorOptions};
pub use output::Output;
