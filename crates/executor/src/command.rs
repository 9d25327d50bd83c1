//! Operations and commands.
//!
//! [`Operation`] is the closed set of function names the invoke entry point
//! accepts. [`Command`] is an operation with its arguments checked for
//! arity and bound to names. Parsing a command never touches the ledger.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Known function names, for error messages.
pub(crate) const OPERATION_LIST: &str =
    "delete, query, move, write, read, storeFactor, getFactor";

/// An operation reachable through [`Executor::apply`](crate::Executor::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Remove a key
    Delete,
    /// Read a balance
    Query,
    /// Transfer an amount between two balances
    Move,
    /// Overwrite a key with a value
    Write,
    /// Read a raw value
    Read,
    /// Store a factor record under its address
    StoreFactor,
    /// Fetch a factor record by address
    GetFactor,
}

impl Operation {
    /// Every operation, in dispatch order
    pub const ALL: [Operation; 7] = [
        Operation::Delete,
        Operation::Query,
        Operation::Move,
        Operation::Write,
        Operation::Read,
        Operation::StoreFactor,
        Operation::GetFactor,
    ];

    /// Resolve a function name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "delete" => Some(Operation::Delete),
            "query" => Some(Operation::Query),
            "move" => Some(Operation::Move),
            "write" => Some(Operation::Write),
            "read" => Some(Operation::Read),
            "storeFactor" => Some(Operation::StoreFactor),
            "getFactor" => Some(Operation::GetFactor),
            _ => None,
        }
    }

    /// Function name
    pub fn name(self) -> &'static str {
        match self {
            Operation::Delete => "delete",
            Operation::Query => "query",
            Operation::Move => "move",
            Operation::Write => "write",
            Operation::Read => "read",
            Operation::StoreFactor => "storeFactor",
            Operation::GetFactor => "getFactor",
        }
    }

    /// Number of arguments the operation takes
    pub fn arity(self) -> usize {
        match self {
            Operation::Move => 3,
            Operation::Write => 2,
            _ => 1,
        }
    }

    /// True if the operation writes to the ledger
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Operation::Delete | Operation::Move | Operation::Write | Operation::StoreFactor
        )
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Operation::from_name(name).ok_or_else(|| Error::UnknownOperation {
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed invocation.
///
/// Amount arguments stay textual: they are parsed by the handler, after
/// the reads the operation performs, so a bad amount is reported in the
/// same position as the original handler reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Seed two balances (instantiate only)
    Init {
        /// First account
        a: String,
        /// First account's balance
        a_amount: String,
        /// Second account
        b: String,
        /// Second account's balance
        b_amount: String,
    },

    /// Transfer `amount` from `from` to `to`
    Move {
        /// Debited account
        from: String,
        /// Credited account
        to: String,
        /// Amount to transfer
        amount: String,
    },

    /// Overwrite `key` with `value`
    Write {
        /// Target key
        key: String,
        /// Raw value
        value: Vec<u8>,
    },

    /// Read the raw value at `key`
    Read {
        /// Key to read
        key: String,
    },

    /// Remove `key`
    Delete {
        /// Key to remove
        key: String,
    },

    /// Read the balance at `key`
    Query {
        /// Account to query
        key: String,
    },

    /// Store a serialized factor record
    StoreFactor {
        /// Record bytes as received
        record: Vec<u8>,
    },

    /// Fetch the factor record stored at `address`
    GetFactor {
        /// Record address
        address: String,
    },
}

impl Command {
    /// Parse the instantiate arguments `[A, Aval, B, Bval]`.
    pub fn init(args: Vec<String>) -> Result<Self> {
        let [a, a_amount, b, b_amount] = take_args::<4>("init", args)?;
        Ok(Command::Init {
            a,
            a_amount,
            b,
            b_amount,
        })
    }

    /// Parse an invoke call.
    ///
    /// Fails with [`Error::UnknownOperation`] for an unrecognized name and
    /// [`Error::InvalidArgumentCount`] for the wrong number of arguments.
    pub fn from_invocation(function: &str, args: Vec<String>) -> Result<Self> {
        let operation: Operation = function.parse()?;
        let name = operation.name();
        Ok(match operation {
            Operation::Delete => {
                let [key] = take_args::<1>(name, args)?;
                Command::Delete { key }
            }
            Operation::Query => {
                let [key] = take_args::<1>(name, args)?;
                Command::Query { key }
            }
            Operation::Move => {
                let [from, to, amount] = take_args::<3>(name, args)?;
                Command::Move { from, to, amount }
            }
            Operation::Write => {
                let [key, value] = take_args::<2>(name, args)?;
                Command::Write {
                    key,
                    value: value.into_bytes(),
                }
            }
            Operation::Read => {
                let [key] = take_args::<1>(name, args)?;
                Command::Read { key }
            }
            Operation::StoreFactor => {
                let [record] = take_args::<1>(name, args)?;
                Command::StoreFactor {
                    record: record.into_bytes(),
                }
            }
            Operation::GetFactor => {
                let [address] = take_args::<1>(name, args)?;
                Command::GetFactor { address }
            }
        })
    }

    /// The operation this command runs, `None` for [`Command::Init`]
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Command::Init { .. } => None,
            Command::Move { .. } => Some(Operation::Move),
            Command::Write { .. } => Some(Operation::Write),
            Command::Read { .. } => Some(Operation::Read),
            Command::Delete { .. } => Some(Operation::Delete),
            Command::Query { .. } => Some(Operation::Query),
            Command::StoreFactor { .. } => Some(Operation::StoreFactor),
            Command::GetFactor { .. } => Some(Operation::GetFactor),
        }
    }

    /// Name used in logs and errors
    pub fn name(&self) -> &'static str {
        self.operation().map(Operation::name).unwrap_or("init")
    }

    /// True if the command writes to the ledger
    pub fn is_mutating(&self) -> bool {
        self.operation().map(Operation::is_mutating).unwrap_or(true)
    }
}

fn take_args<const N: usize>(operation: &'static str, args: Vec<String>) -> Result<[String; N]> {
    <[String; N]>::try_from(args).map_err(|args| Error::InvalidArgumentCount {
        operation,
        expected: N,
        actual: args.len(),
    })
}
