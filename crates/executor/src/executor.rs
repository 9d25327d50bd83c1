//! The executor: single entry point for all ledger transitions.

use ledgercc_core::LedgerAccessor;
use tracing::{debug, dispatcher, info, warn, Dispatch};

use crate::command::Command;
use crate::handlers::{balance, factor, kv};
use crate::options::ExecutorOptions;
use crate::{Error, Output, Result};

/// Applies commands to a ledger.
///
/// The executor holds no state of its own between calls: every call reads
/// and writes the ledger and nothing else. Each call runs to completion
/// with at most two ledger reads followed by at most two ledger writes.
///
/// Logging goes to the [`Dispatch`] given at construction. An executor
/// built with [`Executor::new`] is silent until
/// [`with_dispatch`](Executor::with_dispatch) supplies a subscriber.
///
/// # Thread Safety
///
/// `Executor<L>` is `Send + Sync` whenever `L` is. It takes no locks;
/// ordering of concurrent calls on the same keys is left to the ledger.
pub struct Executor<L> {
    ledger: L,
    options: ExecutorOptions,
    dispatch: Dispatch,
}

impl<L: LedgerAccessor> Executor<L> {
    /// Create an executor with default options and no logging.
    pub fn new(ledger: L) -> Self {
        Self::with_options(ledger, ExecutorOptions::default())
    }

    /// Create an executor with explicit options.
    pub fn with_options(ledger: L, options: ExecutorOptions) -> Self {
        Self {
            ledger,
            options,
            dispatch: Dispatch::none(),
        }
    }

    /// Send this executor's logs to `dispatch`.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// The ledger this executor writes to.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The executor's options.
    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }

    /// Consume the executor, returning its ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Instantiate: seed two balances from `[A, Aval, B, Bval]`.
    pub fn init(&self, args: Vec<String>) -> Result<()> {
        dispatcher::with_default(&self.dispatch, || -> Result<()> {
            info!("Init with {} arguments", args.len());
            let cmd = Command::init(args)?;
            self.run(cmd).map(|_| ())
        })
    }

    /// Invoke: run `function` with `args` and return the payload.
    ///
    /// Write-only operations return an empty payload.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownOperation`] if `function` is not recognized
    /// - [`Error::InvalidArgumentCount`] if `args` has the wrong length
    /// - any error of the operation itself
    pub fn apply(&self, function: &str, args: Vec<String>) -> Result<Vec<u8>> {
        dispatcher::with_default(&self.dispatch, || -> Result<Vec<u8>> {
            info!("Invoke {} with {} arguments", function, args.len());
            let cmd = Command::from_invocation(function, args).map_err(|e| {
                if let Error::UnknownOperation { .. } = e {
                    warn!("{}", e);
                }
                e
            })?;
            self.run(cmd).map(Output::into_payload)
        })
    }

    /// Execute a parsed command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        dispatcher::with_default(&self.dispatch, || self.run(cmd))
    }

    fn run(&self, cmd: Command) -> Result<Output> {
        if self.options.is_read_only() && cmd.is_mutating() {
            return Err(Error::AccessDenied {
                operation: cmd.name(),
            });
        }

        let name = cmd.name();
        let result = match cmd {
            Command::Init {
                a,
                a_amount,
                b,
                b_amount,
            } => balance::init(&self.ledger, &a, &a_amount, &b, &b_amount),
            Command::Move { from, to, amount } => {
                balance::transfer(&self.ledger, &from, &to, &amount)
            }
            Command::Write { key, value } => kv::write(&self.ledger, &key, &value),
            Command::Read { key } => kv::read(&self.ledger, &key),
            Command::Delete { key } => kv::delete(&self.ledger, &key),
            Command::Query { key } => kv::query(&self.ledger, &key),
            Command::StoreFactor { record } => factor::store_factor(&self.ledger, &record),
            Command::GetFactor { address } => factor::get_factor(&self.ledger, &address),
        };

        if let Err(e) = &result {
            debug!("{} failed: {}", name, e);
        }
        result
    }
}

impl<L> std::fmt::Debug for Executor<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("options", &self.options)
            .finish()
    }
}
