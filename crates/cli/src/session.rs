//! A harness session: one executor over a snapshot-backed ledger.

use std::path::PathBuf;

use ledgercc_executor::{AccessMode, Executor, ExecutorOptions};
use ledgercc_storage::{LedgerSnapshot, MemoryLedger, SnapshotError};
use tracing::{dispatcher, info, Dispatch};

use crate::config::CliConfig;
use crate::parse::CliAction;

/// Result of a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Handler payload
    Payload(Vec<u8>),
    /// Ledger version and key count
    Info { version: u64, keys: usize },
    /// Stored keys
    Keys(Vec<String>),
}

/// Executor plus the snapshot it was loaded from.
pub struct Session {
    executor: Executor<MemoryLedger>,
    snapshot_path: PathBuf,
    dispatch: Dispatch,
    dirty: bool,
}

impl Session {
    /// Load the configured snapshot and build the executor.
    pub fn open(config: &CliConfig, dispatch: Dispatch) -> Result<Self, SnapshotError> {
        let ledger = dispatcher::with_default(&dispatch, || -> Result<MemoryLedger, SnapshotError> {
            LedgerSnapshot::load(&config.ledger)?.restore()
        })?;
        let mode = if config.read_only {
            AccessMode::ReadOnly
        } else {
            AccessMode::ReadWrite
        };
        let executor = Executor::with_options(ledger, ExecutorOptions::new().access_mode(mode))
            .with_dispatch(dispatch.clone());
        Ok(Self {
            executor,
            snapshot_path: config.ledger.clone(),
            dispatch,
            dirty: false,
        })
    }

    /// Run one action.
    pub fn run(&mut self, action: CliAction) -> Result<Outcome, ledgercc_executor::Error> {
        if action.runs_handler() && !self.executor.options().is_read_only() {
            // A failed invocation may still have committed its first write.
            self.dirty = true;
        }
        match action {
            CliAction::Init(args) => self.executor.init(args).map(|()| Outcome::Payload(Vec::new())),
            CliAction::Invoke { function, args } => {
                self.executor.apply(&function, args).map(Outcome::Payload)
            }
            CliAction::Info => Ok(Outcome::Info {
                version: self.executor.ledger().version(),
                keys: self.executor.ledger().len(),
            }),
            CliAction::Keys => Ok(Outcome::Keys(self.executor.ledger().keys())),
        }
    }

    /// True if a read-write handler call ran since the last save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save the snapshot if the ledger may have changed.
    pub fn save_if_dirty(&mut self) -> Result<(), SnapshotError> {
        if !self.dirty {
            return Ok(());
        }
        let snapshot = LedgerSnapshot::capture(self.executor.ledger());
        dispatcher::with_default(&self.dispatch, || {
            snapshot.save(&self.snapshot_path)?;
            info!(
                "Saved {} keys to {}",
                snapshot.entries.len(),
                self.snapshot_path.display()
            );
            Ok::<(), SnapshotError>(())
        })?;
        self.dirty = false;
        Ok(())
    }
}
